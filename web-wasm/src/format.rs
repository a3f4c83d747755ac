//! 表示用フォーマット

use rental_viewer_common::RentalDate;
use wasm_bindgen::JsValue;

/// 未設定の日付・IDの表示
pub const NOT_AVAILABLE: &str = "N/A";

/// ブラウザのロケール形式の日付（`Date.toLocaleDateString`）
pub fn locale_date(date: &RentalDate) -> String {
    let js_date = js_sys::Date::new(&JsValue::from_str(&date.to_iso_string()));
    js_date
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

pub fn optional_date(date: Option<&RentalDate>) -> String {
    date.map(locale_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// グリッドのセル表示（ISO日付、未設定は空欄）
pub fn grid_date(date: Option<&RentalDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
