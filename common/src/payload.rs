//! APIレスポンスの正規化
//!
//! `/api/vehicles/{id}` のレスポンス形は固定されていないため、
//! どの形でも `Vec<VehicleRecord>` にそろえてから画面側へ渡す。

use serde::de::Error as _;
use serde_json::Value;

use crate::error::Result;
use crate::types::{FlattenedRow, VehicleRecord};

/// レスポンス本文を車両配列へ正規化
///
/// # Arguments
/// * `body` - レスポンス本文（JSON）
///
/// # Returns
/// 単一オブジェクトは1要素の配列、`null` は空配列
pub fn decode_vehicles(body: &str) -> Result<Vec<VehicleRecord>> {
    let value: Value = serde_json::from_str(body)?;
    let records = vehicles_from_value(value)?;
    tracing::debug!(count = records.len(), "decoded vehicle payload");
    Ok(records)
}

/// デシリアライズ済みの値から正規化（wasm側でJsValueから変換した場合など）
///
/// 形を先に見分けてから具体的な型へ変換する。日付不正などの原因がエラーに残る。
///
/// * `[{...}, ...]` - そのまま
/// * `{"vehicles": [...]}` - 中身（`null` は空配列）
/// * `{...}` - 1要素
/// * `null` - 空配列
pub fn vehicles_from_value(value: Value) -> Result<Vec<VehicleRecord>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut map) if map.contains_key("vehicles") => match map.remove("vehicles") {
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(vehicles) => Ok(serde_json::from_value(vehicles)?),
        },
        Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        other => Err(serde_json::Error::custom(format!("unexpected vehicle payload: {}", other)).into()),
    }
}

/// グリッド用に1車両1行へ展開（順序は維持）
pub fn flatten_rows(records: &[VehicleRecord]) -> Vec<FlattenedRow> {
    records.iter().map(FlattenedRow::from).collect()
}
