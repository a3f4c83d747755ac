//! 接続先設定
//!
//! 優先順: ホストページの `<meta name="rental-api-base">` → ビルド時の
//! `RENTAL_API_BASE` → 既定値

use rental_viewer_common::ApiEndpoint;

const API_BASE_META: &str = "meta[name='rental-api-base']";

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(API_BASE_META).ok()??;
    element
        .get_attribute("content")
        .filter(|content| !content.trim().is_empty())
}

/// 起動時に1回だけ解決し、contextで各コンポーネントへ渡す
pub fn resolve_endpoint() -> ApiEndpoint {
    let configured = meta_api_base().or_else(|| option_env!("RENTAL_API_BASE").map(str::to_string));

    match configured.map(ApiEndpoint::new) {
        Some(Ok(endpoint)) => endpoint,
        Some(Err(err)) => {
            web_sys::console::warn_1(&format!("{}; using default endpoint", err).into());
            ApiEndpoint::default()
        }
        None => ApiEndpoint::default(),
    }
}
