//! 車両一覧・契約IDスコープの取得

use rental_viewer_common::{vehicles_from_value, ApiEndpoint, ContractId, FetchError, VehicleRecord};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// JsValueのエラー内容を文字列化
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn get(url: &str) -> Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

/// 車両レコードを取得（IDなしは一覧、IDありはスコープ指定）
///
/// 応答が単一オブジェクトでも配列にそろえて返す。再試行・キャッシュはしない。
///
/// # Arguments
/// * `endpoint` - 接続先
/// * `identifier` - 契約ID
pub async fn fetch_vehicles(
    endpoint: &ApiEndpoint,
    identifier: Option<ContractId>,
) -> Result<Vec<VehicleRecord>, FetchError> {
    let url = endpoint.vehicles_url(identifier);

    let result: Result<Vec<VehicleRecord>, FetchError> = async {
        let resp = get(&url)
            .await
            .map_err(|e| FetchError::Transport(describe(&e)))?;

        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }

        let json_promise = resp.json().map_err(|e| FetchError::Decode(describe(&e)))?;
        let json = JsFuture::from(json_promise)
            .await
            .map_err(|e| FetchError::Decode(describe(&e)))?;
        let value: serde_json::Value =
            serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Decode(e.to_string()))?;

        vehicles_from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
    }
    .await;

    match &result {
        Ok(records) => {
            web_sys::console::log_1(&format!("GET {} -> {} vehicle(s)", url, records.len()).into());
        }
        Err(err) => {
            web_sys::console::error_1(&format!("GET {} failed: {}", url, err).into());
        }
    }
    result
}
