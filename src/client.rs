//! 車両APIクライアント（reqwest）

use std::time::Duration;

use rental_viewer_common::{decode_vehicles, ApiEndpoint, ContractId, FetchError, VehicleRecord};

use crate::error::Result;

pub struct VehicleClient {
    http: reqwest::Client,
    endpoint: ApiEndpoint,
}

impl VehicleClient {
    /// クライアント作成
    ///
    /// # Arguments
    /// * `endpoint` - 接続先
    /// * `timeout` - 要求タイムアウト（`None` なら無制限）
    pub fn new(endpoint: ApiEndpoint, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// 車両レコードを取得（IDなしは一覧、IDありはスコープ指定）
    ///
    /// 応答が単一オブジェクトでも配列にそろえて返す。再試行はしない。
    pub async fn fetch_vehicles(&self, identifier: Option<ContractId>) -> std::result::Result<Vec<VehicleRecord>, FetchError> {
        let url = self.endpoint.vehicles_url(identifier);
        tracing::debug!(%url, "GET vehicles");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "vehicle API returned error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_vehicles(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
