//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid filter date (expected YYYY-MM-DD): {0}")]
    InvalidFilterDate(String),

    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// 車両データ取得の失敗
///
/// 原因はログ用に保持するが、ユーザーに見せるのは常に
/// [`FetchError::USER_MESSAGE`] のみ（ステータスコードで区別しない）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    #[error("response decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// 画面表示用の固定メッセージ
    pub const USER_MESSAGE: &'static str = "Failed to fetch vehicle data. Please try again.";

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

impl From<Error> for FetchError {
    fn from(err: Error) -> Self {
        match err {
            Error::Fetch(inner) => inner,
            other => FetchError::Decode(other.to_string()),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
