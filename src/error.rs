use rental_viewer_common::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalViewerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error(transparent)]
    Common(#[from] rental_viewer_common::Error),

    /// 原因は `source` に残し、表示は固定メッセージのみ
    #[error("{}", FetchError::USER_MESSAGE)]
    Fetch(#[from] FetchError),

    #[error("HTTPクライアント初期化エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RentalViewerError>;
