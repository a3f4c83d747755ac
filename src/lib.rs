//! 車両レンタル契約ビューア（ネイティブ側）
//!
//! 取得・設定・端末表示。絞り込みやページ送りの状態は `rental_viewer_common` にある。

pub mod browse;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
