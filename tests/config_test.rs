//! 設定ファイルテスト

use rental_viewer::config::Config;
use rental_viewer::error::RentalViewerError;
use rental_viewer_common::{PageSize, DEFAULT_API_BASE};
use std::time::Duration;
use tempfile::tempdir;

/// 壊れた設定ファイルは既定値から始め、保存で修復できる
#[test]
fn test_malformed_file_can_be_repaired() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"page_size": 7}"#).unwrap();

    let mut config = Config::load_or_default_from(&path);
    assert_eq!(config, Config::default());

    config.page_size = PageSize::TwentyFive;
    config.save_to(&path).expect("保存失敗");
    let repaired = Config::load_from(&path).expect("読込失敗");
    assert_eq!(repaired.page_size, PageSize::TwentyFive);
}

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_file_gives_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読込失敗");

    assert_eq!(config, Config::default());
    assert_eq!(config.page_size, PageSize::Ten);
    assert!(config.timeout().is_none());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_api_base("http://fleet.internal:8080/").expect("設定失敗");
    config.timeout_seconds = Some(15);
    config.page_size = PageSize::TwentyFive;
    config.save_to(&path).expect("保存失敗");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"page_size\": 25"));

    let loaded = Config::load_from(&path).expect("読込失敗");
    assert_eq!(loaded, config);
    assert_eq!(loaded.api_base.as_deref(), Some("http://fleet.internal:8080"));
    assert_eq!(loaded.timeout(), Some(Duration::from_secs(15)));
}

/// 一部の項目だけの設定ファイル
#[test]
fn test_load_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_base": "https://rentals.example.com"}"#).unwrap();

    let config = Config::load_from(&path).expect("読込失敗");
    assert_eq!(config.api_base.as_deref(), Some("https://rentals.example.com"));
    assert_eq!(config.page_size, PageSize::Ten);
}

/// 不正なページサイズはJSONエラー
#[test]
fn test_load_rejects_unknown_page_size() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"page_size": 7}"#).unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, RentalViewerError::JsonParse(_)));
}

/// 接続先の優先順位: 引数 → 環境変数 → 設定ファイル → 既定値
#[test]
fn test_endpoint_precedence() {
    let mut config = Config::default();
    assert_eq!(config.resolve_endpoint(None, None).unwrap().base_url(), DEFAULT_API_BASE);

    config.api_base = Some("http://from-file:1".to_string());
    assert_eq!(config.resolve_endpoint(None, None).unwrap().base_url(), "http://from-file:1");

    let env = Some("http://from-env:2".to_string());
    assert_eq!(
        config.resolve_endpoint(None, env.clone()).unwrap().base_url(),
        "http://from-env:2"
    );

    assert_eq!(
        config.resolve_endpoint(Some("http://from-flag:3"), env).unwrap().base_url(),
        "http://from-flag:3"
    );

    // 空の環境変数は無視
    assert_eq!(
        config.resolve_endpoint(None, Some("  ".to_string())).unwrap().base_url(),
        "http://from-file:1"
    );
}

/// 不正なURLは拒否
#[test]
fn test_invalid_api_base() {
    let mut config = Config::default();
    let err = config.set_api_base("localhost:5277").unwrap_err();
    assert!(matches!(err, RentalViewerError::Common(_)));
    assert!(config.api_base.is_none());

    assert!(config.resolve_endpoint(Some("not a url"), None).is_err());
}

/// タイムアウト0は無制限
#[test]
fn test_zero_timeout_means_none() {
    let config = Config {
        timeout_seconds: Some(0),
        ..Default::default()
    };
    assert!(config.timeout().is_none());
}
