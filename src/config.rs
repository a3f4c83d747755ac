use crate::error::{RentalViewerError, Result};
use rental_viewer_common::{ApiEndpoint, PageSize};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 接続先を上書きする環境変数
pub const API_BASE_ENV: &str = "RENTAL_API_BASE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// APIのベースURL（未設定なら既定の接続先）
    pub api_base: Option<String>,
    /// 要求タイムアウト秒（未設定なら無制限）
    pub timeout_seconds: Option<u64>,
    /// グリッドの既定ページサイズ
    pub page_size: PageSize,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない設定ファイルは警告して既定値から始める（`config` サブコマンドでの修復用）
    ///
    /// 保存すると壊れたファイルは上書きされる
    pub fn load_or_default_from(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "config file unreadable; starting from defaults");
                eprintln!("⚠ 設定ファイルを読み込めません（既定値で続行）: {}", err);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RentalViewerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("rental-viewer").join("config.json"))
    }

    /// 接続先を決定（優先順: 引数 → 環境変数 → 設定ファイル → 既定値）
    pub fn endpoint(&self, flag: Option<&str>) -> Result<ApiEndpoint> {
        self.resolve_endpoint(flag, std::env::var(API_BASE_ENV).ok())
    }

    pub fn resolve_endpoint(&self, flag: Option<&str>, env: Option<String>) -> Result<ApiEndpoint> {
        let chosen = flag
            .map(str::to_string)
            .or(env.filter(|v| !v.trim().is_empty()))
            .or_else(|| self.api_base.clone());

        match chosen {
            Some(base) => Ok(ApiEndpoint::new(base)?),
            None => Ok(ApiEndpoint::default()),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// ベースURLを検証して設定（保存は呼び出し側）
    pub fn set_api_base(&mut self, base: &str) -> Result<()> {
        let endpoint = ApiEndpoint::new(base)?;
        self.api_base = Some(endpoint.base_url().to_string());
        Ok(())
    }
}
