//! APIエンドポイント設定と契約IDの解釈

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// ベースURLが設定されていないときの接続先
pub const DEFAULT_API_BASE: &str = "http://localhost:5277";

const VEHICLES_PATH: &str = "/api/vehicles";

/// 契約ID（`/api/vehicles/{id}` のスコープ指定に使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(pub i64);

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 入力欄の文字列を契約IDとして解釈
///
/// 先頭の空白を無視し、符号付きの先頭数字列だけを読む（`"42abc"` は 42）。
/// 数字がない・0・桁あふれの場合は「ID指定なし」として `None` を返す。
///
/// # Examples
/// ```
/// use rental_viewer_common::{parse_identifier, ContractId};
///
/// assert_eq!(parse_identifier("42"), Some(ContractId(42)));
/// assert_eq!(parse_identifier("abc"), None);
/// ```
pub fn parse_identifier(input: &str) -> Option<ContractId> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    let value = if negative { -value } else { value };
    (value != 0).then_some(ContractId(value))
}

/// 車両APIの接続先
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    base_url: String,
}

impl ApiEndpoint {
    /// ベースURLから作成（末尾の `/` は取り除く）
    ///
    /// # Errors
    /// `http://` / `https://` で始まらない場合は `Error::InvalidEndpoint`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(Error::InvalidEndpoint(base_url));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 取得先URL
    ///
    /// IDなしは一覧（`/api/vehicles`）、IDありはスコープ指定（`/api/vehicles/{id}`）
    pub fn vehicles_url(&self, identifier: Option<ContractId>) -> String {
        match identifier {
            Some(id) => format!("{}{}/{}", self.base_url, VEHICLES_PATH, id),
            None => format!("{}{}", self.base_url, VEHICLES_PATH),
        }
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}
