//! 詳細ビューの状態
//!
//! 識別子ごとに取得した車両レコードを保持し、1件ずつページ送りで表示する。
//! ページ送りは再取得しない（キャッシュ済みの配列内を移動するだけ）。

use crate::endpoint::ContractId;
use crate::error::FetchError;
use crate::generation::{FetchGeneration, FetchTicket};
use crate::pagination::PageCursor;
use crate::types::VehicleRecord;

/// 表示内容（優先順: 読込中 → エラー → データなし → 詳細カード）
#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus<'a> {
    Loading,
    Error(&'a str),
    Empty { identifier: Option<ContractId> },
    Record {
        record: &'a VehicleRecord,
        cursor: PageCursor,
    },
}

/// "No data found" / "No data found for contract ID: 42"
pub fn empty_message(identifier: Option<ContractId>) -> String {
    match identifier {
        Some(id) => format!("No data found for contract ID: {}", id),
        None => "No data found".to_string(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailView {
    records: Vec<VehicleRecord>,
    loading: bool,
    error: Option<String>,
    cursor: PageCursor,
    identifier: Option<ContractId>,
    generation: FetchGeneration,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得開始
    ///
    /// ページを先頭に戻し、読込中にして、前回のエラーを消す。
    /// 返したチケットを `complete` に渡すこと。
    pub fn begin_fetch(&mut self, identifier: Option<ContractId>) -> FetchTicket {
        self.identifier = identifier;
        self.loading = true;
        self.error = None;
        self.cursor.reset(self.records.len());
        self.generation.issue()
    }

    /// 取得完了
    ///
    /// 最新でないチケットの応答は捨てて false を返す。
    /// 失敗時はレコードを空にし、固定のエラーメッセージを設定する。
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<VehicleRecord>, FetchError>) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::warn!(?ticket, "discarding stale vehicle response");
            return false;
        }

        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), identifier = ?self.identifier, "vehicle records loaded");
                self.records = records;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, identifier = ?self.identifier, "vehicle fetch failed");
                self.records.clear();
                self.error = Some(err.user_message().to_string());
            }
        }
        self.cursor.reset(self.records.len());
        self.loading = false;
        true
    }

    pub fn previous(&mut self) -> bool {
        self.cursor.previous()
    }

    pub fn next(&mut self) -> bool {
        self.cursor.next()
    }

    pub fn go_to(&mut self, page: usize) {
        self.cursor.go_to(page);
    }

    pub fn status(&self) -> DetailStatus<'_> {
        if self.loading {
            return DetailStatus::Loading;
        }
        if let Some(error) = &self.error {
            return DetailStatus::Error(error.as_str());
        }
        match self.records.get(self.cursor.page()) {
            Some(record) => DetailStatus::Record {
                record,
                cursor: self.cursor,
            },
            None => DetailStatus::Empty {
                identifier: self.identifier,
            },
        }
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn identifier(&self) -> Option<ContractId> {
        self.identifier
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
