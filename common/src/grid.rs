//! グリッドビューの状態
//!
//! マウント時に一覧を1回だけ取得し、1車両1行に展開して保持する。
//! 絞り込みは検索操作時のみ、取得済みの全行に対してメモリ上で行う。

use crate::error::{FetchError, Result};
use crate::filter::{FilterField, FilterInputs, RowFilter};
use crate::generation::{FetchGeneration, FetchTicket};
use crate::pagination::{GridPager, PageSize};
use crate::payload::flatten_rows;
use crate::types::{FlattenedRow, VehicleRecord};

/// グリッド列（表示順）
pub const GRID_COLUMNS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("licensePlate", "License Plate"),
    ("brand", "Brand"),
    ("model", "Model"),
    ("rentalId", "Rental ID"),
    ("customerName", "Customer Name"),
    ("startDate", "Start Date"),
    ("endDate", "End Date"),
];

#[derive(Debug, Clone)]
pub struct GridView {
    rows: Vec<FlattenedRow>,
    filtered_rows: Vec<FlattenedRow>,
    loading: bool,
    error: Option<String>,
    inputs: FilterInputs,
    pager: GridPager,
    generation: FetchGeneration,
}

impl Default for GridView {
    fn default() -> Self {
        Self::new()
    }
}

impl GridView {
    /// 初期状態は読込中（マウント直後に取得が始まる）
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            filtered_rows: Vec::new(),
            loading: true,
            error: None,
            inputs: FilterInputs::default(),
            pager: GridPager::default(),
            generation: FetchGeneration::default(),
        }
    }

    pub fn begin_load(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        self.generation.issue()
    }

    /// 取得完了
    ///
    /// 成功時は全行と表示行を同じ内容で置き換える。失敗時は両方空にする。
    /// 最新でないチケットの応答は捨てて false を返す。
    pub fn complete_load(&mut self, ticket: FetchTicket, result: std::result::Result<Vec<VehicleRecord>, FetchError>) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::warn!(?ticket, "discarding stale grid response");
            return false;
        }

        match result {
            Ok(records) => {
                self.rows = flatten_rows(&records);
                tracing::debug!(rows = self.rows.len(), "grid rows loaded");
            }
            Err(err) => {
                tracing::warn!(error = %err, "grid fetch failed");
                self.rows.clear();
                self.error = Some(err.user_message().to_string());
            }
        }
        self.filtered_rows = self.rows.clone();
        self.pager.first();
        self.loading = false;
        true
    }

    pub fn inputs(&self) -> &FilterInputs {
        &self.inputs
    }

    /// 入力欄をまとめて置き換える（検索はしない）
    pub fn set_inputs(&mut self, inputs: FilterInputs) {
        self.inputs = inputs;
    }

    pub fn set_input(&mut self, field: FilterField, value: impl Into<String>) {
        self.inputs.set(field, value);
    }

    /// 1欄だけ消す（表示行は検索し直すまで変わらない）
    pub fn clear_input(&mut self, field: FilterField) {
        self.inputs.clear_field(field);
    }

    /// 現在の入力で絞り込み、表示行を置き換える
    ///
    /// # Returns
    /// 絞り込み後の件数
    ///
    /// # Errors
    /// 日付欄が不正な場合は `Error::InvalidFilterDate`（表示行は変えない）
    pub fn search(&mut self) -> Result<usize> {
        let filter = RowFilter::from_inputs(&self.inputs)?;
        self.filtered_rows = filter.apply(&self.rows);
        self.pager.first();
        tracing::debug!(matched = self.filtered_rows.len(), total = self.rows.len(), "grid filter applied");
        Ok(self.filtered_rows.len())
    }

    /// 入力をすべて消し、全行表示に戻す
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.filtered_rows = self.rows.clone();
        self.pager.first();
    }

    pub fn rows(&self) -> &[FlattenedRow] {
        &self.rows
    }

    pub fn filtered_rows(&self) -> &[FlattenedRow] {
        &self.filtered_rows
    }

    /// 現在ページに表示する行
    pub fn visible_rows(&self) -> &[FlattenedRow] {
        self.pager.slice(&self.filtered_rows)
    }

    pub fn pager(&self) -> GridPager {
        self.pager
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pager.set_page_size(page_size);
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next(self.filtered_rows.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, self.filtered_rows.len());
    }

    /// "1-10 of 37"
    pub fn range_label(&self) -> String {
        self.pager.range_label(self.filtered_rows.len())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
