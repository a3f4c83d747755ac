//! グリッドの絞り込み
//!
//! 入力欄の値（`FilterInputs`）を検証して `RowFilter` に変換し、
//! 取得済みの全行に対してメモリ上で適用する。検索ボタン押下時のみ実行する。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{FlattenedRow, RentalDate};

/// 絞り込み入力欄の生の値（空文字列は未指定）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterInputs {
    pub rental_id: String,
    pub customer_name: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
}

/// 絞り込み入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    RentalId,
    CustomerName,
    StartDate,
    EndDate,
}

impl FilterInputs {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::RentalId => &self.rental_id,
            FilterField::CustomerName => &self.customer_name,
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::RentalId => &mut self.rental_id,
            FilterField::CustomerName => &mut self.customer_name,
            FilterField::StartDate => &mut self.start_date,
            FilterField::EndDate => &mut self.end_date,
        };
        *slot = value.into();
    }

    /// 1欄だけ消す（絞り込み結果は変えない）
    pub fn clear_field(&mut self, field: FilterField) {
        self.set(field, String::new());
    }

    pub fn is_empty(&self) -> bool {
        [&self.rental_id, &self.customer_name, &self.start_date, &self.end_date]
            .iter()
            .all(|v| v.trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// 検証済みの絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    rental_id: Option<String>,
    /// 小文字化済み
    customer_name: Option<String>,
    start: Option<RentalDate>,
    end: Option<RentalDate>,
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_filter_date(value: &str) -> Result<Option<RentalDate>> {
    match non_empty(value) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|date| Some(RentalDate::from_date(date)))
            .map_err(|_| Error::InvalidFilterDate(raw.to_string())),
        None => Ok(None),
    }
}

impl RowFilter {
    /// 入力欄の値から条件を作成
    ///
    /// # Errors
    /// 日付欄が `YYYY-MM-DD` でない場合は `Error::InvalidFilterDate`
    pub fn from_inputs(inputs: &FilterInputs) -> Result<Self> {
        Ok(Self {
            rental_id: non_empty(&inputs.rental_id).map(str::to_string),
            customer_name: non_empty(&inputs.customer_name).map(str::to_lowercase),
            start: parse_filter_date(&inputs.start_date)?,
            end: parse_filter_date(&inputs.end_date)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// 1行が条件を満たすか
    ///
    /// 日付は排他的に3段階で判定する:
    /// 開始・終了の両方指定なら期間内包（開始 >= 指定開始 かつ 終了 <= 指定終了）、
    /// 片方だけならその片側のみ。比較対象の日付がない行は除外。
    pub fn matches(&self, row: &FlattenedRow) -> bool {
        if let Some(needle) = &self.rental_id {
            match row.rental_id {
                Some(id) if id.to_string().contains(needle.as_str()) => {}
                _ => return false,
            }
        }

        if let Some(needle) = &self.customer_name {
            if !row.customer_name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        match (self.start, self.end) {
            (Some(from), Some(to)) => matches!(
                (row.start_date, row.end_date),
                (Some(start), Some(end)) if start >= from && end <= to
            ),
            (Some(from), None) => row.start_date.is_some_and(|start| start >= from),
            (None, Some(to)) => row.end_date.is_some_and(|end| end <= to),
            (None, None) => true,
        }
    }

    /// 全行に適用（順序は維持）
    pub fn apply(&self, rows: &[FlattenedRow]) -> Vec<FlattenedRow> {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}
