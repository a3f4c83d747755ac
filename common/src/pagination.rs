//! ページ送り
//!
//! - PageCursor: 詳細カードの1件ずつのページ送り
//! - GridPager: グリッドのページサイズ単位のページ送り

use serde::{Deserialize, Serialize};
use std::fmt;

/// 詳細カード用カーソル（0始まり）
///
/// `page` は常に `[0, len-1]` に収まる（`len == 0` のときは0）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    len: usize,
}

impl PageCursor {
    pub fn new(len: usize) -> Self {
        Self { page: 0, len }
    }

    /// 件数を入れ替えて先頭へ戻す
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.len
    }

    /// 前へ（先頭では何もしない）。移動したら true
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// 次へ（末尾では何もしない）。移動したら true
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// 指定ページへ移動（範囲外は端に丸める）
    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.len.saturating_sub(1));
    }

    /// "Page 1 of 3"
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.len)
    }
}

/// グリッドのページサイズ（5/10/25）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn rows(&self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            25 => Ok(PageSize::TwentyFive),
            _ => Err(format!("Unsupported page size: {}. Use 5, 10, or 25", value)),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.rows()
    }
}

impl std::str::FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("Unsupported page size: {}. Use 5, 10, or 25", s))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

/// グリッド用ページ送り（0始まり）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridPager {
    page_size: PageSize,
    page: usize,
}

impl GridPager {
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size, page: 0 }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// ページサイズ変更（先頭ページへ戻る）
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn first(&mut self) {
        self.page = 0;
    }

    /// 総ページ数（0件でも1）
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.rows()).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self, total: usize) -> bool {
        if self.has_next(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// 指定ページへ移動（範囲外は最終ページに丸める）
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total) - 1);
    }

    /// 現在ページの行
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let size = self.page_size.rows();
        let start = (self.page * size).min(rows.len());
        let end = (start + size).min(rows.len());
        &rows[start..end]
    }

    /// "11-20 of 37"（0件は "0-0 of 0"）
    pub fn range_label(&self, total: usize) -> String {
        let visible = self.slice_bounds(total);
        match visible {
            Some((start, end)) => format!("{}-{} of {}", start + 1, end, total),
            None => format!("0-0 of {}", total),
        }
    }

    fn slice_bounds(&self, total: usize) -> Option<(usize, usize)> {
        let size = self.page_size.rows();
        let start = self.page * size;
        (start < total).then(|| (start, (start + size).min(total)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_at_zero() {
        let cursor = PageCursor::new(3);
        assert_eq!(cursor.page(), 0);
        assert!(!cursor.has_previous());
        assert!(cursor.has_next());
        assert_eq!(cursor.indicator(), "Page 1 of 3");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut cursor = PageCursor::new(3);
        assert!(!cursor.previous());
        assert_eq!(cursor.page(), 0);

        assert!(cursor.next());
        assert!(cursor.next());
        assert!(!cursor.next());
        assert_eq!(cursor.page(), 2);
        assert!(!cursor.has_next());
        assert_eq!(cursor.indicator(), "Page 3 of 3");

        assert!(cursor.previous());
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_cursor_random_walk_never_leaves_range() {
        for len in 1..6usize {
            let mut cursor = PageCursor::new(len);
            for step in 0..40usize {
                if (step * 7 + len) % 3 == 0 {
                    cursor.previous();
                } else {
                    cursor.next();
                }
                assert!(cursor.page() < len);
            }
        }
    }

    #[test]
    fn test_cursor_single_record_disables_both() {
        let cursor = PageCursor::new(1);
        assert!(!cursor.has_previous());
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_cursor_go_to_clamps() {
        let mut cursor = PageCursor::new(4);
        cursor.go_to(10);
        assert_eq!(cursor.page(), 3);

        let mut empty = PageCursor::new(0);
        empty.go_to(5);
        assert_eq!(empty.page(), 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn test_cursor_reset() {
        let mut cursor = PageCursor::new(5);
        cursor.next();
        cursor.reset(2);
        assert_eq!(cursor, PageCursor::new(2));
    }

    #[test]
    fn test_page_size_parse() {
        assert_eq!("5".parse::<PageSize>(), Ok(PageSize::Five));
        assert_eq!("25".parse::<PageSize>(), Ok(PageSize::TwentyFive));
        assert!("7".parse::<PageSize>().is_err());
        assert!("ten".parse::<PageSize>().is_err());
        assert_eq!(PageSize::default(), PageSize::Ten);
    }

    #[test]
    fn test_pager_slices_pages() {
        let rows: Vec<u32> = (0..23).collect();
        let mut pager = GridPager::new(PageSize::Ten);
        assert_eq!(pager.page_count(rows.len()), 3);
        assert_eq!(pager.slice(&rows), &rows[0..10]);
        assert_eq!(pager.range_label(rows.len()), "1-10 of 23");

        assert!(pager.next(rows.len()));
        assert!(pager.next(rows.len()));
        assert!(!pager.next(rows.len()));
        assert_eq!(pager.slice(&rows), &rows[20..23]);
        assert_eq!(pager.range_label(rows.len()), "21-23 of 23");
    }

    #[test]
    fn test_pager_page_size_change_returns_to_first_page() {
        let rows: Vec<u32> = (0..30).collect();
        let mut pager = GridPager::default();
        pager.next(rows.len());
        pager.set_page_size(PageSize::TwentyFive);
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.slice(&rows).len(), 25);
    }

    #[test]
    fn test_pager_empty_rows() {
        let rows: Vec<u32> = Vec::new();
        let mut pager = GridPager::default();
        assert_eq!(pager.page_count(0), 1);
        assert!(pager.slice(&rows).is_empty());
        assert!(!pager.next(0));
        assert_eq!(pager.range_label(0), "0-0 of 0");
    }

    #[test]
    fn test_pager_slice_after_rows_shrink() {
        let rows: Vec<u32> = (0..30).collect();
        let mut pager = GridPager::new(PageSize::Five);
        pager.go_to(5, rows.len());
        assert_eq!(pager.page(), 5);
        let fewer = &rows[..3];
        assert!(pager.slice(fewer).is_empty());
        pager.go_to(pager.page(), fewer.len());
        assert_eq!(pager.page(), 0);
    }
}
