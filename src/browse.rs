//! 対話式の詳細ページ送り

use crate::error::{RentalViewerError, Result};
use crate::render::render_detail;
use dialoguer::Select;
use rental_viewer_common::{DetailView, PageCursor};

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// 次のレコード
    Next,
    /// 前のレコード
    Previous,
    /// 終了
    Quit,
}

impl Navigation {
    pub fn label(&self) -> &'static str {
        match self {
            Navigation::Next => "Next >",
            Navigation::Previous => "< Previous",
            Navigation::Quit => "Quit",
        }
    }
}

/// 現在位置で選べる操作（端では片方が消える）
pub fn available_moves(cursor: PageCursor) -> Vec<Navigation> {
    let mut moves = Vec::with_capacity(3);
    if cursor.has_next() {
        moves.push(Navigation::Next);
    }
    if cursor.has_previous() {
        moves.push(Navigation::Previous);
    }
    moves.push(Navigation::Quit);
    moves
}

/// 操作を適用。終了なら false
pub fn apply_move(view: &mut DetailView, navigation: Navigation) -> bool {
    match navigation {
        Navigation::Next => {
            view.next();
            true
        }
        Navigation::Previous => {
            view.previous();
            true
        }
        Navigation::Quit => false,
    }
}

/// 取得済みレコードを1件ずつ表示し、終了を選ぶまで繰り返す
pub fn run_interactive(view: &mut DetailView) -> Result<()> {
    loop {
        println!("\n{}\n", render_detail(&view.status()));

        let cursor = view.cursor();
        if cursor.len() <= 1 {
            return Ok(());
        }

        let moves = available_moves(cursor);
        let labels: Vec<&str> = moves.iter().map(Navigation::label).collect();
        let selected = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| RentalViewerError::Prompt(e.to_string()))?;

        if !apply_move(view, moves[selected]) {
            return Ok(());
        }
    }
}
