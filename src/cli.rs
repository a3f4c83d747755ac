use clap::{Parser, Subcommand};
use rental_viewer_common::{FilterInputs, PageSize};

#[derive(Parser)]
#[command(name = "rental-viewer")]
#[command(about = "車両レンタル契約ビューア", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（例: http://localhost:5277）
    #[arg(long, global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 車両と契約の詳細を1件ずつ表示
    Detail {
        /// 契約ID（数値でなければ一覧を取得）
        id: Option<String>,

        /// 表示ページ（1始まり、範囲外は端に丸める）
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 前へ/次へを対話的に選ぶ
        #[arg(short, long)]
        interactive: bool,
    },

    /// 全車両を表形式で表示（絞り込み可）
    Grid {
        /// レンタルIDの部分一致
        #[arg(long)]
        rental_id: Option<String>,

        /// 顧客名の部分一致（大文字小文字を区別しない）
        #[arg(long)]
        customer: Option<String>,

        /// 開始日以降 (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// 終了日以前 (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// ページあたりの行数 (5/10/25、省略時は設定値)
        #[arg(long)]
        page_size: Option<PageSize>,

        /// 表示ページ（1始まり）
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 絞り込み結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_api_base: Option<String>,

        /// 要求タイムアウト秒を設定（0で無制限）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 既定のページサイズを設定 (5/10/25)
        #[arg(long)]
        set_page_size: Option<PageSize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// グリッド引数を絞り込み入力欄の値に変換
pub fn filter_inputs(
    rental_id: Option<String>,
    customer: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> FilterInputs {
    FilterInputs {
        rental_id: rental_id.unwrap_or_default(),
        customer_name: customer.unwrap_or_default(),
        start_date: start.unwrap_or_default(),
        end_date: end.unwrap_or_default(),
    }
}
