use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rental_viewer::{browse, cli, client, config, error, render};
use rental_viewer_common::{parse_identifier, ContractId, DetailView, FetchError, GridView, VehicleRecord};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};
use client::VehicleClient;
use config::Config;
use error::Result;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

/// 取得中はスピナーを表示
async fn fetch_with_spinner(
    client: &VehicleClient,
    identifier: Option<ContractId>,
) -> std::result::Result<Vec<VehicleRecord>, FetchError> {
    tracing::debug!(base = client.endpoint().base_url(), "using endpoint");
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.fetch_vehicles(identifier).await;
    spinner.finish_and_clear();
    result
}

async fn run(cli: Cli) -> Result<()> {
    // configサブコマンドだけは壊れた設定ファイルでも続行し、上書き保存で直せるようにする
    let mut config = match cli.command {
        Commands::Config { .. } => Config::load_or_default_from(&Config::config_path()?),
        _ => Config::load()?,
    };

    match cli.command {
        Commands::Detail { id, page, interactive } => {
            let identifier = id.as_deref().and_then(parse_identifier);
            let client = VehicleClient::new(config.endpoint(cli.api_base.as_deref())?, config.timeout())?;

            let mut view = DetailView::new();
            let ticket = view.begin_fetch(identifier);
            let result = fetch_with_spinner(&client, identifier).await;
            let failure = result.as_ref().err().cloned();
            view.complete(ticket, result);
            if let Some(err) = failure {
                return Err(err.into());
            }

            if interactive {
                browse::run_interactive(&mut view)?;
            } else {
                view.go_to(page.saturating_sub(1));
                println!("{}", render::render_detail(&view.status()));
            }
        }

        Commands::Grid { rental_id, customer, start, end, page_size, page, json } => {
            let client = VehicleClient::new(config.endpoint(cli.api_base.as_deref())?, config.timeout())?;

            let mut grid = GridView::new();
            grid.set_page_size(page_size.unwrap_or(config.page_size));
            let ticket = grid.begin_load();
            let result = fetch_with_spinner(&client, None).await;
            let failure = result.as_ref().err().cloned();
            grid.complete_load(ticket, result);
            if let Some(err) = failure {
                return Err(err.into());
            }

            grid.set_inputs(cli::filter_inputs(rental_id, customer, start, end));
            let matched = grid.search()?;
            grid.go_to_page(page.saturating_sub(1));

            if json {
                println!("{}", serde_json::to_string_pretty(grid.filtered_rows())?);
            } else {
                println!("{}", render::render_grid(&grid));
                if !grid.inputs().is_empty() {
                    println!("{} / {} 台が条件に一致", matched, grid.rows().len());
                }
            }
        }

        Commands::Config { set_api_base, set_timeout, set_page_size, show } => {
            let changed = set_api_base.is_some() || set_timeout.is_some() || set_page_size.is_some();

            if let Some(base) = set_api_base {
                config.set_api_base(&base)?;
                println!("✔ 接続先を設定しました: {}", base);
            }
            if let Some(secs) = set_timeout {
                config.timeout_seconds = (secs > 0).then_some(secs);
                println!("✔ タイムアウトを設定しました");
            }
            if let Some(size) = set_page_size {
                config.page_size = size;
                println!("✔ ページサイズを設定しました: {}", size);
            }
            if changed {
                config.save()?;
            }

            if show || !changed {
                let endpoint = config.endpoint(cli.api_base.as_deref())?;
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  接続先: {}", endpoint.base_url());
                println!(
                    "  タイムアウト: {}",
                    config
                        .timeout()
                        .map(|t| format!("{}秒", t.as_secs()))
                        .unwrap_or_else(|| "なし".to_string())
                );
                println!("  ページサイズ: {}", config.page_size);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("エラー: {}", err);
        std::process::exit(1);
    }
}
