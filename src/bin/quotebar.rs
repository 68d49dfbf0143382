use quotebar::cli::{self, Args};
use quotebar::fetchers::alphavantage::AlphaVantageFetcher;
use quotebar::services::quote_service::QuoteService;

use anyhow::Context;
use clap::ErrorKind;
use log::{debug, LevelFilter};
use std::sync::Arc;

fn init_logger(debug_mode: bool) {
    // 日志写到 stderr，stdout 只留给状态栏那一行
    let level = if debug_mode { LevelFilter::Debug } else { LevelFilter::Error };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut app = cli::build_app();
    let matches = app.clone().get_matches();

    let args = match Args::from_matches(&matches) {
        Ok(args) => args,
        Err(e) => app.error(ErrorKind::ValueValidation, e).exit(),
    };

    init_logger(args.config.debug_mode);
    debug!("Symbols: {:?}, timeout: {:?}", args.symbols, args.config.timeout);

    let fetcher = AlphaVantageFetcher::new(&args.config)
        .context("failed to build HTTP client")?;
    let service = QuoteService::new(args.config, Arc::new(fetcher));

    let line = service.render_line(&args.symbols).await;
    println!("{}", line);

    Ok(())
}
