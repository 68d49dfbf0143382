use crate::models::quote::{Quote, QuoteResult};
use crate::models::request::QuoteRequestParams;
use crate::fetchers::base::QuoteFetcher;
use crate::errors::Result;
use crate::config::Config;
use crate::util;
use log::{debug, info, warn};
use std::sync::Arc;

/// 报价服务，负责逐个代码获取、解析并拼接输出
pub struct QuoteService {
    config: Config,
    fetcher: Arc<dyn QuoteFetcher + Send + Sync>,
}

impl QuoteService {
    pub fn new(config: Config, fetcher: Arc<dyn QuoteFetcher + Send + Sync>) -> Self {
        Self { config, fetcher }
    }

    async fn try_fetch(&self, symbol: &str) -> Result<Quote> {
        let params = QuoteRequestParams::new(symbol, &self.config);

        if self.config.debug_mode {
            debug!("Requesting {} {} quote for {} from {}",
                   params.interval, params.function, symbol, self.fetcher.provider_name());
        }

        let body = self.fetcher.fetch_intraday_csv(&params).await?;
        let (price, timestamp) = util::parse_intraday_csv(&body)?;

        Ok(Quote {
            symbol: symbol.to_string(),
            price,
            timestamp,
        })
    }

    /// 获取单个代码的报价，任何失败都只影响该代码
    pub async fn fetch_quote(&self, symbol: &str) -> QuoteResult {
        match self.try_fetch(symbol).await {
            Ok(quote) => {
                if self.config.debug_mode {
                    match quote.timestamp {
                        Some(ts) => debug!("{} close {} as of {}", symbol, quote.price, ts),
                        None => debug!("{} close {}", symbol, quote.price),
                    }
                }
                QuoteResult::Available(quote)
            }
            Err(e) => {
                warn!("Failed to fetch quote for {}: {}", symbol, e);
                QuoteResult::unavailable(symbol)
            }
        }
    }

    /// 按输入顺序依次获取，上一个请求完成后才发起下一个
    pub async fn fetch_all(&self, symbols: &[String]) -> Vec<QuoteResult> {
        let mut results = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            results.push(self.fetch_quote(symbol).await);
        }
        results
    }

    /// Fetches every symbol and renders the status bar line.
    pub async fn render_line(&self, symbols: &[String]) -> String {
        let results = self.fetch_all(symbols).await;

        let available = results.iter().filter(|r| r.is_available()).count();
        info!("Fetched {} of {} quotes", available, results.len());

        let fragments: Vec<String> = results.iter().map(util::format_fragment).collect();
        util::assemble_line(&fragments)
    }
}
