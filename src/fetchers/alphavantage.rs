use crate::models::request::QuoteRequestParams;
use crate::errors::{Result, QuoteBarError};
use crate::fetchers::base::QuoteFetcher;
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use log::debug;

/// Alpha Vantage 盘中数据抓取器
pub struct AlphaVantageFetcher {
    client: Client,
    base_url: String,
}

impl AlphaVantageFetcher {
    /// 创建新的抓取器，每次请求都受 config.timeout 限制
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(QuoteBarError::RequestError)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl QuoteFetcher for AlphaVantageFetcher {
    fn provider_name(&self) -> &'static str {
        "alphavantage"
    }

    async fn fetch_intraday_csv(&self, params: &QuoteRequestParams) -> Result<String> {
        let response = self.client
            .get(&self.base_url)
            .query(&params.query_pairs())
            .send()
            .await?
            .error_for_status()?;

        debug!("{} responded {} for {}", self.provider_name(), response.status(), params.symbol);

        let text = response.text().await?;
        Ok(text)
    }
}
