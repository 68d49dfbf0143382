use crate::models::request::QuoteRequestParams;
use crate::errors::Result;
use async_trait::async_trait;

/// Base trait for quote data fetchers
#[async_trait]
pub trait QuoteFetcher {
    /// Name of the upstream provider, used in log lines
    fn provider_name(&self) -> &'static str;

    /// Issue a single request for the given parameters and return the raw body.
    /// Transport errors and non-success statuses are returned as errors.
    async fn fetch_intraday_csv(&self, params: &QuoteRequestParams) -> Result<String>;
}
