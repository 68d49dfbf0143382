// 公开导出的模块，供外部使用
pub mod models;
pub mod fetchers;
pub mod services;
pub mod errors;
pub mod config;
pub mod cli;

#[doc(hidden)]
pub mod util;

// 重新导出常用类型，方便使用
pub use models::quote::{Quote, QuoteResult};
pub use models::request::QuoteRequestParams;
pub use fetchers::base::QuoteFetcher;
pub use fetchers::alphavantage::AlphaVantageFetcher;
pub use services::quote_service::QuoteService;
pub use config::Config;
pub use errors::{Result, QuoteBarError};
