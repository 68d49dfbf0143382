use crate::config::Config;

pub const FUNCTION_INTRADAY: &str = "TIME_SERIES_INTRADAY";
pub const OUTPUT_SIZE_COMPACT: &str = "compact";
pub const INTERVAL_15MIN: &str = "15min";
pub const DATATYPE_CSV: &str = "csv";

/// Query parameters for one TIME_SERIES_INTRADAY request.
///
/// Built fresh for every symbol and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequestParams {
    pub function: &'static str,
    pub api_key: String,
    pub symbol: String,
    pub output_size: &'static str,
    pub interval: &'static str,
    pub datatype: &'static str,
}

impl QuoteRequestParams {
    pub fn new(symbol: &str, config: &Config) -> Self {
        Self {
            function: FUNCTION_INTRADAY,
            api_key: config.api_key.clone(),
            symbol: symbol.to_string(),
            output_size: OUTPUT_SIZE_COMPACT,
            interval: INTERVAL_15MIN,
            datatype: DATATYPE_CSV,
        }
    }

    /// Query pairs in the order they are sent.
    pub fn query_pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("function", self.function),
            ("apikey", &self.api_key),
            ("symbol", &self.symbol),
            ("outputsize", self.output_size),
            ("interval", self.interval),
            ("datatype", self.datatype),
        ]
    }
}
