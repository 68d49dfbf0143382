use std::time::Duration;

/// Alpha Vantage 查询端点
pub const DEFAULT_BASE_URL: &str = "http://www.alphavantage.co/query";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub debug_mode: bool,
    pub timeout: Duration,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            debug_mode: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }
}
