use thiserror::Error;
use std::num::ParseFloatError;

#[derive(Error, Debug)]
pub enum QuoteBarError {
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Upstream notice: {0}")]
    UpstreamNotice(String),

    #[error("Parse float error: {0}")]
    ParseFloatError(#[from] ParseFloatError),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, QuoteBarError>;

