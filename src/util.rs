use chrono::NaiveDateTime;
use serde::Deserialize;
use crate::models::quote::QuoteResult;
use crate::errors::{Result, QuoteBarError};

pub const FRAGMENT_SEPARATOR: &str = ", ";
const CLOSE_FIELD_INDEX: usize = 4;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 拆分逗号分隔的代码列表，保留顺序和重复项。
///
/// Each entry is trimmed and entries that are empty after trimming are
/// dropped, so `goog,,tsla` and `goog, tsla,` both yield `[goog, tsla]`
/// and `""` yields no symbols at all.
pub fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Alpha Vantage 在 datatype=csv 时仍可能以 JSON 返回错误或限流提示
#[derive(Debug, Deserialize)]
struct UpstreamNotice {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

fn upstream_notice(body: &str) -> QuoteBarError {
    match serde_json::from_str::<UpstreamNotice>(body) {
        Ok(notice) => {
            let message = notice.error_message
                .or(notice.note)
                .or(notice.information)
                .unwrap_or_else(|| "unrecognised JSON body".to_string());
            QuoteBarError::UpstreamNotice(message)
        }
        Err(e) => QuoteBarError::JsonError(e),
    }
}

/// Extracts the close price and timestamp from the first data row of an
/// intraday CSV body (`timestamp,open,high,low,close,volume`).
pub fn parse_intraday_csv(body: &str) -> Result<(f64, Option<NaiveDateTime>)> {
    if body.trim_start().starts_with('{') {
        return Err(upstream_notice(body));
    }

    let row = body.lines().nth(1)
        .ok_or_else(|| QuoteBarError::MalformedResponse("no data row after header".to_string()))?;

    let fields: Vec<&str> = row.split(',').collect();
    if fields.len() <= CLOSE_FIELD_INDEX {
        return Err(QuoteBarError::MalformedResponse(format!(
            "expected at least {} fields, got {}", CLOSE_FIELD_INDEX + 1, fields.len()
        )));
    }

    let raw_close = fields[CLOSE_FIELD_INDEX].trim();
    let price = raw_close.parse::<f64>()?;
    if !price.is_finite() {
        return Err(QuoteBarError::InvalidPrice(raw_close.to_string()));
    }

    let timestamp = NaiveDateTime::parse_from_str(fields[0].trim(), TIMESTAMP_FORMAT).ok();
    Ok((price, timestamp))
}

pub fn format_fragment(result: &QuoteResult) -> String {
    match result.price() {
        Some(price) => format!("{}: ${:.2}", result.symbol(), price),
        None => format!("{}: N/A", result.symbol()),
    }
}

/// Joins fragments in order and strips stray separator characters from both ends.
pub fn assemble_line(fragments: &[String]) -> String {
    fragments
        .join(FRAGMENT_SEPARATOR)
        .trim_matches(|c| c == ',' || c == ' ')
        .to_string()
}
