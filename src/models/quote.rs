use chrono::NaiveDateTime;

/// 单个代码的盘中报价
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub price: f64, // 收盘价，USD，按上游原样
    pub timestamp: Option<NaiveDateTime>,
}

/// Outcome of one symbol's fetch. Failures keep the symbol so the output
/// still carries a fragment for it.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteResult {
    Available(Quote),
    Unavailable { symbol: String },
}

impl QuoteResult {
    pub fn unavailable(symbol: &str) -> Self {
        QuoteResult::Unavailable {
            symbol: symbol.to_string(),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            QuoteResult::Available(quote) => &quote.symbol,
            QuoteResult::Unavailable { symbol } => symbol,
        }
    }

    pub fn price(&self) -> Option<f64> {
        match self {
            QuoteResult::Available(quote) => Some(quote.price),
            QuoteResult::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, QuoteResult::Available(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_both_variants() {
        let ok = QuoteResult::Available(Quote {
            symbol: "goog".to_string(),
            price: 150.5,
            timestamp: None,
        });
        assert_eq!(ok.symbol(), "goog");
        assert_eq!(ok.price(), Some(150.5));
        assert!(ok.is_available());

        let failed = QuoteResult::unavailable("xyz");
        assert_eq!(failed.symbol(), "xyz");
        assert_eq!(failed.price(), None);
        assert!(!failed.is_available());
    }
}
