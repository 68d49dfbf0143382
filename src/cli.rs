use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::errors::{Result, QuoteBarError};
use crate::util;
use clap::{App, Arg, ArgMatches};
use std::time::Duration;

/// 命令行解析结果
#[derive(Debug, Clone)]
pub struct Args {
    pub symbols: Vec<String>,
    pub config: Config,
}

pub fn build_app() -> App<'static> {
    App::new("quotebar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print intraday stock quotes as a single status bar line")
        .arg(
            Arg::with_name("symbols")
                .short('s')
                .long("symbols")
                .value_name("SYMBOLS")
                .help("Comma-separated ticker list, e.g. goog,tsla,amzn")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-key")
                .short('k')
                .long("api-key")
                .value_name("API_KEY")
                .help("Alpha Vantage API key")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("debug")
                .short('d')
                .long("debug")
                .help("Enable verbose diagnostic logging to stderr")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-request timeout in seconds")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Quote API endpoint")
                .takes_value(true)
                .default_value(DEFAULT_BASE_URL),
        )
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw.trim().parse::<u64>()
        .map_err(|e| QuoteBarError::ConfigError(format!("invalid timeout {:?}: {}", raw, e)))?;
    if secs == 0 {
        return Err(QuoteBarError::ConfigError("timeout must be greater than zero".to_string()));
    }
    Ok(Duration::from_secs(secs))
}

impl Args {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        // required 参数在 clap 层已校验
        let symbols_raw = matches.value_of("symbols").unwrap_or_default();
        let api_key = matches.value_of("api-key").unwrap_or_default();

        let timeout = match matches.value_of("timeout") {
            Some(raw) => parse_timeout(raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        let base_url = matches.value_of("base-url").unwrap_or(DEFAULT_BASE_URL);

        let config = Config::new(api_key)
            .with_debug_mode(matches.is_present("debug"))
            .with_timeout(timeout)
            .with_base_url(base_url);

        Ok(Self {
            symbols: util::parse_symbols(symbols_raw),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ErrorKind;

    #[test]
    fn parses_short_flags() {
        let matches = build_app()
            .try_get_matches_from(["quotebar", "-s", "goog,tsla", "-k", "demo", "-d"])
            .unwrap();
        let args = Args::from_matches(&matches).unwrap();

        assert_eq!(args.symbols, vec!["goog", "tsla"]);
        assert_eq!(args.config.api_key, "demo");
        assert!(args.config.debug_mode);
        assert_eq!(args.config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(args.config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn parses_long_flags() {
        let matches = build_app()
            .try_get_matches_from([
                "quotebar", "--symbols", "amzn", "--api-key", "k",
                "--timeout", "3", "--base-url", "http://localhost:8080/query",
            ])
            .unwrap();
        let args = Args::from_matches(&matches).unwrap();

        assert_eq!(args.symbols, vec!["amzn"]);
        assert!(!args.config.debug_mode);
        assert_eq!(args.config.timeout, Duration::from_secs(3));
        assert_eq!(args.config.base_url, "http://localhost:8080/query");
    }

    #[test]
    fn omitted_timeout_matches_config_default() {
        let matches = build_app()
            .try_get_matches_from(["quotebar", "-s", "a", "-k", "k"])
            .unwrap();
        let args = Args::from_matches(&matches).unwrap();

        assert_eq!(args.config.timeout, Config::new("k").timeout);
        assert_eq!(args.config.timeout.as_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = build_app()
            .try_get_matches_from(["quotebar", "-s", "goog"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn missing_symbols_is_rejected() {
        let err = build_app()
            .try_get_matches_from(["quotebar", "-k", "demo"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn help_is_reported_as_display_help() {
        let err = build_app()
            .try_get_matches_from(["quotebar", "--help"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn zero_or_garbage_timeout_is_a_config_error() {
        for bad in ["0", "soon"] {
            let matches = build_app()
                .try_get_matches_from(["quotebar", "-s", "a", "-k", "k", "-t", bad])
                .unwrap();
            let err = Args::from_matches(&matches).unwrap_err();
            assert!(matches!(err, QuoteBarError::ConfigError(_)));
        }
    }
}
