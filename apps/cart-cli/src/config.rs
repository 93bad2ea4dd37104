//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

/// Default cart file when no path is given.
pub const DEFAULT_SAMPLE: &str = "samples/cart.csv";

/// Environment-level CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Tracing filter directive (`CART_PARSER_LOG`)
    pub log_filter: Option<String>,

    /// Pretty-print JSON output (`CART_PARSER_PRETTY`)
    pub pretty: bool,

    /// Input used when no FILE argument is passed (`CART_PARSER_SAMPLE`)
    pub default_input: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let pretty = match lookup("CART_PARSER_PRETTY") {
            None => false,
            Some(value) => parse_bool(&value)
                .ok_or_else(|| ConfigError::InvalidValue("CART_PARSER_PRETTY".to_string()))?,
        };

        Ok(CliConfig {
            log_filter: lookup("CART_PARSER_LOG").filter(|value| !value.trim().is_empty()),
            pretty,
            default_input: lookup("CART_PARSER_SAMPLE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE)),
        })
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: None,
            pretty: false,
            default_input: PathBuf::from(DEFAULT_SAMPLE),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
