//! Logging setup using `tracing-subscriber`.
//!
//! Logs go to stderr so stdout stays clean JSON.
//!
//! Filter precedence: `--log-level`, then `CART_PARSER_LOG`, then `RUST_LOG`,
//! then `warn`.

use std::io;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Picks the filter directive according to the precedence above.
pub fn filter_directive(
    flag: Option<&str>,
    configured: Option<&str>,
    rust_log: Option<&str>,
) -> String {
    flag.or(configured)
        .or(rust_log)
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Installs the global subscriber.
pub fn init_logging(directive: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;
    Ok(())
}
