//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "cart-parse",
    version,
    about = "Validate and parse shopping cart CSV files",
    long_about = "Validate and parse shopping cart CSV files.\n\n\
                  Expects a `Product name,Price,Quantity` header followed by one item per line.\n\
                  Every validation problem in the file is reported, not just the first."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Explicit log level (overrides CART_PARSER_LOG and RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a cart and print its items and total as JSON.
    Parse(InputArgs),

    /// Validate a cart and print its diagnostics as JSON.
    Validate(InputArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Cart CSV file (default: CART_PARSER_SAMPLE or samples/cart.csv).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevelArg::Error => "error",
            LogLevelArg::Warn => "warn",
            LogLevelArg::Info => "info",
            LogLevelArg::Debug => "debug",
            LogLevelArg::Trace => "trace",
        }
    }
}
