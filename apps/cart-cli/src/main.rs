//! # cart-parse
//!
//! Command-line wrapper around `cart-parser`.
//!
//! ## Exit Codes
//! ```text
//! 0  success (parse: cart printed, validate: no diagnostics)
//! 1  the cart has validation diagnostics
//! 2  the cart file could not be read, or the CLI itself failed
//! ```

mod cli;
mod config;
mod logging;

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use cart_parser::{CartParser, ErrorKind, ParseError};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, error};

use crate::cli::{Cli, Command};
use crate::config::CliConfig;

const EXIT_SUCCESS: u8 = 0;
const EXIT_INVALID: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let directive = logging::filter_directive(
        cli.log_level.map(|level| level.as_directive()),
        config.log_filter.as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
    );
    if let Err(err) = logging::init_logging(&directive) {
        eprintln!("error: failed to initialize logging: {err}");
        return ExitCode::from(EXIT_FAILURE);
    }
    debug!(?config, "Configuration loaded");

    match run(&cli, &config) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!(error = %err, "cart-parse failed");
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Runs one subcommand and returns its process exit code.
fn run(cli: &Cli, config: &CliConfig) -> anyhow::Result<u8> {
    let pretty = cli.pretty || config.pretty;
    let parser = CartParser::new();

    match &cli.command {
        Command::Parse(args) => {
            let path = input_path(args.file.as_deref(), config);
            match parser.parse(&path) {
                Ok(cart) => {
                    print_json(&cart, pretty)?;
                    Ok(EXIT_SUCCESS)
                }
                Err(err) => Ok(report_failure(&err)),
            }
        }
        Command::Validate(args) => {
            let path = input_path(args.file.as_deref(), config);
            match parser.validate_file(&path) {
                Ok(diagnostics) => {
                    print_json(&diagnostics, pretty)?;
                    if diagnostics.is_empty() {
                        Ok(EXIT_SUCCESS)
                    } else {
                        Ok(EXIT_INVALID)
                    }
                }
                Err(err) => Ok(report_failure(&err)),
            }
        }
    }
}

fn input_path(file: Option<&Path>, config: &CliConfig) -> PathBuf {
    file.map(Path::to_path_buf)
        .unwrap_or_else(|| config.default_input.clone())
}

/// Prints a parse failure to stderr and picks the exit code.
fn report_failure(err: &ParseError) -> u8 {
    eprintln!("error: {err}");
    for diagnostic in err.diagnostics() {
        eprintln!("  {diagnostic}");
    }
    exit_code(err.kind())
}

fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::ValidationFailed => EXIT_INVALID,
        ErrorKind::IoFailure | ErrorKind::Record => EXIT_FAILURE,
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize output")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write output")?;
    Ok(())
}
