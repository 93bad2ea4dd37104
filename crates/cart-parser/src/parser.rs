//! # Cart Parser Facade
//!
//! Runs the full pipeline for one document.
//!
//! ## Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Unstarted ──► Reading ──► Validating ──► Parsing ──► Done              │
//! │                   │             │             │                         │
//! │                   ▼             ▼             ▼                         │
//! │                Failed        Failed        Failed                       │
//! │             (IoFailure) (ValidationFailed) (Record)                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call is independent: nothing is cached between calls and the
//! returned [`Cart`] is built fresh each time.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use cart_core::{
    calc_total, validate, Cart, Diagnostic, Document, IdGenerator, RecordParser,
};
use tracing::{debug, error, info, warn};

use crate::error::{ParseError, ParserResult};
use crate::reader::{FileReader, FsReader};

/// Pipeline stage, used as the `stage` field of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Reading,
    Validating,
    Parsing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Reading => "reading",
            Stage::Validating => "validating",
            Stage::Parsing => "parsing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Reads, validates and parses cart documents.
///
/// ## Example
/// ```rust,no_run
/// use cart_parser::CartParser;
///
/// let cart = CartParser::new().parse("samples/cart.csv")?;
/// println!("{} items, total {}", cart.items.len(), cart.total);
/// # Ok::<(), cart_parser::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CartParser<R = FsReader> {
    reader: R,
    records: RecordParser,
}

impl CartParser<FsReader> {
    /// Parser reading from disk and assigning UUID v4 identifiers.
    pub fn new() -> Self {
        CartParser {
            reader: FsReader,
            records: RecordParser::new(),
        }
    }
}

impl Default for CartParser<FsReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FileReader> CartParser<R> {
    /// Parser with an injected file reader.
    pub fn with_reader(reader: R) -> Self {
        CartParser {
            reader,
            records: RecordParser::new(),
        }
    }

    /// Replaces the identifier source used for new items.
    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.records = RecordParser::with_ids(ids);
        self
    }

    /// Parses the cart file at `path`.
    ///
    /// ## Errors
    /// - [`ParseError::IoFailure`] when the file cannot be read
    /// - [`ParseError::ValidationFailed`] with every diagnostic when the
    ///   document is invalid; no partial cart is returned
    pub fn parse(&self, path: impl AsRef<Path>) -> ParserResult<Cart> {
        let path = path.as_ref();
        let contents = self.read(path)?;
        self.parse_str(&contents)
    }

    /// Runs validation and parsing on text that is already in memory.
    pub fn parse_str(&self, contents: &str) -> ParserResult<Cart> {
        debug!(stage = %Stage::Validating, bytes = contents.len(), "Validating cart");
        let diagnostics = validate(contents);
        if !diagnostics.is_empty() {
            warn!(
                stage = %Stage::Validating,
                diagnostics = diagnostics.len(),
                "Cart failed validation"
            );
            for diagnostic in &diagnostics {
                debug!(row = diagnostic.row, column = diagnostic.column, "{}", diagnostic.message);
            }
            return Err(ParseError::ValidationFailed { diagnostics });
        }

        debug!(stage = %Stage::Parsing, "Parsing cart items");
        let items = Document::read(contents)
            .rows()
            .iter()
            .map(|row| self.records.parse_row(row))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                error!(stage = %Stage::Parsing, error = %err, "Validated line failed to parse");
                ParseError::from(err)
            })?;

        let total = calc_total(&items);
        info!(stage = %Stage::Done, items = items.len(), total, "Cart parsed");

        Ok(Cart { items, total })
    }

    /// Reads and validates the file at `path` without escalating diagnostics.
    ///
    /// Only I/O failures are errors here; an invalid document is an `Ok`
    /// holding its diagnostics.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> ParserResult<Vec<Diagnostic>> {
        let path = path.as_ref();
        let contents = self.read(path)?;

        let diagnostics = validate(&contents);
        info!(
            path = %path.display(),
            diagnostics = diagnostics.len(),
            "Cart validated"
        );
        Ok(diagnostics)
    }

    fn read(&self, path: &Path) -> ParserResult<String> {
        debug!(stage = %Stage::Reading, path = %path.display(), "Reading cart file");
        self.reader.read_to_string(path).map_err(|source| {
            error!(
                stage = %Stage::Reading,
                path = %path.display(),
                error = %source,
                "Failed to read cart file"
            );
            ParseError::io(path, source)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
