//! # Parse Error Types
//!
//! Error types for the parse facade.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error ─────────────► ParseError::IoFailure (source kept)      │
//! │                                                                         │
//! │  Vec<Diagnostic> (non-empty) ► ParseError::ValidationFailed             │
//! │                                                                         │
//! │  CoreError ──────────────────► ParseError::Record                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart-cli maps ErrorKind to an exit code                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use cart_core::{CoreError, Diagnostic};
use thiserror::Error;

/// Failures of [`crate::CartParser`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The cart file could not be read.
    ///
    /// ## When This Occurs
    /// - Path does not exist
    /// - Permission denied
    /// - File is not valid UTF-8
    #[error("Failed to read {}: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document has at least one diagnostic. Carries all of them.
    #[error("Validation failed with {} error(s)", diagnostics.len())]
    ValidationFailed { diagnostics: Vec<Diagnostic> },

    /// A validated line could not be turned into a cart item.
    #[error("Record conversion failed: {0}")]
    Record(#[from] CoreError),
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    IoFailure,
    ValidationFailed,
    Record,
}

impl ParseError {
    /// Creates an IoFailure error for `path`.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        ParseError::IoFailure {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::IoFailure { .. } => ErrorKind::IoFailure,
            ParseError::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            ParseError::Record(_) => ErrorKind::Record,
        }
    }

    /// Diagnostics of a validation failure; empty for every other kind.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ParseError::ValidationFailed { diagnostics } => diagnostics.as_slice(),
            _ => &[],
        }
    }
}

/// Result type for parse operations.
pub type ParserResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_source() {
        let err = ParseError::io(
            "missing.csv",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert_eq!(err.to_string(), "Failed to read missing.csv: no such file");

        let ParseError::IoFailure { source, .. } = &err else {
            panic!("expected IoFailure");
        };
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_validation_failed_message() {
        let err = ParseError::ValidationFailed {
            diagnostics: vec![Diagnostic::row_shape(1, 3, 2)],
        };
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.to_string(), "Validation failed with 1 error(s)");
    }

    #[test]
    fn test_core_error_converts() {
        let err: ParseError = CoreError::malformed("x", "bad").into();
        assert_eq!(err.kind(), ErrorKind::Record);
        assert!(err.diagnostics().is_empty());
    }
}
