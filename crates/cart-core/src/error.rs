//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                          │
//! │  └── CoreError        - Record conversion failures                     │
//! │                                                                         │
//! │  Validation findings are NOT errors: they are `Diagnostic` values      │
//! │  collected by `validation::validate`.                                  │
//! │                                                                         │
//! │  cart-parser errors (separate crate)                                   │
//! │  └── ParseError       - I/O failure, validation failure                │
//! │                                                                         │
//! │  Flow: CoreError → ParseError → CLI exit code                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A data line could not be converted into a cart item.
    ///
    /// ## When This Occurs
    /// - `RecordParser::parse_line` was called on a line that never went
    ///   through `validation::validate`
    /// - The line has the wrong number of cells
    /// - Price or quantity is not a number
    #[error("Malformed cart line {line:?}: {reason}")]
    MalformedLine { line: String, reason: String },
}

impl CoreError {
    /// Creates a MalformedLine error for the given line.
    pub fn malformed(line: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::MalformedLine {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::malformed("a,b", "expected 3 cells but found 2");
        assert_eq!(
            err.to_string(),
            "Malformed cart line \"a,b\": expected 3 cells but found 2"
        );
    }
}
