//! # Domain Types
//!
//! Data types shared by the validator, the record parser and the facade.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Diagnostic    │   │    CartItem     │   │      Cart       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  type           │   │  id (UUID)      │   │  items          │       │
//! │  │  row            │   │  name           │   │  total          │       │
//! │  │  column         │   │  price          │   └─────────────────┘       │
//! │  │  message        │   │  quantity       │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Compatibility Contract
//! `Diagnostic` serializes with the field names `type`, `row`, `column` and
//! `message`, and its messages are byte-for-byte stable. Consumers display
//! and match on them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Diagnostic Kind
// =============================================================================

/// Which rule a diagnostic comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Header cell does not match the schema column name.
    Header,
    /// Row has the wrong number of cells.
    Row,
    /// Cell content does not match the column kind.
    Cell,
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A single validation finding.
///
/// Diagnostics are values, not errors: `validation::validate` collects every
/// one of them for the whole document before returning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnostic {
    #[serde(rename = "type")]
    pub kind: DiagnosticKind,

    /// Absolute line index; the header is row 0.
    #[ts(type = "number")]
    pub row: usize,

    /// Column index, or -1 when the finding is about the whole row.
    #[ts(type = "number")]
    pub column: i64,

    pub message: String,
}

impl Diagnostic {
    /// Header name mismatch at `column`.
    ///
    /// `received` is `None` when the header has no cell at that position,
    /// which renders as the literal `undefined`.
    pub fn header(column: usize, expected: &str, received: Option<&str>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Header,
            row: 0,
            column: column as i64,
            message: format!(
                "Expected header to be named \"{expected}\" but received {}.",
                received.unwrap_or("undefined")
            ),
        }
    }

    /// Wrong cell count on a data row.
    pub fn row_shape(row: usize, expected: usize, received: usize) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Row,
            row,
            column: -1,
            message: format!("Expected row to have {expected} cells but received {received}."),
        }
    }

    /// Empty cell in a string column.
    pub fn empty_string(row: usize, column: usize, received: &str) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Cell,
            row,
            column: column as i64,
            message: format!("Expected cell to be a nonempty string but received \"{received}\"."),
        }
    }

    /// Unparseable or negative cell in a number column.
    pub fn not_positive_number(row: usize, column: usize, received: &str) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Cell,
            row,
            column: column as i64,
            message: format!("Expected cell to be a positive number but received \"{received}\"."),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.column < 0 {
            write!(f, "row {}: {}", self.row, self.message)
        } else {
            write!(f, "row {}, column {}: {}", self.row, self.column, self.message)
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One line of the cart.
///
/// `id` is generated when the line is parsed and is never derived from the
/// line's content, so two identical lines yield two distinct items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

impl CartItem {
    /// price × quantity.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity
    }

    /// Compares everything except the generated identifier.
    pub fn same_content(&self, other: &CartItem) -> bool {
        self.name == other.name && self.price == other.price && self.quantity == other.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The result of parsing a whole document: items in file order plus the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
