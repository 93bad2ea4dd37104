//! # Validation Module
//!
//! Whole-document validation of cart CSV text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Passes                                  │
//! │                                                                         │
//! │  Row 0: Header                                                          │
//! │  └── each schema column: name matches? ──► no → Header diagnostic       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Rows 1..n: Data (blank lines skipped)                                  │
//! │  ├── cell count == 3? ──► no → Row diagnostic, skip the cells           │
//! │  └── each cell:                                                         │
//! │      ├── String column: empty? ──► Cell diagnostic                      │
//! │      └── Number column: NaN? negative? ──► Cell diagnostic              │
//! │                                                                         │
//! │  Nothing stops early: every row is checked, every finding is kept.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::validate;
//!
//! let diagnostics = validate("Product name,Price,Quantity\nTea,2.50,4");
//! assert!(diagnostics.is_empty());
//! ```

use csv::StringRecord;

use crate::document::{Document, Row};
use crate::schema::{Column, ColumnKind, Schema};
use crate::types::Diagnostic;

/// Validates a document against the cart schema.
///
/// Returns every diagnostic in discovery order: header findings by column,
/// then data rows in file order (row shape before cells, cells by column).
/// An empty vector means the document is valid. Never fails.
pub fn validate(contents: &str) -> Vec<Diagnostic> {
    validate_with(&Schema::cart(), contents)
}

/// Validates a document against an explicit schema.
pub fn validate_with(schema: &Schema, contents: &str) -> Vec<Diagnostic> {
    let document = Document::read(contents);

    let mut diagnostics = check_header(schema, document.header());
    for row in document.rows() {
        check_row(schema, row, &mut diagnostics);
    }
    diagnostics
}

// =============================================================================
// Header
// =============================================================================

fn check_header(schema: &Schema, header: &StringRecord) -> Vec<Diagnostic> {
    schema
        .columns()
        .iter()
        .enumerate()
        .filter_map(|(index, column)| {
            let received = header.get(index).map(str::trim);
            if received == Some(column.name) {
                None
            } else {
                Some(Diagnostic::header(index, column.name, received))
            }
        })
        .collect()
}

// =============================================================================
// Data Rows
// =============================================================================

fn check_row(schema: &Schema, row: &Row, diagnostics: &mut Vec<Diagnostic>) {
    let Row { index: row, cells } = row;

    // Shape errors suppress cell errors on the same row.
    if cells.len() != schema.len() {
        diagnostics.push(Diagnostic::row_shape(*row, schema.len(), cells.len()));
        return;
    }

    for (index, (column, cell)) in schema.columns().iter().zip(cells.iter()).enumerate() {
        if let Some(diagnostic) = check_cell(column, *row, index, cell.trim()) {
            diagnostics.push(diagnostic);
        }
    }
}

fn check_cell(column: &Column, row: usize, index: usize, cell: &str) -> Option<Diagnostic> {
    match column.kind {
        ColumnKind::String => {
            if cell.is_empty() {
                return Some(Diagnostic::empty_string(row, index, cell));
            }
        }
        ColumnKind::PositiveNumber => {
            let Some(value) = parse_number(cell) else {
                return Some(Diagnostic::not_positive_number(row, index, cell));
            };
            if value < 0.0 {
                return Some(Diagnostic::not_positive_number(row, index, cell));
            }
        }
    }
    None
}

// =============================================================================
// Number Parsing
// =============================================================================

/// Parses a trimmed cell as a finite decimal number.
///
/// Empty cells, `NaN` and infinities are not numbers here.
pub(crate) fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiagnosticKind;

    fn diag(kind: DiagnosticKind, row: usize, column: i64, message: &str) -> Diagnostic {
        Diagnostic {
            kind,
            row,
            column,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_missing_header_column() {
        let text = "Product name,Price\nstring,0,0";
        assert_eq!(
            validate(text),
            vec![diag(
                DiagnosticKind::Header,
                0,
                2,
                "Expected header to be named \"Quantity\" but received undefined."
            )]
        );
    }

    #[test]
    fn test_wrong_cell_count() {
        let text = "Product name,Price, Quantity\nstring,0";
        assert_eq!(
            validate(text),
            vec![diag(
                DiagnosticKind::Row,
                1,
                -1,
                "Expected row to have 3 cells but received 2."
            )]
        );
    }

    #[test]
    fn test_empty_string_cell() {
        let text = "Product name,Price, Quantity\n, 3,2\n";
        assert_eq!(
            validate(text),
            vec![diag(
                DiagnosticKind::Cell,
                1,
                0,
                "Expected cell to be a nonempty string but received \"\"."
            )]
        );
    }

    #[test]
    fn test_negative_number_cell() {
        let text = "Product name,Price, Quantity\nstring,-3,2\nstring, 2, 3";
        assert_eq!(
            validate(text),
            vec![diag(
                DiagnosticKind::Cell,
                1,
                1,
                "Expected cell to be a positive number but received \"-3\"."
            )]
        );
    }

    #[test]
    fn test_non_numeric_cell() {
        let text = "Product name,Price, Quantity\nstring, 3,2\nstring, 2, string";
        assert_eq!(
            validate(text),
            vec![diag(
                DiagnosticKind::Cell,
                2,
                2,
                "Expected cell to be a positive number but received \"string\"."
            )]
        );
    }

    #[test]
    fn test_valid_document() {
        let text = "Product name,Price,Quantity\nstring,1,1\nstring,1,1";
        assert!(validate(text).is_empty());
    }

    #[test]
    fn test_zero_is_accepted() {
        let text = "Product name,Price,Quantity\nfree sample,0,0.0";
        assert!(validate(text).is_empty());
    }

    #[test]
    fn test_all_errors_reported_in_order() {
        let text = "Product name,Price\nitem,4\nitem,-5,3\n,1,string";
        assert_eq!(
            validate(text),
            vec![
                diag(
                    DiagnosticKind::Header,
                    0,
                    2,
                    "Expected header to be named \"Quantity\" but received undefined."
                ),
                diag(
                    DiagnosticKind::Row,
                    1,
                    -1,
                    "Expected row to have 3 cells but received 2."
                ),
                diag(
                    DiagnosticKind::Cell,
                    2,
                    1,
                    "Expected cell to be a positive number but received \"-5\"."
                ),
                diag(
                    DiagnosticKind::Cell,
                    3,
                    0,
                    "Expected cell to be a nonempty string but received \"\"."
                ),
                diag(
                    DiagnosticKind::Cell,
                    3,
                    2,
                    "Expected cell to be a positive number but received \"string\"."
                ),
            ]
        );
    }

    #[test]
    fn test_misnamed_header_shows_trimmed_value() {
        let text = "Product name, Cost ,Quantity\nTea,1,1";
        assert_eq!(
            validate(text),
            vec![diag(
                DiagnosticKind::Header,
                0,
                1,
                "Expected header to be named \"Price\" but received Cost."
            )]
        );
    }

    #[test]
    fn test_empty_document() {
        let diagnostics = validate("");
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(
            diagnostics[0].message,
            "Expected header to be named \"Product name\" but received ."
        );
        assert_eq!(
            diagnostics[1].message,
            "Expected header to be named \"Price\" but received undefined."
        );
    }

    #[test]
    fn test_blank_lines_keep_row_numbers() {
        let text = "Product name,Price,Quantity\n\nTea,x,1\r\n";
        assert_eq!(
            validate(text),
            vec![diag(
                DiagnosticKind::Cell,
                2,
                1,
                "Expected cell to be a positive number but received \"x\"."
            )]
        );
    }

    #[test]
    fn test_extra_header_cells_ignored() {
        assert!(validate("Product name,Price,Quantity,Extra\nTea,1,1").is_empty());
    }

    #[test]
    fn test_row_with_too_many_cells() {
        assert_eq!(
            validate("Product name,Price,Quantity\nTea,1,1,1"),
            vec![diag(
                DiagnosticKind::Row,
                1,
                -1,
                "Expected row to have 3 cells but received 4."
            )]
        );
    }

    #[test]
    fn test_quotes_do_not_group_cells() {
        assert_eq!(
            validate("Product name,Price,Quantity\n\"Tea, green\",1,1"),
            vec![diag(
                DiagnosticKind::Row,
                1,
                -1,
                "Expected row to have 3 cells but received 4."
            )]
        );
    }

    #[test]
    fn test_empty_and_non_finite_numbers_rejected() {
        let text = "Product name,Price,Quantity\nTea,,1\nTea,NaN,1\nTea,1,inf";
        let columns: Vec<_> = validate(text).iter().map(|d| (d.row, d.column)).collect();
        assert_eq!(columns, vec![(1, 1), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3"), Some(3.0));
        assert_eq!(parse_number("16.50"), Some(16.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::types::DiagnosticKind;
    use proptest::prelude::*;

    fn valid_row() -> impl Strategy<Value = String> {
        ("[A-Za-z][A-Za-z0-9 ]{0,12}", 0u32..100_000, 0u32..1_000)
            .prop_map(|(name, cents, qty)| format!("{name},{}.{:02},{qty}", cents / 100, cents % 100))
    }

    proptest! {
        #[test]
        fn test_valid_documents_have_no_diagnostics(rows in prop::collection::vec(valid_row(), 0..20)) {
            let mut text = Schema::cart().header_line();
            for row in &rows {
                text.push('\n');
                text.push_str(row);
            }
            prop_assert!(validate(&text).is_empty());
        }

        #[test]
        fn test_validate_is_total_and_deterministic(text in "\\PC{0,200}") {
            let first = validate(&text);
            let second = validate(&text);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_diagnostics_are_ordered(text in "[a-z0-9,\\- \n]{0,200}") {
            let diagnostics = validate(&text);
            let keys: Vec<_> = diagnostics.iter().map(|d| (d.row, d.column)).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(keys, sorted);
        }

        #[test]
        fn test_shape_error_suppresses_cell_errors(text in "[a-z0-9,\\- \n]{0,200}") {
            let diagnostics = validate(&text);
            for shape in diagnostics.iter().filter(|d| d.kind == DiagnosticKind::Row) {
                prop_assert!(!diagnostics
                    .iter()
                    .any(|d| d.kind == DiagnosticKind::Cell && d.row == shape.row));
            }
        }
    }
}
