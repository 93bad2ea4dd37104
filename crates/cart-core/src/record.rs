//! # Record Parsing
//!
//! Turns one validated data line into a [`CartItem`].
//!
//! The parser trusts its input: it does not repeat the validator's content
//! rules, so an empty name or a negative price passes straight through.
//! Lines whose numbers cannot be converted at all are reported as
//! [`CoreError::MalformedLine`].

use std::sync::Arc;

use csv::StringRecord;

use crate::document::{split_line, Row};
use crate::error::{CoreError, CoreResult};
use crate::id::{IdGenerator, UuidGenerator};
use crate::schema::Schema;
use crate::types::CartItem;
use crate::validation::parse_number;

/// Converts data lines into cart items, stamping each with a fresh id.
#[derive(Clone)]
pub struct RecordParser {
    ids: Arc<dyn IdGenerator>,
}

impl RecordParser {
    /// Parser that assigns UUID v4 identifiers.
    pub fn new() -> Self {
        Self::with_ids(Arc::new(UuidGenerator))
    }

    /// Parser with an injected identifier source.
    pub fn with_ids(ids: Arc<dyn IdGenerator>) -> Self {
        RecordParser { ids }
    }

    /// Parses `Product name,Price,Quantity` into a [`CartItem`].
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::RecordParser;
    ///
    /// let item = RecordParser::new().parse_line("SomeValue,3,4").unwrap();
    /// assert_eq!(item.name, "SomeValue");
    /// assert_eq!(item.price, 3.0);
    /// assert_eq!(item.quantity, 4.0);
    /// ```
    pub fn parse_line(&self, line: &str) -> CoreResult<CartItem> {
        self.parse_cells(line, &split_line(line))
    }

    /// Parses a row already tokenized by [`Document::read`](crate::Document::read).
    pub fn parse_row(&self, row: &Row) -> CoreResult<CartItem> {
        let line = row.cells.iter().collect::<Vec<_>>().join(",");
        self.parse_cells(&line, &row.cells)
    }

    fn parse_cells(&self, line: &str, record: &StringRecord) -> CoreResult<CartItem> {
        let cells: Vec<&str> = record.iter().map(str::trim).collect();

        let [name, price, quantity] = cells[..] else {
            return Err(CoreError::malformed(
                line,
                format!(
                    "expected {} cells but found {}",
                    Schema::cart().len(),
                    cells.len()
                ),
            ));
        };

        let price = parse_number(price)
            .ok_or_else(|| CoreError::malformed(line, format!("price {price:?} is not a number")))?;
        let quantity = parse_number(quantity).ok_or_else(|| {
            CoreError::malformed(line, format!("quantity {quantity:?} is not a number"))
        })?;

        Ok(CartItem {
            id: self.ids.next_id(),
            name: name.to_string(),
            price,
            quantity,
        })
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RecordParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordParser").finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIds;

    #[test]
    fn test_parse_line() {
        let parser = RecordParser::with_ids(Arc::new(SequentialIds::new("item")));
        let item = parser.parse_line("SomeValue,3,4").unwrap();
        assert_eq!(
            item,
            CartItem {
                id: "item-1".to_string(),
                name: "SomeValue".to_string(),
                price: 3.0,
                quantity: 4.0,
            }
        );
    }

    #[test]
    fn test_parse_line_trims_cells() {
        let item = RecordParser::new()
            .parse_line("  Mollis consequat , 9.00 ,2\r")
            .unwrap();
        assert_eq!(item.name, "Mollis consequat");
        assert_eq!(item.price, 9.0);
        assert_eq!(item.quantity, 2.0);
    }

    #[test]
    fn test_fresh_id_per_call() {
        let parser = RecordParser::new();
        let a = parser.parse_line("Tea,1,1").unwrap();
        let b = parser.parse_line("Tea,1,1").unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.same_content(&b));
    }

    #[test]
    fn test_does_not_revalidate_content() {
        let item = RecordParser::new().parse_line(",-3,2").unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.price, -3.0);
    }

    #[test]
    fn test_parse_row_keeps_line_in_errors() {
        let document = crate::Document::read("Product name,Price,Quantity\n\nTea,one,1");
        let row = &document.rows()[0];
        assert_eq!(row.index, 2);
        assert_eq!(
            RecordParser::new().parse_row(row),
            Err(CoreError::malformed("Tea,one,1", "price \"one\" is not a number"))
        );
    }

    #[test]
    fn test_malformed_lines() {
        let parser = RecordParser::new();
        assert!(matches!(
            parser.parse_line("Tea,1"),
            Err(CoreError::MalformedLine { .. })
        ));
        assert!(matches!(
            parser.parse_line("Tea,one,1"),
            Err(CoreError::MalformedLine { .. })
        ));
        assert!(matches!(
            parser.parse_line("Tea,1,2,3"),
            Err(CoreError::MalformedLine { .. })
        ));
    }
}
