//! # Cart Schema
//!
//! The static description of a cart document: three columns in a fixed
//! order, each with the kind of value its cells must hold.
//!
//! ```text
//! ┌──────────────┬────────────────┬────────────────┐
//! │ Product name │     Price      │    Quantity    │
//! │   String     │ PositiveNumber │ PositiveNumber │
//! └──────────────┴────────────────┴────────────────┘
//! ```

// =============================================================================
// Column Kind
// =============================================================================

/// The kind of value a column's cells must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Any nonempty string (after trimming).
    String,
    /// A finite number that is zero or greater.
    PositiveNumber,
}

// =============================================================================
// Column
// =============================================================================

/// One column of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Expected header text.
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Column { name, kind }
    }
}

/// Column table of the cart format.
const CART_COLUMNS: [Column; 3] = [
    Column::new("Product name", ColumnKind::String),
    Column::new("Price", ColumnKind::PositiveNumber),
    Column::new("Quantity", ColumnKind::PositiveNumber),
];

// =============================================================================
// Schema
// =============================================================================

/// Ordered column description read by the validator and the record parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    columns: &'static [Column],
}

impl Schema {
    /// The cart schema: `Product name`, `Price`, `Quantity`.
    #[inline]
    pub const fn cart() -> Self {
        Schema {
            columns: &CART_COLUMNS,
        }
    }

    /// Columns in header order.
    #[inline]
    pub const fn columns(&self) -> &'static [Column] {
        self.columns
    }

    /// Number of cells every row must have.
    #[inline]
    pub const fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The header line a valid document starts with.
    #[cfg(test)]
    pub(crate) fn header_line(&self) -> String {
        self.columns
            .iter()
            .map(|column| column.name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::cart()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_schema_columns() {
        let schema = Schema::cart();
        assert_eq!(schema.len(), 3);

        let names: Vec<_> = schema.columns().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Product name", "Price", "Quantity"]);

        assert_eq!(schema.columns()[0].kind, ColumnKind::String);
        assert_eq!(schema.columns()[1].kind, ColumnKind::PositiveNumber);
        assert_eq!(schema.columns()[2].kind, ColumnKind::PositiveNumber);
    }

    #[test]
    fn test_header_line() {
        assert_eq!(Schema::cart().header_line(), "Product name,Price,Quantity");
    }
}
