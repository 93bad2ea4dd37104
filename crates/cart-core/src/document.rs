//! # Document Tokenizing
//!
//! Splits cart CSV text into a header record and data rows with the `csv`
//! crate.
//!
//! ## Format
//! ```text
//! Product name,Price,Quantity      ← row 0, header
//! Mollis consequat,9.00,2          ← row 1
//!                                  ← row 2, blank: skipped, index kept
//! Tvoluptatem,10.32,1\r            ← row 3, trailing \r trimmed by callers
//! ```
//!
//! Rows end at `\n` only. There is no quoting, so every comma separates
//! cells and a `"` is ordinary text.

use csv::{ReaderBuilder, StringRecord, Terminator};

/// Row separator of the cart format.
pub const ROW_SEPARATOR: u8 = b'\n';

/// Cell separator of the cart format. No quoting is recognized.
pub const CELL_SEPARATOR: u8 = b',';

/// One data row and its absolute index in the file (the header is row 0).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    pub cells: StringRecord,
}

impl Row {
    /// A row holding nothing but whitespace.
    fn is_blank(&self) -> bool {
        self.cells.len() == 1 && self.cells.iter().all(|cell| cell.trim().is_empty())
    }
}

/// A tokenized cart document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    header: StringRecord,
    rows: Vec<Row>,
}

impl Document {
    /// Tokenizes a whole document.
    ///
    /// A missing or empty first line yields a header with a single empty
    /// cell. Data lines that are empty after trimming are dropped but still
    /// consume their row index.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::document::Document;
    ///
    /// let document = Document::read("Product name,Price,Quantity\n\nTea,1,2\n");
    /// assert_eq!(document.header().get(0), Some("Product name"));
    /// assert_eq!(document.rows()[0].index, 2);
    /// ```
    pub fn read(contents: &str) -> Self {
        let mut records = indexed_records(contents).into_iter().peekable();

        let header = match records.next_if(|row| row.index == 0) {
            Some(row) => row.cells,
            None => StringRecord::from(vec![""]),
        };
        let rows = records.filter(|row| !row.is_blank()).collect();

        Document { header, rows }
    }

    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

/// Tokenizes a single line into its cells.
pub fn split_line(line: &str) -> StringRecord {
    indexed_records(line)
        .into_iter()
        .next()
        .map(|row| row.cells)
        .unwrap_or_default()
}

fn reader(contents: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(CELL_SEPARATOR)
        .terminator(Terminator::Any(ROW_SEPARATOR))
        .from_reader(contents.as_bytes())
}

/// Reads every record with its absolute line index.
///
/// The reader silently skips empty lines, so the index is recovered by
/// walking the input bytes: without quoting a record occupies exactly its
/// cells joined by the separator, followed by one terminator.
fn indexed_records(contents: &str) -> Vec<Row> {
    let bytes = contents.as_bytes();
    let mut cursor = 0;
    let mut line = 0;
    let mut rows = Vec::new();

    // In-memory UTF-8 input with flexible rows cannot produce a csv error.
    for cells in reader(contents).into_records().map_while(Result::ok) {
        if cells.len() == 1 && cells.as_slice().is_empty() {
            continue;
        }
        while bytes.get(cursor) == Some(&ROW_SEPARATOR) {
            cursor += 1;
            line += 1;
        }
        let index = line;

        cursor += cells.as_slice().len() + cells.len().saturating_sub(1);
        if bytes.get(cursor) == Some(&ROW_SEPARATOR) {
            cursor += 1;
            line += 1;
        }

        rows.push(Row { index, cells });
    }
    rows
}
