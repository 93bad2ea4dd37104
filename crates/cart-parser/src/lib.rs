//! # cart-parser: File Reading & Parse Facade
//!
//! Connects the file system to the pure logic in `cart-core`.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  path ──► FileReader ──► validate ──► RecordParser ──► calc_total       │
//! │              │              │          (per line)          │            │
//! │              ▼              ▼                              ▼            │
//! │          IoFailure   ValidationFailed              Cart { items, total }│
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_parser::{CartParser, ErrorKind};
//!
//! let parser = CartParser::new();
//!
//! let cart = parser.parse_str("Product name,Price,Quantity\nTea,2.5,4").unwrap();
//! assert_eq!(cart.total, 10.0);
//!
//! let err = parser.parse_str("Product name,Price\nTea,2.5").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ValidationFailed);
//! assert_eq!(err.diagnostics().len(), 2);
//! ```

pub mod error;
pub mod parser;
pub mod reader;

pub use error::{ErrorKind, ParseError, ParserResult};
pub use parser::CartParser;
pub use reader::{FileReader, FsReader};

// Core types callers need alongside the facade.
pub use cart_core::{Cart, CartItem, Diagnostic, DiagnosticKind};
