//! # cart-core: Pure Cart CSV Logic
//!
//! This crate is the **heart** of the cart parser. It contains the schema,
//! the document validator, the line → record conversion and the cart total,
//! all as pure functions with zero I/O dependencies. Tokenizing runs the
//! `csv` crate over in-memory text.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Parser Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cart-cli (cart-parse binary)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          cart-parser (file read → validate → parse → total)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌────────────┐  ┌──────────┐  ┌──────────┐     │   │
//! │  │   │  schema  │  │ validation │  │  record  │  │  total   │     │   │
//! │  │   │ columns  │  │ diagnostics│  │ CartItem │  │ Σ p × q  │     │   │
//! │  │   └──────────┘  └────────────┘  └──────────┘  └──────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - The fixed three-column cart schema
//! - [`document`] - CSV tokenizing into a header and indexed data rows
//! - [`types`] - Diagnostics, cart items and the parsed cart
//! - [`validation`] - Whole-document validation producing diagnostics
//! - [`record`] - Conversion of one data line into a [`CartItem`]
//! - [`id`] - Injectable identifier generation
//! - [`total`] - Cart total aggregation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::validation::validate;
//!
//! let diagnostics = validate("Product name,Price\nstring,0,0");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(
//!     diagnostics[0].message,
//!     r#"Expected header to be named "Quantity" but received undefined."#
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod id;
pub mod record;
pub mod schema;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cart_core::CartItem` instead of
// `use cart_core::types::CartItem`

pub use document::{Document, Row};
pub use error::{CoreError, CoreResult};
pub use id::{IdGenerator, SequentialIds, UuidGenerator};
pub use record::RecordParser;
pub use schema::{Column, ColumnKind, Schema};
pub use total::calc_total;
pub use types::*;
pub use validation::validate;
