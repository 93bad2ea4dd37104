//! # Cart Total
//!
//! Σ price × quantity over the cart, summed left to right.

use crate::types::CartItem;

/// Sums `price * quantity` over `items` in order. Empty input is 0.
///
/// ## Example
/// ```rust
/// use cart_core::{calc_total, CartItem};
///
/// let item = |price: f64, quantity: f64| CartItem {
///     id: String::new(),
///     name: "SomeValue".to_string(),
///     price,
///     quantity,
/// };
/// assert_eq!(calc_total(&[item(1.0, 3.0), item(5.0, 2.0)]), 13.0);
/// assert_eq!(calc_total(&[]), 0.0);
/// ```
pub fn calc_total(items: &[CartItem]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + item.line_total())
}

// =============================================================================
// Unit Tests
// =============================================================================
