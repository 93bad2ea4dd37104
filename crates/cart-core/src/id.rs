//! # Identifier Generation
//!
//! Cart items get an opaque identifier when they are parsed. Generation sits
//! behind [`IdGenerator`] so tests can swap UUIDs for a predictable sequence.
//!
//! ```rust
//! use cart_core::id::{IdGenerator, SequentialIds};
//!
//! let ids = SequentialIds::new("item");
//! assert_eq!(ids.next_id(), "item-1");
//! assert_eq!(ids.next_id(), "item-2");
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh cart item identifiers.
///
/// Every call must return a value never returned before by the same
/// generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

// =============================================================================
// UUID v4 (default)
// =============================================================================

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// =============================================================================
// Sequential (deterministic)
// =============================================================================

/// `<prefix>-1`, `<prefix>-2`, ... Useful wherever output has to be stable.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
