//! # File Reader
//!
//! The facade's only access to the outside world. Kept behind a trait so the
//! pipeline can be driven from memory in tests.

use std::fs;
use std::io;
use std::path::Path;

/// Reads a whole cart document as UTF-8 text.
///
/// Implementations must release any handle they open before returning, on
/// success and on error alike.
pub trait FileReader: Send + Sync {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        // The handle is dropped inside `fs::read_to_string` on every path.
        fs::read_to_string(path)
    }
}
