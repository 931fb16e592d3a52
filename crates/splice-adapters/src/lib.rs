//! Infrastructure adapters for Splice.
//!
//! This crate implements the ports defined in `splice-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod clock;
pub mod filesystem;
pub mod source_tree;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use source_tree::{LocalSourceTree, MemorySourceTree};
