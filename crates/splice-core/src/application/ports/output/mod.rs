//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `splice-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{FileNode, ProjectProfile};
use crate::error::SpliceResult;

/// Port for reading the include tree.
///
/// Implemented by:
/// - `splice_adapters::source_tree::LocalSourceTree` (production, walkdir)
/// - `splice_adapters::source_tree::MemorySourceTree` (testing)
///
/// ## Design Notes
///
/// - Every path is a [`FileNode`] relative to the include root
/// - Exclusion prunes the walk only; `read` resolves any node, excluded or not
pub trait SourceTree: Send + Sync {
    /// The include root, for diagnostics.
    fn root(&self) -> &Path;

    /// Walk the include root and return every file the profile recognises,
    /// skipping directories the profile excludes. Order is unspecified.
    ///
    /// Fails with `ApplicationError::DiscoveryFailed` when the root is
    /// missing or unreadable.
    fn discover(&self, profile: &ProjectProfile) -> SpliceResult<Vec<FileNode>>;

    /// Read one file as text.
    fn read(&self, node: &FileNode) -> SpliceResult<String>;
}

/// Port for writing the artifact.
///
/// Implemented by:
/// - `splice_adapters::filesystem::LocalFilesystem` (production)
/// - `splice_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SpliceResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> SpliceResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the generation timestamp.
///
/// Implemented by:
/// - `splice_adapters::clock::SystemClock` (local time via chrono)
/// - `splice_adapters::clock::FixedClock` (testing)
pub trait Clock: Send + Sync {
    /// Timestamp printed in the banner's `Generated:` line.
    fn timestamp(&self) -> String;
}
