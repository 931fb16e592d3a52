// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Splice.
//!
//! This module contains the pure amalgamation logic. All I/O (walking the
//! include tree, reading files, writing the artifact, reading the clock) is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few external crates**: std library + thiserror + regex
//! - **Immutable values**: profiles and nodes are Clone + PartialEq
//! - **Explicit state**: the inclusion record is passed, never global
//!
// Public API - what the world sees
pub mod banner;
pub mod classifier;
pub mod entities;
pub mod error;
pub mod profile;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use banner::{Banner, closing_guard, opening_guard};
pub use classifier::{LineClassification, LineClassifier, detect_version};
pub use entities::{FileNode, InclusionRecord, OrderedFileList};
pub use error::{DomainError, ErrorCategory};
pub use profile::{ProfileBuilder, ProjectProfile, sanitize_identifier};
pub use validation::DomainValidator;
