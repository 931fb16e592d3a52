//! Application layer for Splice.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AmalgamationEngine, AmalgamateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer drives the domain layer through the ports. The
//! amalgamation rules themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AmalgamateRequest, AmalgamateService, AmalgamationEngine, AmalgamationReport,
    AmalgamationResult, Artifact, ExpandMode,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, Filesystem, SourceTree};

pub use error::ApplicationError;
