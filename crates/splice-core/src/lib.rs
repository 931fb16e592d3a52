//! Splice Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Splice, a tool
//! that flattens a header-only library into one self-contained header,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           splice-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (AmalgamateService, AmalgamationEngine) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: SourceTree, Filesystem, Clock)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     splice-adapters (Infrastructure)    │
//! │ (LocalSourceTree, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectProfile, FileNode, Classifier)  │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use splice_core::{
//!     application::{AmalgamateRequest, AmalgamateService, ExpandMode},
//!     domain::ProjectProfile,
//! };
//!
//! // 1. Describe the project
//! let profile = ProjectProfile::builder("ureact").build().unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let service = AmalgamateService::new(tree, filesystem, clock);
//! let request = AmalgamateRequest::new(profile.clone(), profile.default_output())
//!     .mode(ExpandMode::Expand);
//! let report = service.assemble(&request).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AmalgamateRequest, AmalgamateService, AmalgamationReport, ExpandMode,
        ports::{Clock, Filesystem, SourceTree},
    };
    pub use crate::domain::{FileNode, OrderedFileList, ProfileBuilder, ProjectProfile};
    pub use crate::error::{SpliceError, SpliceResult};
}
