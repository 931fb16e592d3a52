//! Application services - orchestrate use cases.
//!
//! The engine expands one file (and, recursively, what it includes); the
//! amalgamate service assembles a whole artifact around it.

pub mod amalgamate_service;
pub mod engine;

pub use amalgamate_service::{AmalgamateRequest, AmalgamateService, AmalgamationReport, Artifact};
pub use engine::{AmalgamationEngine, AmalgamationResult, ExpandMode};
