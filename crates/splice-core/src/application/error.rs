//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! amalgamation rules themselves. Rule violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The include root could not be walked.
    #[error("Cannot discover files under {root}: {reason}")]
    DiscoveryFailed { root: PathBuf, reason: String },

    /// An internal include names a file that cannot be read.
    #[error("{from} includes {target}, which cannot be read: {reason}")]
    DanglingInclude {
        from: String,
        target: String,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Port state is unusable (lock poisoned, etc.).
    #[error("Adapter state is unavailable: {name}")]
    AdapterLockError { name: &'static str },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DiscoveryFailed { root, .. } => vec![
                format!("Include root not usable: {}", root.display()),
                "Pass the directory holding your headers with --root".into(),
                "Or set project.include_root in splice.toml".into(),
            ],
            Self::DanglingInclude { from, target, .. } => vec![
                format!("{} references {}", from, target),
                "Check the include path for typos".into(),
                "Internal includes are resolved relative to the include root".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
            ],
            Self::AdapterLockError { name } => vec![
                format!("The {} adapter is unavailable", name),
                "Try again in a moment".into(),
            ],
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DiscoveryFailed { .. } => ErrorCategory::NotFound,
            Self::DanglingInclude { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::AdapterLockError { .. } => ErrorCategory::Internal,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
