//! Unified error handling for Splice Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Splice Core operations.
///
/// This enum wraps all possible errors that can occur when using splice-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum SpliceError {
    /// Errors from the domain layer (profile, classification, version).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (discovery, reading, writing).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SpliceError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the run stopped because the version could not be detected.
    pub fn is_version_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::VersionNotFound { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type SpliceResult<T> = Result<T, SpliceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn version_not_found_is_not_found_category() {
        let err: SpliceError = DomainError::VersionNotFound {
            macro_name: "V".into(),
            file: "v.h".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.is_version_not_found());
    }

    #[test]
    fn dangling_include_is_internal() {
        let err: SpliceError = ApplicationError::DanglingInclude {
            from: "a.h".into(),
            target: "missing.h".into(),
            reason: "not found".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_version_not_found());
    }

    #[test]
    fn discovery_failure_suggests_root() {
        let err: SpliceError = ApplicationError::DiscoveryFailed {
            root: PathBuf::from("/nope"),
            reason: "missing".into(),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("--root")));
    }
}
