// ============================================================================
// domain/errors.rs - AMALGAMATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the report and the CLI unchanged)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the include root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Can't detect version: no '#define {macro_name} \"...\"' line in {file}")]
    VersionNotFound { macro_name: String, file: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProfile(msg) => vec![
                "Check the [project] section of your splice.toml".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidPattern { pattern, .. } => vec![
                format!("The generated pattern '{}' did not compile", pattern),
                "Check the namespace and version_macro settings".into(),
            ],
            Self::VersionNotFound { macro_name, file } => vec![
                format!("{} must contain a line like:", file),
                format!("  #define {} \"1.0.0\"", macro_name),
                "Or point project.version_file / project.version_macro elsewhere".into(),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("'{}' uses '..' to leave the include root", path),
                "Internal includes must stay below the include root".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProfile(_)
            | Self::InvalidPattern { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. } | Self::PathEscapesRoot { .. } => {
                ErrorCategory::Validation
            }
            Self::VersionNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
