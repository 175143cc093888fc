//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in
//! extraction or emission. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The document source could not be enumerated (missing input dir, etc.).
    #[error("Schema source unavailable at {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// One document could not be read.
    #[error("Failed to read {source_name}: {reason}")]
    DocumentRead { source_name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The artifact formatter rejected an artifact.
    #[error("Formatting failed for {path}: {reason}")]
    FormattingFailed { path: String, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { path, .. } => vec![
                format!("Input directory not readable: {}", path.display()),
                "Pass the collections directory with --input".into(),
                "Or set [paths] input in stencil.toml".into(),
            ],
            Self::DocumentRead { source_name, .. } => vec![
                format!("Could not read {source_name}"),
                "Check file permissions and that the file is UTF-8".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec![
                "An adapter lock was poisoned by a panic".into(),
                "Try again".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } => ErrorCategory::NotFound,
            Self::DocumentRead { .. } | Self::ValidationFailed(_) => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::FormattingFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
