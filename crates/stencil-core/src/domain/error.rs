// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so a scan report can keep them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Extraction Errors
    // ========================================================================
    #[error("invalid schema identifier '{value}' in {source_name}")]
    InvalidIdentifier { source_name: String, value: String },

    #[error("{source_name}: slug '{identifier}' generates type '{type_name}', already used by '{existing}'")]
    TypeNameCollision {
        source_name: String,
        identifier: String,
        type_name: String,
        existing: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("invalid conventions: {0}")]
    InvalidConventions(String),

    // ========================================================================
    // Artifact Errors
    // ========================================================================
    #[error("duplicate artifact path: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("artifact path escapes its output root: {path}")]
    PathEscapesRoot { path: String },

    #[error("artifact '{path}' has no content")]
    EmptyArtifact { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { source_name, value } => vec![
                format!("'{value}' in {source_name} is not a usable slug"),
                "Slugs start with a lowercase letter and use only a-z, 0-9, '-' and '_'".into(),
                "Example: slug: 'blog-posts'".into(),
            ],
            Self::TypeNameCollision {
                source_name,
                existing,
                ..
            } => vec![
                format!("Rename the slug in {source_name} so it differs from '{existing}'"),
                "Slugs that differ only in plurality or separators share a type name".into(),
            ],
            Self::InvalidConventions(msg) => vec![
                format!("Details: {msg}"),
                "Check the [conventions] section of stencil.toml".into(),
                "Try: stencil config list".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two generated artifacts map to {path}"),
                "Check for collections whose slugs collide".into(),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("{path} contains '.' or '..' components"),
                "Artifact paths must stay below the output directory".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::TypeNameCollision { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidConventions(_) => ErrorCategory::Configuration,
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::EmptyArtifact { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
