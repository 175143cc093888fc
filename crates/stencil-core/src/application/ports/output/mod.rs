//! Driven (output) ports - implemented by infrastructure.
//!
//! The `stencil-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::Artifact;
use crate::error::StencilResult;

/// One collection document as read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    /// Name used in diagnostics and provenance headers, e.g. `Posts.ts`.
    pub source_name: String,
    pub text: String,
}

impl SchemaDocument {
    pub fn new(source_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            text: text.into(),
        }
    }
}

/// Port for reading collection documents.
///
/// Implemented by:
/// - `stencil_adapters::source::DirectorySource` (production)
/// - `stencil_adapters::source::MemorySource` (testing)
pub trait SchemaSource: Send + Sync {
    /// Every document location, in a stable order.
    fn list(&self) -> StencilResult<Vec<PathBuf>>;

    /// Read one document. A failure here is contained to that document.
    fn read(&self, location: &Path) -> StencilResult<SchemaDocument>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> StencilResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove one file.
    fn remove_file(&self, path: &Path) -> StencilResult<()>;

    /// Every file below `root`, recursively. Missing roots yield nothing.
    fn list_files(&self, root: &Path) -> StencilResult<Vec<PathBuf>>;
}

/// Port for formatting emitted text before it is written.
pub trait ArtifactFormatter: Send + Sync {
    fn format(&self, artifact: &Artifact) -> StencilResult<String>;
}
