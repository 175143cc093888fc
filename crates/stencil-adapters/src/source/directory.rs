//! Collection documents discovered under a directory tree.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use stencil_core::{
    application::{
        ApplicationError,
        ports::{SchemaDocument, SchemaSource},
    },
    error::StencilResult,
};

/// Extensions treated as collection documents.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["ts", "js", "mjs", "cjs"];

/// Directories never descended into.
const IGNORED_DIRS: [&str; 3] = ["node_modules", "dist", "build"];

/// Reads every script file below `root`.
///
/// Declaration files (`*.d.ts`), hidden entries, and dependency/build
/// directories are ignored. Locations come back sorted so scans are
/// deterministic.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extensions: Vec<String>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_document(&self, path: &Path) -> bool {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if name.ends_with(".d.ts") {
            return false;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// `location` relative to the root, with `/` separators.
    fn source_name(&self, location: &Path) -> String {
        let relative = location.strip_prefix(&self.root).unwrap_or(location);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn is_ignored(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.file_type().is_dir() && IGNORED_DIRS.contains(&&*name))
}

impl SchemaSource for DirectorySource {
    fn list(&self) -> StencilResult<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::SourceUnavailable {
                path: self.root.clone(),
                reason: "not a directory".into(),
            }
            .into());
        }

        let mut locations = Vec::new();
        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_ignored(e))
        {
            let entry = entry.map_err(|e| ApplicationError::SourceUnavailable {
                path: self.root.clone(),
                reason: format!("directory walk error: {e}"),
            })?;

            if entry.file_type().is_file() && self.is_document(entry.path()) {
                trace!(path = %entry.path().display(), "Found document");
                locations.push(entry.into_path());
            }
        }

        debug!(root = %self.root.display(), documents = locations.len(), "Listed documents");
        Ok(locations)
    }

    fn read(&self, location: &Path) -> StencilResult<SchemaDocument> {
        let source_name = self.source_name(location);
        let text = std::fs::read_to_string(location).map_err(|e| {
            ApplicationError::DocumentRead {
                source_name: source_name.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(SchemaDocument::new(source_name, text))
    }
}
