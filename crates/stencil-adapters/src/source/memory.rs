//! In-memory document source for testing.

use std::path::{Path, PathBuf};

use stencil_core::{
    application::{
        ApplicationError,
        ports::{SchemaDocument, SchemaSource},
    },
    error::StencilResult,
};

/// Documents held in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<SchemaDocument>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, source_name: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.push(SchemaDocument::new(source_name, text));
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl SchemaSource for MemorySource {
    fn list(&self) -> StencilResult<Vec<PathBuf>> {
        Ok(self
            .documents
            .iter()
            .map(|d| PathBuf::from(&d.source_name))
            .collect())
    }

    fn read(&self, location: &Path) -> StencilResult<SchemaDocument> {
        self.documents
            .iter()
            .find(|d| Path::new(&d.source_name) == location)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::DocumentRead {
                    source_name: location.display().to_string(),
                    reason: "no such document".into(),
                }
                .into()
            })
    }
}
