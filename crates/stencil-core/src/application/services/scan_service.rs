//! Scan Service - batch extraction over a document source.
//!
//! One bad document never aborts the batch. Read errors, extraction errors
//! and type-name collisions are logged with the document's source name and
//! recorded in the report before the scan moves on.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::SchemaSource,
    domain::{Conventions, DomainError, Extraction, MetadataExtractor, SchemaRegistry},
    error::{StencilError, StencilResult},
};

/// A document that could not be turned into a schema.
#[derive(Debug, Clone)]
pub struct ScanFailure {
    pub source_name: String,
    pub error: StencilError,
}

/// Result of scanning every document in a source.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub registry: SchemaRegistry,
    /// Documents without an identifier marker.
    pub skipped: Vec<String>,
    pub failures: Vec<ScanFailure>,
    /// Documents whose identifier was already taken by an earlier document.
    pub duplicates: Vec<String>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.duplicates.is_empty()
    }
}

/// Runs the extractor over every document a [`SchemaSource`] yields.
pub struct ScanService {
    source: Box<dyn SchemaSource>,
    extractor: MetadataExtractor,
}

impl ScanService {
    pub fn new(source: Box<dyn SchemaSource>, conventions: Conventions) -> Self {
        Self {
            source,
            extractor: MetadataExtractor::new(conventions),
        }
    }

    pub fn conventions(&self) -> &Conventions {
        self.extractor.conventions()
    }

    /// Scan all documents in source order.
    ///
    /// Fails only when the source itself cannot be listed.
    #[instrument(skip_all)]
    pub fn scan(&self) -> StencilResult<ScanReport> {
        let locations = self.source.list()?;
        debug!(documents = locations.len(), "Scanning schema source");

        let mut report = ScanReport::default();

        for location in locations {
            let document = match self.source.read(&location) {
                Ok(document) => document,
                Err(error) => {
                    let source_name = location.display().to_string();
                    warn!(source = %source_name, error = %error, "schema extraction failed");
                    report.failures.push(ScanFailure { source_name, error });
                    continue;
                }
            };

            match self.extractor.extract(&document.text, &document.source_name) {
                Ok(Extraction::Schema(schema)) => {
                    let identifier = schema.identifier().to_string();
                    if let Some(existing) = report.registry.type_name_conflict(&schema) {
                        let error = DomainError::TypeNameCollision {
                            source_name: document.source_name.clone(),
                            identifier,
                            type_name: schema.type_name(),
                            existing: existing.identifier().to_string(),
                        };
                        warn!(source = %document.source_name, error = %error, "schema extraction failed");
                        report.failures.push(ScanFailure {
                            source_name: document.source_name,
                            error: error.into(),
                        });
                        continue;
                    }
                    match report.registry.insert(schema) {
                        Ok(()) => {
                            info!(
                                identifier = %identifier,
                                source = %document.source_name,
                                "schema found"
                            );
                        }
                        Err(rejected) => {
                            let first = report
                                .registry
                                .get(&identifier)
                                .map(|s| s.source_name().to_string())
                                .unwrap_or_default();
                            warn!(
                                identifier = %identifier,
                                source = %rejected.source_name(),
                                kept = %first,
                                "duplicate identifier ignored"
                            );
                            report.duplicates.push(document.source_name);
                        }
                    }
                }
                Ok(Extraction::NotASchema) => {
                    debug!(source = %document.source_name, "schema skipped");
                    report.skipped.push(document.source_name);
                }
                Err(error) => {
                    warn!(source = %document.source_name, error = %error, "schema extraction failed");
                    report.failures.push(ScanFailure {
                        source_name: document.source_name,
                        error: error.into(),
                    });
                }
            }
        }

        info!(
            schemas = report.registry.len(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "Scan completed"
        );
        Ok(report)
    }
}
