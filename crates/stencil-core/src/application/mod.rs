//! Application layer for Stencil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScanService, GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! extraction or emission logic itself. That lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    GenerateRequest, GenerateService, GenerationSummary, ScanFailure, ScanReport, ScanService,
};

pub use ports::{ArtifactFormatter, Filesystem, SchemaDocument, SchemaSource};

pub use error::ApplicationError;
