//! Stencil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Stencil, which
//! reads CMS collection definitions and emits typed TypeScript artifacts.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScanService, GenerateService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (SchemaSource, Filesystem, Formatter)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │ (DirectorySource, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (MetadataExtractor, TypeMapper, emit)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stencil_core::domain::{EmitContext, EmitTarget, MetadataExtractor, SchemaRegistry, emit_all};
//!
//! let text = "slug: 'posts', fields: [{ name: 'title', type: 'text', required: true }]";
//! let schema = MetadataExtractor::default()
//!     .extract(text, "Posts.ts")
//!     .unwrap()
//!     .into_schema()
//!     .unwrap();
//!
//! let mut registry = SchemaRegistry::new();
//! registry.insert(schema).unwrap();
//!
//! let artifacts = emit_all(&registry, &EmitContext::default(), &EmitTarget::ALL).unwrap();
//! assert_eq!(artifacts.len(), 2);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateRequest, GenerateService, GenerationSummary, ScanReport, ScanService,
        ports::{ArtifactFormatter, Filesystem, SchemaDocument, SchemaSource},
    };
    pub use crate::domain::{
        Artifact, ArtifactKind, Conventions, EmitContext, EmitTarget, FieldDescriptor,
        MetadataExtractor, SchemaDescriptor, SchemaRegistry, TypeMapper,
    };
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
