//! Application ports (traits) for external dependencies.
//!
//! Adapters in `stencil-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SchemaSource`: Collection document discovery and reading
//!   - `Filesystem`: Artifact writing and cleanup
//!   - `ArtifactFormatter`: Post-emit formatting
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ArtifactFormatter, Filesystem, SchemaDocument, SchemaSource};
