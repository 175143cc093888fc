//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! "scan the collections" and "generate the artifacts".

pub mod generate_service;
pub mod scan_service;

pub use generate_service::{GenerateRequest, GenerateService, GenerationSummary};
pub use scan_service::{ScanFailure, ScanReport, ScanService};
