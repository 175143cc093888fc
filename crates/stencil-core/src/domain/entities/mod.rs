pub mod artifact;
pub mod field;
pub mod registry;
pub mod schema;

pub use crate::domain::DomainError;
pub use artifact::{Artifact, ArtifactSet};
pub use field::FieldDescriptor;
pub use registry::SchemaRegistry;
pub use schema::SchemaDescriptor;
