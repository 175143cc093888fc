//! Core domain layer for Stencil.
//!
//! Pure logic with no I/O: text goes in, [`SchemaDescriptor`]s and
//! [`Artifact`]s come out. Reading documents and writing files is done
//! through ports defined in the application layer.
//!
//! - **No I/O**: documents arrive as `&str`, artifacts leave as `String`
//! - **Immutable entities**: descriptors are built once and never mutated
//! - **Deterministic**: the same inputs always emit the same bytes

pub mod conventions;
pub mod emit;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod inflection;
pub mod type_mapper;

pub use conventions::{Conventions, FieldRole, FieldRoles, ScanWindows, StatusValues};
pub use emit::{DEFAULT_CLIENT_MODULE, EmitContext, EmitTarget, emit_all};
pub use entities::{
    artifact::{
        Artifact, ArtifactKind, ArtifactPath, ArtifactRoot, ArtifactSet, GENERATED_MARKER,
        generated_header, is_generated,
    },
    field::{FieldDescriptor, GENERIC_PRIMITIVE, dedupe_fields},
    registry::SchemaRegistry,
    schema::{Capabilities, SchemaDescriptor},
};
pub use error::{DomainError, ErrorCategory};
pub use extractor::{Extraction, MetadataExtractor};
pub use type_mapper::{FieldPredicate, TypeMapper, TypeOverride};

#[cfg(test)]
mod tests {
    use super::*;

    const PAGES: &str = r#"
export const Pages: CollectionConfig = {
  slug: 'pages',
  admin: { useAsTitle: 'title' },
  access: { read: () => true },
  fields: [
    { name: 'title', type: 'text', required: true },
    { name: 'slug', type: 'text' },
    { name: 'showInNav', type: 'checkbox' },
  ],
};
"#;

    #[test]
    fn text_to_artifacts() {
        let extractor = MetadataExtractor::default();
        let schema = extractor
            .extract(PAGES, "Pages.ts")
            .unwrap()
            .into_schema()
            .unwrap();

        let mut registry = SchemaRegistry::new();
        registry.insert(schema).unwrap();

        let set = emit_all(&registry, &EmitContext::default(), &EmitTarget::ALL).unwrap();

        let types = set.of_kind(ArtifactKind::Types).next().unwrap();
        assert!(types.content.contains("export interface Page {"));
        assert!(types.content.contains("  showInNav?: boolean;\n"));

        let client = set.of_kind(ArtifactKind::Client).next().unwrap();
        assert!(client.content.contains("getPageBySlug"));
        assert!(client.content.contains("getPagesForNavigation"));
        assert!(!client.content.contains("getPublishedPages"));

        assert_eq!(set.of_kind(ArtifactKind::Route).count(), 2);
        assert!(set.iter().all(|a| is_generated(&a.content)));
    }

    #[test]
    fn emission_is_deterministic() {
        let extractor = MetadataExtractor::default();
        let mut registry = SchemaRegistry::new();
        registry
            .insert(extractor.extract(PAGES, "Pages.ts").unwrap().into_schema().unwrap())
            .unwrap();

        let ctx = EmitContext::default();
        let a: Vec<_> = emit_all(&registry, &ctx, &EmitTarget::ALL).unwrap().into_iter().collect();
        let b: Vec<_> = emit_all(&registry, &ctx, &EmitTarget::ALL).unwrap().into_iter().collect();
        assert_eq!(a, b);
    }
}
