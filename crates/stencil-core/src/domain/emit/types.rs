//! `types.ts`: one interface per schema plus a slug union.

use crate::domain::{
    emit::{EmitContext, property_key},
    entities::{
        artifact::{Artifact, ArtifactKind, ArtifactPath, ArtifactRoot, generated_header},
        registry::SchemaRegistry,
        schema::SchemaDescriptor,
    },
    error::DomainError,
};

pub const TYPES_FILE: &str = "types.ts";

/// Fields every stored document has; declared fields with these names are
/// not repeated.
const SYSTEM_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

pub fn emit(registry: &SchemaRegistry, ctx: &EmitContext) -> Result<Artifact, DomainError> {
    Ok(Artifact {
        root: ArtifactRoot::Output,
        path: ArtifactPath::try_new(TYPES_FILE)?,
        kind: ArtifactKind::Types,
        content: render(registry, ctx),
        source_name: None,
    })
}

/// Full text of `types.ts`.
pub fn render(registry: &SchemaRegistry, ctx: &EmitContext) -> String {
    let mut out = generated_header(None);
    out.push('\n');

    out.push_str(&format!("export type CollectionSlug = {};\n", slug_union(registry)));

    if !registry.iter().any(|s| s.type_name() == "Media") {
        out.push_str(
            "\nexport interface Media {\n  id: string;\n  url?: string;\n  alt?: string;\n}\n",
        );
    }

    for schema in registry {
        out.push('\n');
        out.push_str(&interface(schema, ctx));
    }

    out.push_str("\nexport interface Collections {\n");
    for schema in registry {
        out.push_str(&format!(
            "  {}: {};\n",
            property_key(schema.identifier()),
            schema.type_name()
        ));
    }
    out.push_str("}\n");

    out
}

/// `export interface <TypeName> { ... }` for one schema.
pub fn interface(schema: &SchemaDescriptor, ctx: &EmitContext) -> String {
    let mut out = format!("export interface {} {{\n", schema.type_name());
    out.push_str("  id: string;\n");

    for field in schema.fields() {
        if SYSTEM_FIELDS.contains(&field.name.as_str()) {
            continue;
        }
        let optional = if field.required { "" } else { "?" };
        out.push_str(&format!(
            "  {}{optional}: {};\n",
            property_key(&field.name),
            ctx.mapper.map(&field.primitive_type, &field.name)
        ));
    }

    out.push_str("  createdAt: string;\n");
    out.push_str("  updatedAt: string;\n");
    out.push_str("}\n");
    out
}

fn slug_union(registry: &SchemaRegistry) -> String {
    if registry.is_empty() {
        return "never".into();
    }
    registry
        .identifiers()
        .map(|id| format!("'{id}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{conventions::FieldRoles, entities::field::FieldDescriptor};

    fn posts() -> SchemaDescriptor {
        SchemaDescriptor::new(
            "posts",
            Some("title"),
            "Posts.ts",
            vec![
                FieldDescriptor::new("title", "text", true),
                FieldDescriptor::new("slug", "text", false),
                FieldDescriptor::new("status", "select", false),
                FieldDescriptor::new("hero-image", "upload", false),
                FieldDescriptor::new("id", "text", true),
            ],
            true,
            &FieldRoles::default(),
        )
    }

    #[test]
    fn interface_maps_fields() {
        let out = interface(&posts(), &EmitContext::default());

        assert!(out.starts_with("export interface Post {\n  id: string;\n"));
        assert!(out.contains("  title: string;\n"));
        assert!(out.contains("  slug?: string;\n"));
        assert!(out.contains("  status?: 'draft' | 'published';\n"));
        assert!(out.contains("  'hero-image'?: Media | string;\n"));
        assert_eq!(out.matches("id: string").count(), 1);
        assert!(out.ends_with("  updatedAt: string;\n}\n"));
    }

    #[test]
    fn render_lists_every_slug() {
        let mut registry = SchemaRegistry::new();
        registry.insert(posts()).unwrap();
        registry
            .insert(SchemaDescriptor::new(
                "blog-posts",
                None,
                "BlogPosts.ts",
                vec![],
                false,
                &FieldRoles::default(),
            ))
            .unwrap();

        let out = render(&registry, &EmitContext::default());

        assert!(out.contains("export type CollectionSlug = 'posts' | 'blog-posts';"));
        assert!(out.contains("export interface BlogPost {"));
        assert!(out.contains("  'blog-posts': BlogPost;\n"));
        assert!(out.contains("export interface Media {"));
    }

    #[test]
    fn empty_registry_renders_never_union() {
        let out = render(&SchemaRegistry::new(), &EmitContext::default());
        assert!(out.contains("export type CollectionSlug = never;"));
        assert!(out.contains("export interface Collections {\n}\n"));
    }

    #[test]
    fn media_collection_replaces_fallback_interface() {
        let mut registry = SchemaRegistry::new();
        registry
            .insert(SchemaDescriptor::new(
                "media",
                None,
                "Media.ts",
                vec![FieldDescriptor::new("alt", "text", true)],
                true,
                &FieldRoles::default(),
            ))
            .unwrap();

        let out = render(&registry, &EmitContext::default());
        assert_eq!(out.matches("export interface Media {").count(), 1);
        assert!(out.contains("  alt: string;\n"));
    }
}
