//! Route scaffolds for publicly readable schemas.
//!
//! Each public schema gets `<slug>/page.tsx`; schemas with a slug field also
//! get `<slug>/[slug]/page.tsx`. Paths are relative to the routes root.

use std::path::PathBuf;

use crate::domain::{
    emit::{
        EmitContext,
        client::{MethodKind, method_name},
        property_access,
    },
    entities::{
        artifact::{Artifact, ArtifactKind, ArtifactPath, ArtifactRoot, generated_header},
        registry::SchemaRegistry,
        schema::SchemaDescriptor,
    },
    error::DomainError,
};

pub const PAGE_FILE: &str = "page.tsx";
pub const DETAIL_SEGMENT: &str = "[slug]";

pub fn emit(registry: &SchemaRegistry, ctx: &EmitContext) -> Result<Vec<Artifact>, DomainError> {
    let mut out = Vec::new();

    for schema in registry.iter().filter(|s| s.is_public()) {
        let base = PathBuf::from(schema.identifier());

        out.push(route(
            schema,
            base.join(PAGE_FILE),
            list_page(schema, ctx),
        )?);

        if schema.capabilities().has_slug {
            out.push(route(
                schema,
                base.join(DETAIL_SEGMENT).join(PAGE_FILE),
                detail_page(schema, ctx),
            )?);
        }
    }

    Ok(out)
}

fn route(
    schema: &SchemaDescriptor,
    path: PathBuf,
    content: String,
) -> Result<Artifact, DomainError> {
    Ok(Artifact {
        root: ArtifactRoot::Routes,
        path: ArtifactPath::try_new(path)?,
        kind: ArtifactKind::Route,
        content,
        source_name: Some(schema.source_name().to_string()),
    })
}

/// Listing page. Uses the published-only query when the schema has a
/// status field.
pub fn list_page(schema: &SchemaDescriptor, ctx: &EmitContext) -> String {
    let caps = schema.capabilities();
    let fetch = if caps.has_status {
        method_name(schema, MethodKind::Published)
    } else {
        method_name(schema, MethodKind::List)
    };
    let component = format!("{}Page", schema.plural_type_name());
    let label = label_expr(schema, "item");

    let entry = if caps.has_slug {
        let slug = property_access("item", &ctx.conventions.fields.slug);
        format!(
            "          <li key={{item.id}}>\n            \
             <Link href={{`/{id}/${{{slug}}}`}}>{{{label}}}</Link>\n          </li>\n",
            id = schema.identifier(),
        )
    } else {
        format!("          <li key={{item.id}}>{{{label}}}</li>\n")
    };
    let link_import = if caps.has_slug {
        "import Link from 'next/link';\n"
    } else {
        ""
    };

    let mut out = generated_header(Some(schema.source_name()));
    out.push('\n');
    out.push_str(link_import);
    out.push_str(&format!(
        "import {{ {fetch} }} from '{}';\n\n",
        ctx.client_module
    ));
    out.push_str(&format!(
        "export default async function {component}() {{\n  \
         const items = await {fetch}();\n\n  \
         return (\n    <main>\n      <h1>{title}</h1>\n      <ul>\n        \
         {{items.map((item) => (\n{entry}        ))}}\n      </ul>\n    </main>\n  );\n}}\n",
        title = schema.plural_display_name(),
    ));
    out
}

/// Detail page resolved by slug.
pub fn detail_page(schema: &SchemaDescriptor, ctx: &EmitContext) -> String {
    let fetch = method_name(schema, MethodKind::BySlug);
    let component = format!("{}Page", schema.type_name());
    let label = label_expr(schema, "item");

    let mut out = generated_header(Some(schema.source_name()));
    out.push('\n');
    out.push_str("import { notFound } from 'next/navigation';\n");
    out.push_str(&format!(
        "import {{ {fetch} }} from '{}';\n\n",
        ctx.client_module
    ));
    out.push_str("interface PageProps {\n  params: Promise<{ slug: string }>;\n}\n\n");
    out.push_str(&format!(
        "export default async function {component}({{ params }}: PageProps) {{\n  \
         const {{ slug }} = await params;\n  \
         const item = await {fetch}(slug);\n\n  \
         if (!item) {{\n    notFound();\n  }}\n\n  \
         return (\n    <article>\n      <h1>{{{label}}}</h1>\n    </article>\n  );\n}}\n"
    ));
    out
}

/// Display expression for one document: its title field when the schema
/// declares one, else its id.
fn label_expr(schema: &SchemaDescriptor, value: &str) -> String {
    match schema.title_field().filter(|t| schema.field(t).is_some()) {
        Some(title) => property_access(value, title),
        None => format!("{value}.id"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::domain::{conventions::FieldRoles, entities::field::FieldDescriptor};

    fn schema(id: &str, fields: &[&str], public: bool) -> SchemaDescriptor {
        SchemaDescriptor::new(
            id,
            Some("title"),
            format!("{id}.ts"),
            fields.iter().map(|f| FieldDescriptor::generic(*f)).collect(),
            public,
            &FieldRoles::default(),
        )
    }

    fn registry(schemas: Vec<SchemaDescriptor>) -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        for s in schemas {
            registry.insert(s).unwrap();
        }
        registry
    }

    #[test]
    fn private_schemas_get_no_routes() {
        let reg = registry(vec![schema("users", &["slug"], false)]);
        assert!(emit(&reg, &EmitContext::default()).unwrap().is_empty());
    }

    #[test]
    fn slug_field_adds_detail_route() {
        let reg = registry(vec![
            schema("posts", &["title", "slug"], true),
            schema("tags", &["title"], true),
        ]);
        let routes = emit(&reg, &EmitContext::default()).unwrap();
        let paths: Vec<_> = routes.iter().map(|a| a.path.as_path().to_path_buf()).collect();

        assert_eq!(
            paths,
            vec![
                Path::new("posts").join("page.tsx"),
                Path::new("posts").join("[slug]").join("page.tsx"),
                Path::new("tags").join("page.tsx"),
            ]
        );
        assert!(routes.iter().all(|a| a.root == ArtifactRoot::Routes));
    }

    #[test]
    fn list_page_prefers_published_query() {
        let ctx = EmitContext::default();
        let with_status = list_page(&schema("posts", &["title", "status"], true), &ctx);
        assert!(with_status.contains("import { getPublishedPosts } from '@/generated/client';"));
        assert!(with_status.contains("{item.title}"));
        assert!(!with_status.contains("next/link"));

        let plain = list_page(&schema("posts", &["slug"], true), &ctx);
        assert!(plain.contains("const items = await getPosts();"));
        assert!(plain.contains("<Link href={`/posts/${item.slug}`}>{item.id}</Link>"));
    }

    #[test]
    fn detail_page_handles_missing_document() {
        let ctx = EmitContext::default().with_client_module("../lib/client");
        let out = detail_page(&schema("posts", &["title", "slug"], true), &ctx);

        assert!(out.starts_with("// @generated by stencil"));
        assert!(out.contains("// source: posts.ts"));
        assert!(out.contains("import { getPostBySlug } from '../lib/client';"));
        assert!(out.contains("params: Promise<{ slug: string }>"));
        assert!(out.contains("notFound();"));
    }
}
