//! `client.ts`: data-access functions keyed by capability flags.
//!
//! | Method                      | Emitted when    |
//! |-----------------------------|-----------------|
//! | `get<Plural>()`             | always          |
//! | `get<Singular>BySlug(slug)` | `has_slug`      |
//! | `getPublished<Plural>()`    | `has_status`    |
//! | `get<Plural>ForNavigation()`| `has_navigation`|

use crate::domain::{
    emit::{EmitContext, types::TYPES_FILE},
    entities::{
        artifact::{Artifact, ArtifactKind, ArtifactPath, ArtifactRoot, generated_header},
        registry::SchemaRegistry,
        schema::SchemaDescriptor,
    },
    error::DomainError,
};

pub const CLIENT_FILE: &str = "client.ts";

const PRELUDE: &str = r#"const API_URL = process.env.CMS_API_URL ?? 'http://localhost:3000/api';

interface ListResponse<T> {
  docs: T[];
  totalDocs: number;
}

async function fetchCollection<T>(collection: string, query = ''): Promise<T[]> {
  const response = await fetch(`${API_URL}/${collection}${query}`);
  if (!response.ok) {
    throw new Error(`Failed to fetch ${collection}: ${response.status}`);
  }
  const body = (await response.json()) as ListResponse<T>;
  return body.docs;
}
"#;

/// Kind of generated data-access function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    List,
    BySlug,
    Published,
    Navigation,
}

/// One generated function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMethod {
    pub kind: MethodKind,
    pub name: String,
    pub body: String,
}

pub fn emit(registry: &SchemaRegistry, ctx: &EmitContext) -> Result<Artifact, DomainError> {
    Ok(Artifact {
        root: ArtifactRoot::Output,
        path: ArtifactPath::try_new(CLIENT_FILE)?,
        kind: ArtifactKind::Client,
        content: render(registry, ctx),
        source_name: None,
    })
}

/// Full text of `client.ts`.
pub fn render(registry: &SchemaRegistry, ctx: &EmitContext) -> String {
    let mut out = generated_header(None);
    out.push('\n');

    if !registry.is_empty() {
        let names: Vec<String> = registry.iter().map(SchemaDescriptor::type_name).collect();
        let module = TYPES_FILE.trim_end_matches(".ts");
        out.push_str(&format!(
            "import type {{ {} }} from './{module}';\n\n",
            names.join(", ")
        ));
    }

    out.push_str(PRELUDE);

    for schema in registry {
        for method in methods(schema, ctx) {
            out.push('\n');
            out.push_str(&method.body);
        }
    }

    out
}

/// Name of the function that satisfies `kind` for `schema`.
pub fn method_name(schema: &SchemaDescriptor, kind: MethodKind) -> String {
    let plural = schema.plural_type_name();
    match kind {
        MethodKind::List => format!("get{plural}"),
        MethodKind::BySlug => format!("get{}BySlug", schema.type_name()),
        MethodKind::Published => format!("getPublished{plural}"),
        MethodKind::Navigation => format!("get{plural}ForNavigation"),
    }
}

/// Functions emitted for `schema`, in table order.
pub fn methods(schema: &SchemaDescriptor, ctx: &EmitContext) -> Vec<ClientMethod> {
    let caps = schema.capabilities();
    let roles = &ctx.conventions.fields;
    let ty = schema.type_name();
    let id = schema.identifier();

    let mut out = vec![list_method(
        MethodKind::List,
        method_name(schema, MethodKind::List),
        &ty,
        id,
        None,
    )];

    if caps.has_slug {
        let name = method_name(schema, MethodKind::BySlug);
        let body = format!(
            "export async function {name}(slug: string): Promise<{ty} | null> {{\n  \
             const docs = await fetchCollection<{ty}>('{id}', `?where[{field}][equals]=${{encodeURIComponent(slug)}}&limit=1`);\n  \
             return docs[0] ?? null;\n}}\n",
            field = roles.slug,
        );
        out.push(ClientMethod {
            kind: MethodKind::BySlug,
            name,
            body,
        });
    }

    if caps.has_status {
        let query = format!(
            "?where[{}][equals]={}",
            roles.status, ctx.conventions.status.published
        );
        out.push(list_method(
            MethodKind::Published,
            method_name(schema, MethodKind::Published),
            &ty,
            id,
            Some(&query),
        ));
    }

    if caps.has_navigation {
        let query = format!("?where[{}][equals]=true", roles.navigation);
        out.push(list_method(
            MethodKind::Navigation,
            method_name(schema, MethodKind::Navigation),
            &ty,
            id,
            Some(&query),
        ));
    }

    out
}

fn list_method(
    kind: MethodKind,
    name: String,
    ty: &str,
    collection: &str,
    query: Option<&str>,
) -> ClientMethod {
    let call = match query {
        Some(query) => format!("fetchCollection<{ty}>('{collection}', '{query}')"),
        None => format!("fetchCollection<{ty}>('{collection}')"),
    };
    let body =
        format!("export async function {name}(): Promise<{ty}[]> {{\n  return {call};\n}}\n");
    ClientMethod { kind, name, body }
}
