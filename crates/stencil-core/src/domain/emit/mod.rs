//! TypeScript emitters.
//!
//! Every emitter is a pure function from a [`SchemaRegistry`] to
//! [`Artifact`]s. An empty registry still produces valid files.

pub mod client;
pub mod routes;
pub mod types;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    conventions::Conventions,
    entities::{artifact::ArtifactSet, registry::SchemaRegistry},
    error::DomainError,
    type_mapper::TypeMapper,
};

/// Module specifier route files use to import the generated client.
pub const DEFAULT_CLIENT_MODULE: &str = "@/generated/client";

/// Which artifact families to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitTarget {
    Types,
    Client,
    Routes,
}

impl EmitTarget {
    pub const ALL: [EmitTarget; 3] = [EmitTarget::Types, EmitTarget::Client, EmitTarget::Routes];

    pub const fn as_str(self) -> &'static str {
        match self {
            EmitTarget::Types => "types",
            EmitTarget::Client => "client",
            EmitTarget::Routes => "routes",
        }
    }
}

impl fmt::Display for EmitTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmitTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "types" => Ok(EmitTarget::Types),
            "client" => Ok(EmitTarget::Client),
            "routes" => Ok(EmitTarget::Routes),
            other => Err(format!("unknown emit target '{other}'")),
        }
    }
}

/// Shared inputs for all emitters.
#[derive(Debug, Clone)]
pub struct EmitContext {
    pub conventions: Conventions,
    pub mapper: TypeMapper,
    pub client_module: String,
}

impl EmitContext {
    pub fn new(conventions: Conventions) -> Self {
        let mapper = TypeMapper::new(&conventions);
        Self {
            conventions,
            mapper,
            client_module: DEFAULT_CLIENT_MODULE.into(),
        }
    }

    pub fn with_client_module(mut self, module: impl Into<String>) -> Self {
        self.client_module = module.into();
        self
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new(Conventions::default())
    }
}

/// Emit `targets` for `registry` and validate the result.
pub fn emit_all(
    registry: &SchemaRegistry,
    ctx: &EmitContext,
    targets: &[EmitTarget],
) -> Result<ArtifactSet, DomainError> {
    let mut set = ArtifactSet::new();

    for target in EmitTarget::ALL {
        if !targets.contains(&target) {
            continue;
        }
        match target {
            EmitTarget::Types => set.push(types::emit(registry, ctx)?),
            EmitTarget::Client => set.push(client::emit(registry, ctx)?),
            EmitTarget::Routes => set.extend(routes::emit(registry, ctx)?),
        }
    }

    set.validate()?;
    Ok(set)
}

/// `name` as a TypeScript property key, quoted when it is not a plain
/// identifier.
pub(crate) fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "\\'"))
    }
}

/// `value.name` or `value['name']` depending on `name`.
pub(crate) fn property_access(value: &str, name: &str) -> String {
    let key = property_key(name);
    if key.starts_with('\'') {
        format!("{value}[{key}]")
    } else {
        format!("{value}.{key}")
    }
}
