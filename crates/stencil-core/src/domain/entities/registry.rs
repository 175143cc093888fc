use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::entities::schema::SchemaDescriptor;

/// Insertion-ordered `identifier → SchemaDescriptor` map for one run.
///
/// Entries are only ever appended; a second descriptor with an identifier
/// already present is rejected and handed back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, SchemaDescriptor>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `schema` unless its identifier is already registered.
    ///
    /// Returns the rejected descriptor on conflict.
    pub fn insert(&mut self, schema: SchemaDescriptor) -> Result<(), Box<SchemaDescriptor>> {
        if self.schemas.contains_key(schema.identifier()) {
            return Err(Box::new(schema));
        }
        self.schemas.insert(schema.identifier().to_string(), schema);
        Ok(())
    }

    /// A registered schema under another identifier whose singular or plural
    /// type name equals `schema`'s, e.g. `post` against `posts`.
    pub fn type_name_conflict(&self, schema: &SchemaDescriptor) -> Option<&SchemaDescriptor> {
        let (singular, plural) = (schema.type_name(), schema.plural_type_name());
        self.iter().find(|existing| {
            existing.identifier() != schema.identifier()
                && (existing.type_name() == singular || existing.plural_type_name() == plural)
        })
    }

    pub fn get(&self, identifier: &str) -> Option<&SchemaDescriptor> {
        self.schemas.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.schemas.contains_key(identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaDescriptor> {
        self.schemas.values()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl<'a> IntoIterator for &'a SchemaRegistry {
    type Item = &'a SchemaDescriptor;
    type IntoIter = indexmap::map::Values<'a, String, SchemaDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.schemas.values()
    }
}
