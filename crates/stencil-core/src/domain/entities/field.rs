use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Tag used when a field declares no `type:` within the scan windows.
pub const GENERIC_PRIMITIVE: &str = "text";

/// One declared field of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Open-ended kind tag (`text`, `select`, `relationship`, ...).
    #[serde(rename = "type")]
    pub primitive_type: String,
    pub required: bool,
}

impl FieldDescriptor {
    /// Create a field descriptor.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>, primitive_type: impl Into<String>, required: bool) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "FieldDescriptor name cannot be empty");

        let primitive_type = primitive_type.into();
        let primitive_type = if primitive_type.is_empty() {
            GENERIC_PRIMITIVE.to_string()
        } else {
            primitive_type
        };

        Self {
            name,
            primitive_type,
            required,
        }
    }

    /// Field with the generic primitive tag.
    pub fn generic(name: impl Into<String>) -> Self {
        Self::new(name, GENERIC_PRIMITIVE, false)
    }
}

/// Drop repeated field names, keeping the first occurrence in place.
pub fn dedupe_fields(fields: impl IntoIterator<Item = FieldDescriptor>) -> Vec<FieldDescriptor> {
    let mut seen = HashSet::new();
    fields
        .into_iter()
        .filter(|f| seen.insert(f.name.clone()))
        .collect()
}
