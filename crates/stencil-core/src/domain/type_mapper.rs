//! Primitive field tag → TypeScript type signature.
//!
//! The mapping is data: an ordered override list checked first, then a
//! lookup table keyed by primitive tag, then a fallback. Adding a tag or a
//! name-based special case means adding a row.

use crate::domain::conventions::Conventions;

/// Signature used for relation-like, structured, and unknown tags.
pub const OPEN_SIGNATURE: &str = "any";

/// Signature for string-like fields.
pub const STRING_SIGNATURE: &str = "string";

const LAYOUT_VARIANTS: &str = "'default' | 'full-width' | 'sidebar'";

const GENERAL_TABLE: &[(&str, &str)] = &[
    ("text", STRING_SIGNATURE),
    ("textarea", STRING_SIGNATURE),
    ("email", STRING_SIGNATURE),
    ("code", STRING_SIGNATURE),
    ("date", STRING_SIGNATURE),
    ("radio", STRING_SIGNATURE),
    ("point", "[number, number]"),
    ("select", STRING_SIGNATURE),
    ("number", "number"),
    ("checkbox", "boolean"),
    ("relationship", OPEN_SIGNATURE),
    ("group", OPEN_SIGNATURE),
    ("array", OPEN_SIGNATURE),
    ("blocks", OPEN_SIGNATURE),
    ("richText", OPEN_SIGNATURE),
    ("json", OPEN_SIGNATURE),
    ("upload", "Media | string"),
];

/// Which fields an override applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPredicate {
    /// Exact field name and exact primitive tag.
    NameAndType { name: String, primitive: String },
    /// Field name contains the needle, any primitive tag.
    NameContains(String),
}

impl FieldPredicate {
    pub fn matches(&self, primitive: &str, name: &str) -> bool {
        match self {
            FieldPredicate::NameAndType {
                name: expected,
                primitive: tag,
            } => name == expected && primitive == tag,
            FieldPredicate::NameContains(needle) => name.contains(needle.as_str()),
        }
    }
}

/// A name-based special case that wins over the general table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOverride {
    pub predicate: FieldPredicate,
    pub signature: String,
}

/// Total mapping from `(primitive, field name)` to a type signature.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    overrides: Vec<TypeOverride>,
}

impl TypeMapper {
    /// Build the mapper with the standard override list for `conventions`.
    ///
    /// The status union uses the configured draft/published literals and
    /// the configured status field name. Once the status role is renamed, a
    /// field literally called `status` is an ordinary select.
    pub fn new(conventions: &Conventions) -> Self {
        let status_union = format!(
            "'{}' | '{}'",
            conventions.status.draft, conventions.status.published
        );

        let overrides = vec![
            TypeOverride {
                predicate: FieldPredicate::NameAndType {
                    name: conventions.fields.status.clone(),
                    primitive: "select".into(),
                },
                signature: status_union,
            },
            TypeOverride {
                predicate: FieldPredicate::NameAndType {
                    name: "template".into(),
                    primitive: "select".into(),
                },
                signature: LAYOUT_VARIANTS.into(),
            },
            TypeOverride {
                predicate: FieldPredicate::NameContains("slug".into()),
                signature: STRING_SIGNATURE.into(),
            },
        ];

        Self { overrides }
    }

    /// Append an override after the built-in ones.
    pub fn with_override(mut self, predicate: FieldPredicate, signature: impl Into<String>) -> Self {
        self.overrides.push(TypeOverride {
            predicate,
            signature: signature.into(),
        });
        self
    }

    pub fn overrides(&self) -> &[TypeOverride] {
        &self.overrides
    }

    /// Map a field to its signature. Never fails.
    pub fn map(&self, primitive: &str, name: &str) -> String {
        if let Some(found) = self
            .overrides
            .iter()
            .find(|o| o.predicate.matches(primitive, name))
        {
            return found.signature.clone();
        }

        GENERAL_TABLE
            .iter()
            .find(|(tag, _)| *tag == primitive)
            .map_or(OPEN_SIGNATURE, |(_, signature)| *signature)
            .to_string()
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new(&Conventions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_table_lookups() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.map("text", "title"), "string");
        assert_eq!(mapper.map("number", "price"), "number");
        assert_eq!(mapper.map("checkbox", "showInNav"), "boolean");
        assert_eq!(mapper.map("relationship", "author"), "any");
        assert_eq!(mapper.map("upload", "featuredImage"), "Media | string");
    }

    #[test]
    fn status_select_maps_to_lifecycle_union() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.map("select", "status"), "'draft' | 'published'");
        // Without the override a select is a plain string.
        assert_eq!(mapper.map("select", "category"), "string");
    }

    #[test]
    fn status_with_other_type_uses_general_table() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.map("text", "status"), "string");
    }

    #[test]
    fn template_select_maps_to_layout_union() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.map("select", "template"), LAYOUT_VARIANTS);
    }

    #[test]
    fn slug_names_are_strings_regardless_of_type() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.map("json", "slug"), "string");
        assert_eq!(mapper.map("relationship", "parentSlug"), "string");
    }

    #[test]
    fn unknown_tags_are_open() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.map("collapsible", "layout"), OPEN_SIGNATURE);
        assert_eq!(mapper.map("", ""), OPEN_SIGNATURE);
    }

    #[test]
    fn configured_status_literals_flow_into_union() {
        let mut conventions = Conventions::default();
        conventions.fields.status = "state".into();
        conventions.status.draft = "wip".into();
        conventions.status.published = "live".into();

        let mapper = TypeMapper::new(&conventions);
        assert_eq!(mapper.map("select", "state"), "'wip' | 'live'");
    }

    #[test]
    fn renamed_status_role_releases_the_literal_name() {
        let mut conventions = Conventions::default();
        conventions.fields.status = "state".into();
        let mapper = TypeMapper::new(&conventions);

        assert_eq!(mapper.map("select", "state"), "'draft' | 'published'");
        assert_eq!(mapper.map("select", "status"), "string");
        assert_eq!(
            TypeMapper::default().map("select", "status"),
            "'draft' | 'published'"
        );
    }

    #[test]
    fn appended_overrides_are_checked_after_builtins() {
        let mapper = TypeMapper::default().with_override(
            FieldPredicate::NameContains("Count".into()),
            "number",
        );
        assert_eq!(mapper.map("text", "viewCount"), "number");
        assert_eq!(mapper.map("select", "status"), "'draft' | 'published'");
    }

    #[test]
    fn every_pair_yields_a_signature() {
        let mapper = TypeMapper::default();
        for (tag, _) in GENERAL_TABLE {
            for name in ["status", "template", "slug", "title", ""] {
                assert!(!mapper.map(tag, name).is_empty());
            }
        }
    }
}
