use serde::Serialize;

use crate::domain::{
    conventions::{FieldRole, FieldRoles},
    entities::field::{FieldDescriptor, dedupe_fields},
    inflection::{display_name_from_slug, pascal_case, pluralize, singularize},
};

/// Title reference value that is ignored when naming a schema.
const TITLE_LITERAL: &str = "title";

/// Derived booleans: one per [`FieldRole`], true iff a field with the
/// role's configured name exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub has_slug: bool,
    pub has_status: bool,
    pub has_seo: bool,
    pub has_navigation: bool,
    pub has_featured_image: bool,
    pub has_excerpt: bool,
    pub has_tags: bool,
    pub has_author: bool,
}

impl Capabilities {
    /// Compute flags for `fields` under `roles`.
    pub fn from_fields(fields: &[FieldDescriptor], roles: &FieldRoles) -> Self {
        let has = |role: FieldRole| {
            let name = roles.name_for(role);
            fields.iter().any(|f| f.name == name)
        };

        Self {
            has_slug: has(FieldRole::Slug),
            has_status: has(FieldRole::Status),
            has_seo: has(FieldRole::Seo),
            has_navigation: has(FieldRole::Navigation),
            has_featured_image: has(FieldRole::FeaturedImage),
            has_excerpt: has(FieldRole::Excerpt),
            has_tags: has(FieldRole::Tags),
            has_author: has(FieldRole::Author),
        }
    }

    pub fn has(&self, role: FieldRole) -> bool {
        match role {
            FieldRole::Slug => self.has_slug,
            FieldRole::Status => self.has_status,
            FieldRole::Seo => self.has_seo,
            FieldRole::Navigation => self.has_navigation,
            FieldRole::FeaturedImage => self.has_featured_image,
            FieldRole::Excerpt => self.has_excerpt,
            FieldRole::Tags => self.has_tags,
            FieldRole::Author => self.has_author,
        }
    }

    /// Roles whose flag is set, in [`FieldRole::ALL`] order.
    pub fn roles(&self) -> Vec<FieldRole> {
        FieldRole::ALL
            .into_iter()
            .filter(|r| self.has(*r))
            .collect()
    }
}

/// One extracted schema definition.
///
/// Immutable after construction: derived names and capability flags are
/// computed in [`SchemaDescriptor::new`] and there are no setters, so flags
/// cannot drift from `fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDescriptor {
    identifier: String,
    display_name: String,
    plural_display_name: String,
    title_field: Option<String>,
    source_name: String,
    fields: Vec<FieldDescriptor>,
    capabilities: Capabilities,
    is_public: bool,
}

impl SchemaDescriptor {
    pub fn new(
        identifier: impl Into<String>,
        title_reference: Option<&str>,
        source_name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        is_public: bool,
        roles: &FieldRoles,
    ) -> Self {
        let identifier = identifier.into();
        let display_name = derive_display_name(&identifier, title_reference);
        let plural_display_name = pluralize(&display_name);
        let fields = dedupe_fields(fields);
        let capabilities = Capabilities::from_fields(&fields, roles);

        Self {
            identifier,
            display_name,
            plural_display_name,
            title_field: title_reference
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            source_name: source_name.into(),
            fields,
            capabilities,
            is_public,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn plural_display_name(&self) -> &str {
        &self.plural_display_name
    }

    /// Field named by the title reference, if the document declared one.
    pub fn title_field(&self) -> Option<&str> {
        self.title_field.as_deref()
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// Singular PascalCase name for the emitted interface: `blog-posts` →
    /// `BlogPost`.
    ///
    /// Derived from the identifier, never the title reference, so two
    /// schemas titled by the same field still get distinct types.
    pub fn type_name(&self) -> String {
        pascal_case(&singularize(&display_name_from_slug(&self.identifier)))
    }

    /// Plural PascalCase name used in method names: `blog-posts` →
    /// `BlogPosts`.
    pub fn plural_type_name(&self) -> String {
        pascal_case(&pluralize(&singularize(&display_name_from_slug(
            &self.identifier,
        ))))
    }
}

/// Display name from the title reference, or from the slug when the
/// reference is missing or is the literal `title`.
fn derive_display_name(identifier: &str, title_reference: Option<&str>) -> String {
    match title_reference {
        Some(reference) if reference != TITLE_LITERAL && !reference.is_empty() => {
            display_name_from_slug(reference)
        }
        _ => display_name_from_slug(identifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(fields: Vec<FieldDescriptor>) -> SchemaDescriptor {
        SchemaDescriptor::new(
            "posts",
            Some("title"),
            "Posts.ts",
            fields,
            false,
            &FieldRoles::default(),
        )
    }

    #[test]
    fn title_literal_reference_falls_back_to_slug() {
        let schema = descriptor(vec![]);
        assert_eq!(schema.display_name(), "Posts");
        assert_eq!(schema.plural_display_name(), "Posts");
    }

    #[test]
    fn non_title_reference_names_the_schema() {
        let schema = SchemaDescriptor::new(
            "team",
            Some("name"),
            "Team.ts",
            vec![],
            false,
            &FieldRoles::default(),
        );
        assert_eq!(schema.display_name(), "Name");
        assert_eq!(schema.title_field(), Some("name"));
        assert_eq!(schema.type_name(), "Team");
    }

    #[test]
    fn shared_title_reference_keeps_type_names_apart() {
        let named = |identifier: &str| {
            SchemaDescriptor::new(
                identifier,
                Some("name"),
                "Doc.ts",
                vec![],
                false,
                &FieldRoles::default(),
            )
        };
        let authors = named("authors");
        let categories = named("categories");

        assert_eq!(authors.display_name(), categories.display_name());
        assert_eq!(authors.type_name(), "Author");
        assert_eq!(categories.type_name(), "Category");
        assert_eq!(authors.plural_type_name(), "Authors");
        assert_eq!(categories.plural_type_name(), "Categories");
    }

    #[test]
    fn singular_slug_still_pluralizes_methods() {
        let schema = SchemaDescriptor::new(
            "media",
            None,
            "Media.ts",
            vec![],
            false,
            &FieldRoles::default(),
        );
        assert_eq!(schema.type_name(), "Media");
        assert_eq!(schema.plural_type_name(), "Media");
    }

    #[test]
    fn missing_reference_uses_slug() {
        let schema = SchemaDescriptor::new(
            "blog-posts",
            None,
            "BlogPosts.ts",
            vec![],
            false,
            &FieldRoles::default(),
        );
        assert_eq!(schema.display_name(), "Blog Posts");
        assert_eq!(schema.type_name(), "BlogPost");
        assert_eq!(schema.plural_display_name(), "Blog Posts");
        assert_eq!(schema.plural_type_name(), "BlogPosts");
    }

    #[test]
    fn type_names_for_irregulars() {
        let schema = descriptor(vec![]);
        assert_eq!(schema.type_name(), "Post");
        assert_eq!(schema.plural_type_name(), "Posts");
    }

    #[test]
    fn capabilities_follow_fields() {
        let schema = descriptor(vec![
            FieldDescriptor::new("slug", "text", false),
            FieldDescriptor::new("status", "select", false),
            FieldDescriptor::new("tags", "relationship", false),
        ]);

        let caps = schema.capabilities();
        assert!(caps.has_slug);
        assert!(caps.has_status);
        assert!(caps.has_tags);
        assert!(!caps.has_author);
        assert_eq!(
            caps.roles(),
            vec![FieldRole::Slug, FieldRole::Status, FieldRole::Tags]
        );
    }

    #[test]
    fn capabilities_consult_role_overrides() {
        let roles = FieldRoles {
            slug: "permalink".into(),
            ..FieldRoles::default()
        };
        let fields = vec![FieldDescriptor::generic("slug")];

        assert!(!Capabilities::from_fields(&fields, &roles).has_slug);
        assert!(
            Capabilities::from_fields(&[FieldDescriptor::generic("permalink")], &roles).has_slug
        );
    }

    #[test]
    fn fields_are_deduplicated_on_construction() {
        let schema = descriptor(vec![
            FieldDescriptor::new("tags", "relationship", true),
            FieldDescriptor::new("tags", "text", false),
        ]);
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(schema.field("tags").map(|f| f.required), Some(true));
    }
}
