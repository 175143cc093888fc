//! Heuristic metadata extraction from collection config text.
//!
//! This is a pattern scanner, not a parser. It looks for `key: 'value'`
//! shaped tokens and never builds a syntax tree:
//!
//! | Marker                 | Meaning                                    |
//! |------------------------|--------------------------------------------|
//! | `slug: '…'`            | schema identifier (first occurrence)       |
//! | `useAsTitle: '…'`      | title reference (first occurrence)         |
//! | `name: '…'`            | one field declaration (every occurrence)   |
//! | `type: '…'`            | field kind, searched after a `name:`       |
//! | `required: true`       | field is required, searched after a `name:`|
//! | `read: () => true`     | public read access                         |
//!
//! Type and required markers are searched in byte windows that start right
//! after each `name:` match (see [`ScanWindows`]). When declarations are
//! short, a window can reach into the next field and pick up its
//! `required: true`. That misattribution is a known, accepted limitation;
//! changing it would change output for existing inputs.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    conventions::{Conventions, ScanWindows},
    entities::{
        field::{FieldDescriptor, GENERIC_PRIMITIVE},
        schema::SchemaDescriptor,
    },
    error::DomainError,
};

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bslug\s*:\s*['"`]([^'"`]*)['"`]"#).unwrap());
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\buseAsTitle\s*:\s*['"`]([^'"`]*)['"`]"#).unwrap());
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bname\s*:\s*['"`]([^'"`]+)['"`]"#).unwrap());
static TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\btype\s*:\s*['"`]([^'"`]+)['"`]"#).unwrap());
static REQUIRED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brequired\s*:\s*true\b").unwrap());
static PUBLIC_READ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bread\s*:\s*\(\s*\)\s*=>\s*true\b").unwrap());

/// Outcome of scanning one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Schema(SchemaDescriptor),
    /// No identifier marker: an index/barrel file or unrelated module.
    NotASchema,
}

impl Extraction {
    pub fn into_schema(self) -> Option<SchemaDescriptor> {
        match self {
            Extraction::Schema(schema) => Some(schema),
            Extraction::NotASchema => None,
        }
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Extraction::Schema(_))
    }
}

/// Turns raw config text into a [`SchemaDescriptor`].
///
/// Holds no mutable state; one extractor can scan any number of documents,
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor {
    conventions: Conventions,
}

impl MetadataExtractor {
    pub fn new(conventions: Conventions) -> Self {
        Self { conventions }
    }

    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    /// Scan `text` from document `source_name`.
    ///
    /// A missing identifier marker is [`Extraction::NotASchema`], not an
    /// error. An identifier that is not a slug is an error, since it names
    /// route directories.
    pub fn extract(&self, text: &str, source_name: &str) -> Result<Extraction, DomainError> {
        let Some(identifier) = first_capture(&IDENTIFIER_RE, text) else {
            return Ok(Extraction::NotASchema);
        };

        if !is_slug(identifier) {
            return Err(DomainError::InvalidIdentifier {
                source_name: source_name.to_string(),
                value: identifier.to_string(),
            });
        }

        let title_reference = first_capture(&TITLE_RE, text);
        let fields = extract_fields(text, self.conventions.windows);
        let is_public = PUBLIC_READ_RE.is_match(text);

        Ok(Extraction::Schema(SchemaDescriptor::new(
            identifier,
            title_reference,
            source_name,
            fields,
            is_public,
            &self.conventions.fields,
        )))
    }
}

/// Every `name:` declaration with its windowed type and required markers.
///
/// Duplicates are kept here; [`SchemaDescriptor::new`] removes them.
pub fn extract_fields(text: &str, windows: ScanWindows) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();

    for captures in NAME_RE.captures_iter(text) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let after = whole.end();

        let primitive = match first_capture(&TYPE_RE, window(text, after, windows.type_window)) {
            Some(tag) => tag,
            None => first_capture(&TYPE_RE, window(text, after, windows.type_fallback_window))
                .unwrap_or(GENERIC_PRIMITIVE),
        };
        let required = REQUIRED_RE.is_match(window(text, after, windows.required_window));

        fields.push(FieldDescriptor::new(name.as_str(), primitive, required));
    }

    fields
}

/// Starts with `a-z`, continues with `a-z`, `0-9`, `-` or `_`.
fn is_slug(value: &str) -> bool {
    value.as_bytes().first().is_some_and(u8::is_ascii_lowercase)
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Up to `len` bytes of `text` starting at `start`, shortened to the
/// nearest character boundary. Empty when `start` is past the end.
fn window(text: &str, start: usize, len: usize) -> &str {
    let mut end = start.saturating_add(len).min(text.len());
    while end > start && !text.is_char_boundary(end) {
        end -= 1;
    }
    text.get(start..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS: &str = r#"
import type { CollectionConfig } from 'payload'

export const Posts: CollectionConfig = {
  slug: 'posts',
  admin: {
    useAsTitle: 'title',
  },
  access: {
    read: () => true,
  },
  fields: [
    {
      name: 'title',
      type: 'text',
      required: true,
    },
    {
      name: 'slug',
      type: 'text',
      index: true,
      admin: { position: 'sidebar', description: 'Used in the URL of the published post' },
    },
    {
      name: 'status',
      type: 'select',
      options: ['draft', 'published'],
      defaultValue: 'draft',
    },
  ],
}
"#;

    fn extract(text: &str) -> Extraction {
        MetadataExtractor::default().extract(text, "Posts.ts").unwrap()
    }

    #[test]
    fn extracts_posts_collection() {
        let schema = extract(POSTS).into_schema().expect("posts is a schema");

        assert_eq!(schema.identifier(), "posts");
        assert_eq!(schema.display_name(), "Posts");
        assert_eq!(schema.source_name(), "Posts.ts");
        assert!(schema.is_public());

        let caps = schema.capabilities();
        assert!(caps.has_slug);
        assert!(caps.has_status);
        assert!(!caps.has_navigation);

        let fields = schema.fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], FieldDescriptor::new("title", "text", true));
        assert_eq!(fields[1], FieldDescriptor::new("slug", "text", false));
        assert_eq!(fields[2], FieldDescriptor::new("status", "select", false));
    }

    #[test]
    fn document_without_identifier_is_skipped() {
        let barrel = "export * from './Posts'\nexport * from './Pages'\n";
        assert_eq!(extract(barrel), Extraction::NotASchema);
        assert_eq!(extract(""), Extraction::NotASchema);
    }

    #[test]
    fn identifier_is_taken_verbatim() {
        let schema = extract("slug: \"case-studies\", fields: []")
            .into_schema()
            .unwrap();
        assert_eq!(schema.identifier(), "case-studies");
        assert_eq!(schema.display_name(), "Case Studies");
    }

    #[test]
    fn empty_identifier_is_an_error() {
        let result = MetadataExtractor::default().extract("slug: '',", "Broken.ts");
        assert!(matches!(
            result,
            Err(DomainError::InvalidIdentifier { source_name, .. }) if source_name == "Broken.ts"
        ));
    }

    #[test]
    fn whitespace_in_identifier_is_an_error() {
        let result = MetadataExtractor::default().extract("slug: 'blog posts',", "Broken.ts");
        assert!(result.is_err());
    }

    #[test]
    fn path_like_identifiers_are_errors() {
        let extractor = MetadataExtractor::default();
        for value in ["/abs", "posts/", "../../escape", "a\\b", "v1.2", "Posts", "2024"] {
            let text = format!("slug: '{value}', fields: []");
            assert!(
                matches!(
                    extractor.extract(&text, "Bad.ts"),
                    Err(DomainError::InvalidIdentifier { value: v, .. }) if v == value
                ),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn slug_alphabet_is_accepted() {
        let schema = extract("slug: 'case_studies-2024', fields: []")
            .into_schema()
            .unwrap();
        assert_eq!(schema.identifier(), "case_studies-2024");
    }

    #[test]
    fn extraction_is_idempotent() {
        assert_eq!(extract(POSTS), extract(POSTS));
    }

    #[test]
    fn non_title_reference_names_schema() {
        let text = "slug: 'team', admin: { useAsTitle: 'fullName' }, fields: []";
        let schema = extract(text).into_schema().unwrap();
        assert_eq!(schema.display_name(), "FullName");
    }

    #[test]
    fn missing_type_defaults_to_generic() {
        let text = format!("slug: 'notes', fields: [{{ name: 'body' }}]{}", " ".repeat(500));
        let schema = extract(&text).into_schema().unwrap();
        assert_eq!(schema.fields()[0].primitive_type, GENERIC_PRIMITIVE);
    }

    #[test]
    fn type_found_in_fallback_window() {
        let padding = "x".repeat(200);
        let text = format!("slug: 'notes', fields: [{{ name: 'body', admin: '{padding}', type: 'textarea' }}]");
        let schema = extract(&text).into_schema().unwrap();
        assert_eq!(schema.fields()[0].primitive_type, "textarea");
    }

    #[test]
    fn required_outside_window_is_ignored() {
        let padding = "x".repeat(250);
        let text = format!(
            "slug: 'notes', fields: [{{ name: 'body', type: 'text', admin: '{padding}', required: true }}]"
        );
        let schema = extract(&text).into_schema().unwrap();
        assert!(!schema.fields()[0].required);
    }

    #[test]
    fn required_can_leak_from_adjacent_short_field() {
        // Accepted limitation: the window after `a` reaches `b`'s marker.
        let text = "slug: 'x', fields: [{ name: 'a', type: 'text' }, { name: 'b', type: 'text', required: true }]";
        let schema = extract(text).into_schema().unwrap();
        assert!(schema.field("a").unwrap().required);
        assert!(schema.field("b").unwrap().required);
    }

    #[test]
    fn duplicate_fields_keep_first_declaration() {
        let padding = " ".repeat(300);
        let text = format!(
            "slug: 'posts', fields: [{{ name: 'tags', type: 'relationship', required: true }},{padding}{{ name: 'tags', type: 'text' }}]"
        );
        let schema = extract(&text).into_schema().unwrap();
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(
            schema.fields()[0],
            FieldDescriptor::new("tags", "relationship", true)
        );
    }

    #[test]
    fn private_collection_is_not_public() {
        let text = "slug: 'users', access: { read: ({ req }) => Boolean(req.user) }, fields: []";
        assert!(!extract(text).into_schema().unwrap().is_public());
    }

    #[test]
    fn role_overrides_drive_capabilities() {
        let mut conventions = Conventions::default();
        conventions.fields.navigation = "inMenu".into();
        let extractor = MetadataExtractor::new(conventions);

        let text = "slug: 'pages', fields: [{ name: 'inMenu', type: 'checkbox' }]";
        let schema = extractor.extract(text, "Pages.ts").unwrap().into_schema().unwrap();
        assert!(schema.capabilities().has_navigation);
    }

    #[test]
    fn windows_respect_char_boundaries() {
        let text = "slug: 'x', fields: [{ name: 'émoji', label: '🎉🎉🎉' }]";
        let windows = ScanWindows {
            // `, label: '` is 10 bytes; each window ends inside an emoji.
            type_window: 11,
            type_fallback_window: 13,
            required_window: 12,
        };
        let fields = extract_fields(text, windows);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "émoji");
        assert_eq!(fields[0].primitive_type, GENERIC_PRIMITIVE);
    }

    #[test]
    fn window_clamps_to_document_end() {
        assert_eq!(window("abc", 1, 100), "bc");
        assert_eq!(window("abc", 3, 10), "");
        assert_eq!(window("abc", 7, 10), "");
    }
}
