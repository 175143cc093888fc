//! Naming conventions consulted by the extractor, the type mapper and the
//! emitters.
//!
//! A [`Conventions`] value is passed explicitly into every component that
//! needs it. Two runs configured with different conventions never share
//! state.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Well-known field roles that drive capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Slug,
    Status,
    Seo,
    Navigation,
    FeaturedImage,
    Excerpt,
    Tags,
    Author,
}

impl FieldRole {
    pub const ALL: [FieldRole; 8] = [
        FieldRole::Slug,
        FieldRole::Status,
        FieldRole::Seo,
        FieldRole::Navigation,
        FieldRole::FeaturedImage,
        FieldRole::Excerpt,
        FieldRole::Tags,
        FieldRole::Author,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FieldRole::Slug => "slug",
            FieldRole::Status => "status",
            FieldRole::Seo => "seo",
            FieldRole::Navigation => "navigation",
            FieldRole::FeaturedImage => "featured_image",
            FieldRole::Excerpt => "excerpt",
            FieldRole::Tags => "tags",
            FieldRole::Author => "author",
        }
    }
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field names that fill each [`FieldRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRoles {
    pub slug: String,
    pub status: String,
    pub seo: String,
    pub navigation: String,
    pub featured_image: String,
    pub excerpt: String,
    pub tags: String,
    pub author: String,
}

impl Default for FieldRoles {
    fn default() -> Self {
        Self {
            slug: "slug".into(),
            status: "status".into(),
            seo: "seo".into(),
            navigation: "showInNav".into(),
            featured_image: "featuredImage".into(),
            excerpt: "excerpt".into(),
            tags: "tags".into(),
            author: "author".into(),
        }
    }
}

impl FieldRoles {
    /// The field name configured for `role`.
    pub fn name_for(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Slug => &self.slug,
            FieldRole::Status => &self.status,
            FieldRole::Seo => &self.seo,
            FieldRole::Navigation => &self.navigation,
            FieldRole::FeaturedImage => &self.featured_image,
            FieldRole::Excerpt => &self.excerpt,
            FieldRole::Tags => &self.tags,
            FieldRole::Author => &self.author,
        }
    }
}

/// Literal values used for document lifecycle states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusValues {
    pub draft: String,
    pub published: String,
    pub scheduled: String,
    pub archived: String,
}

impl Default for StatusValues {
    fn default() -> Self {
        Self {
            draft: "draft".into(),
            published: "published".into(),
            scheduled: "scheduled".into(),
            archived: "archived".into(),
        }
    }
}

/// Byte windows used by the heuristic field scanner.
///
/// A window starts right after a field's `name:` declaration. Short
/// adjacent declarations can leak a `required: true` from the next field
/// into the current one; that is an accepted limitation of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanWindows {
    pub type_window: usize,
    pub type_fallback_window: usize,
    pub required_window: usize,
}

impl Default for ScanWindows {
    fn default() -> Self {
        Self {
            type_window: 120,
            type_fallback_window: 400,
            required_window: 200,
        }
    }
}

/// Everything a generation run needs to know about naming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conventions {
    pub fields: FieldRoles,
    pub status: StatusValues,
    pub windows: ScanWindows,
}

impl Conventions {
    pub fn validate(&self) -> Result<(), DomainError> {
        for role in FieldRole::ALL {
            if self.fields.name_for(role).trim().is_empty() {
                return Err(DomainError::InvalidConventions(format!(
                    "field name for role '{role}' is empty"
                )));
            }
        }

        let statuses = [
            ("draft", &self.status.draft),
            ("published", &self.status.published),
            ("scheduled", &self.status.scheduled),
            ("archived", &self.status.archived),
        ];
        for (state, value) in statuses {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidConventions(format!(
                    "status literal for '{state}' is empty"
                )));
            }
            if value.contains('\'') {
                return Err(DomainError::InvalidConventions(format!(
                    "status literal for '{state}' contains a quote"
                )));
            }
        }

        let w = self.windows;
        if w.type_window == 0 || w.required_window == 0 {
            return Err(DomainError::InvalidConventions(
                "scan windows must be greater than zero".into(),
            ));
        }
        if w.type_fallback_window < w.type_window {
            return Err(DomainError::InvalidConventions(format!(
                "type_fallback_window ({}) is smaller than type_window ({})",
                w.type_fallback_window, w.type_window
            )));
        }

        Ok(())
    }
}
