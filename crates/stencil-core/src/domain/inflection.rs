//! Singular/plural heuristics for display names.
//!
//! This is a closed heuristic, not an English inflector. Output is
//! deterministic for every input; linguistic correctness is only promised
//! for the irregular table below.

/// Irregular display names as `(plural, singular)`.
///
/// Matching is exact and case-sensitive. Plural entries are fixed points
/// of [`pluralize`].
const IRREGULAR: &[(&str, &str)] = &[
    ("Media", "Media"),
    ("News", "News"),
    ("Series", "Series"),
    ("People", "Person"),
    ("Children", "Child"),
    ("Posts", "Post"),
    ("Pages", "Page"),
    ("Users", "User"),
    ("Categories", "Category"),
    ("Tags", "Tag"),
];

/// Plural form of `name`. Multi-word names inflect their last word.
pub fn pluralize(name: &str) -> String {
    match name.rsplit_once(' ') {
        Some((head, last)) => format!("{head} {}", pluralize_word(last)),
        None => pluralize_word(name),
    }
}

/// Singular form of `name`. Multi-word names inflect their last word.
pub fn singularize(name: &str) -> String {
    match name.rsplit_once(' ') {
        Some((head, last)) => format!("{head} {}", singularize_word(last)),
        None => singularize_word(name),
    }
}

fn pluralize_word(word: &str) -> String {
    if let Some((plural, _)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return (*plural).to_string();
    }
    if let Some((plural, _)) = IRREGULAR.iter().find(|(_, singular)| *singular == word) {
        return (*plural).to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        format!("{stem}ies")
    } else if word.ends_with('s') || word.ends_with("sh") || word.ends_with("ch") {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// `-es` is only stripped when what remains ends in a sibilant
/// (`s`, `sh`, `ch`, `x`, `z`); otherwise a single `s` is stripped. This
/// keeps `Articles` → `Article` while `Churches` → `Church`.
fn singularize_word(word: &str) -> String {
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ends_with_sibilant(stem) {
            return stem.to_string();
        }
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

fn ends_with_sibilant(stem: &str) -> bool {
    ["s", "sh", "ch", "x", "z"]
        .iter()
        .any(|suffix| stem.ends_with(suffix))
}

/// Uppercase the first character, leave the rest alone.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Human label for a slug: `blog-posts` → `Blog Posts`.
pub fn display_name_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// PascalCase identifier from a display name: `Blog Post` → `BlogPost`.
pub fn pascal_case(display_name: &str) -> String {
    display_name
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect()
}

/// camelCase identifier from a display name: `Blog Posts` → `blogPosts`.
pub fn camel_case(display_name: &str) -> String {
    let pascal = pascal_case(display_name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_suffix_rules() {
        assert_eq!(pluralize("Story"), "Stories");
        assert_eq!(pluralize("Bus"), "Buses");
        assert_eq!(pluralize("Dish"), "Dishes");
        assert_eq!(pluralize("Church"), "Churches");
        assert_eq!(pluralize("Author"), "Authors");
    }

    #[test]
    fn irregular_plurals_are_fixed_points() {
        for (plural, _) in IRREGULAR {
            assert_eq!(pluralize(plural), *plural);
        }
    }

    #[test]
    fn irregular_singulars_pluralize_through_table() {
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("Child"), "Children");
    }

    #[test]
    fn singularize_uses_table_first() {
        assert_eq!(singularize("People"), "Person");
        assert_eq!(singularize("Media"), "Media");
        assert_eq!(singularize("Posts"), "Post");
        assert_eq!(singularize("Categories"), "Category");
    }

    #[test]
    fn singularize_suffix_rules() {
        assert_eq!(singularize("Stories"), "Story");
        assert_eq!(singularize("Churches"), "Church");
        assert_eq!(singularize("Boxes"), "Box");
        assert_eq!(singularize("Articles"), "Article");
        assert_eq!(singularize("Authors"), "Author");
        assert_eq!(singularize("Staff"), "Staff");
    }

    #[test]
    fn round_trip_for_regular_words() {
        for word in ["Post", "Category", "Author", "Story", "Church", "Bus", "Dish", "Event"] {
            assert_eq!(singularize(&pluralize(word)), word, "round trip of {word}");
        }
    }

    #[test]
    fn multi_word_names_inflect_last_word() {
        assert_eq!(pluralize("Blog Post"), "Blog Posts");
        assert_eq!(pluralize("Blog Posts"), "Blog Posts");
        assert_eq!(singularize("Site Categories"), "Site Category");
    }

    #[test]
    fn inflection_is_total_on_odd_input() {
        assert_eq!(pluralize(""), "s");
        assert_eq!(singularize(""), "");
        assert_eq!(singularize("s"), "s");
        assert_eq!(pluralize("y"), "ies");
    }

    #[test]
    fn display_names_from_slugs() {
        assert_eq!(display_name_from_slug("posts"), "Posts");
        assert_eq!(display_name_from_slug("blog-posts"), "Blog Posts");
        assert_eq!(display_name_from_slug("site_settings"), "Site Settings");
    }

    #[test]
    fn identifier_casing() {
        assert_eq!(pascal_case("Blog Post"), "BlogPost");
        assert_eq!(camel_case("Blog Posts"), "blogPosts");
        assert_eq!(camel_case(""), "");
    }
}
