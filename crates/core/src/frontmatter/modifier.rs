//! Editor-managed frontmatter fields and merging them into a document.

use serde::Serialize;

use super::types::{FieldValue, Frontmatter};

/// The four fields a user edits directly. Every other key passes through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManagedFields {
    pub title: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub draft: bool,
}

impl ManagedFields {
    /// Read the managed fields out of a frontmatter mapping.
    ///
    /// Missing or mistyped values fall back to their defaults. A plain string
    /// in a list field is split on commas. Blank list items are dropped.
    pub fn from_frontmatter(fm: &Frontmatter) -> Self {
        Self {
            title: fm.get("title").and_then(FieldValue::as_str).unwrap_or_default().to_string(),
            tags: list_field(fm, "tags"),
            categories: list_field(fm, "categories"),
            draft: fm.get("draft").and_then(FieldValue::as_bool).unwrap_or(false),
        }
    }

    /// Write the managed fields over `fm`.
    ///
    /// Existing keys keep their position; missing ones are appended in the
    /// order title, tags, categories, draft.
    pub fn apply_to(&self, fm: &mut Frontmatter) {
        fm.insert("title", self.title.clone());
        fm.insert("tags", self.tags.clone());
        fm.insert("categories", self.categories.clone());
        fm.insert("draft", self.draft);
    }
}

/// Merge managed fields into frontmatter freshly read from disk.
pub fn merge_managed(mut on_disk: Frontmatter, fields: &ManagedFields) -> Frontmatter {
    fields.apply_to(&mut on_disk);
    on_disk
}

/// Split comma separated user input into trimmed, non-empty items.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn list_field(fm: &Frontmatter, key: &str) -> Vec<String> {
    match fm.get(key) {
        Some(FieldValue::List(items)) => {
            items.iter().filter(|item| !item.trim().is_empty()).cloned().collect()
        }
        Some(FieldValue::String(s)) => split_list(s),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parser::parse;

    #[test]
    fn extracts_fields_with_defaults() {
        let doc = parse("---\nauthor: \"me\"\n---\nbody");
        assert_eq!(ManagedFields::from_frontmatter(&doc.frontmatter), ManagedFields::default());
    }

    #[test]
    fn extracts_present_fields() {
        let doc = parse("---\ntitle: \"T\"\ntags: [a, b]\ncategories: notes\ndraft: true\n---\n");
        let fields = ManagedFields::from_frontmatter(&doc.frontmatter);
        assert_eq!(fields.title, "T");
        assert_eq!(fields.tags, vec!["a", "b"]);
        assert_eq!(fields.categories, vec!["notes"]);
        assert!(fields.draft);
    }

    #[test]
    fn merge_preserves_unmanaged_keys_and_positions() {
        let on_disk =
            parse("---\nauthor: \"me\"\ntitle: \"old\"\nweight: \"2\"\n---\n").frontmatter;
        let fields = ManagedFields {
            title: "new".into(),
            tags: vec!["x".into()],
            categories: Vec::new(),
            draft: false,
        };

        let merged = merge_managed(on_disk, &fields);
        let keys: Vec<_> = merged.keys().collect();
        assert_eq!(keys, vec!["author", "title", "weight", "tags", "categories", "draft"]);
        assert_eq!(merged.get("title"), Some(&FieldValue::from("new")));
        assert_eq!(merged.get("author"), Some(&FieldValue::from("me")));
    }

    #[test]
    fn blank_list_items_are_not_managed_values() {
        let doc = parse("---\ntags: []\ncategories: [notes, ]\n---\n");
        let fields = ManagedFields::from_frontmatter(&doc.frontmatter);
        assert!(fields.tags.is_empty());
        assert_eq!(fields.categories, vec!["notes"]);
    }

    #[test]
    fn split_list_drops_blank_items() {
        assert_eq!(split_list(" rust, ,cli ,"), vec!["rust", "cli"]);
        assert!(split_list("   ").is_empty());
    }
}
