//! Frontmatter serialization back to markdown.

use super::parser::DELIMITER;
use super::types::{FieldValue, Frontmatter, ParsedDocument};

/// Serialize frontmatter and body into a complete markdown document.
///
/// The block is always written, even when empty. Empty lists are dropped
/// rather than written as `[]`, and strings are double-quoted without any
/// escaping.
pub fn serialize(fm: &Frontmatter, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 64 * (fm.len() + 1));
    out.push_str(DELIMITER);
    out.push('\n');

    for (key, value) in fm.iter() {
        if let Some(line) = serialize_field(key, value) {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out.push_str(DELIMITER);
    out.push_str("\n\n");
    out.push_str(body.trim_end());
    out
}

/// Serialize a parsed document back to markdown.
pub fn serialize_document(doc: &ParsedDocument) -> String {
    serialize(&doc.frontmatter, &doc.body)
}

fn serialize_field(key: &str, value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::List(items) if items.is_empty() => None,
        FieldValue::List(items) => {
            let quoted: Vec<String> = items.iter().map(|i| format!("\"{i}\"")).collect();
            Some(format!("{key}: [{}]", quoted.join(", ")))
        }
        FieldValue::Bool(b) => Some(format!("{key}: {b}")),
        FieldValue::String(s) => Some(format!("{key}: \"{s}\"")),
        FieldValue::Other(raw) => Some(format!("{key}: {raw}")),
    }
}
