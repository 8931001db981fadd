//! Frontmatter parsing from markdown documents.

use super::types::{FieldValue, Frontmatter, ParsedDocument};

/// Marker line that opens and closes the frontmatter block.
pub const DELIMITER: &str = "---";

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` at the very start of the document:
/// ```markdown
/// ---
/// title: "Hello"
/// tags: ["rust", "cli"]
/// draft: true
/// ---
///
/// Body text
/// ```
///
/// Parsing never fails. A document that does not start with the marker, or
/// whose block is never closed, comes back with empty frontmatter and the
/// full input as body.
pub fn parse(content: &str) -> ParsedDocument {
    if !content.starts_with(DELIMITER) {
        return ParsedDocument::body_only(content);
    }

    let mut parts = content.splitn(3, DELIMITER);
    let (Some(_), Some(block), Some(body)) = (parts.next(), parts.next(), parts.next())
    else {
        tracing::debug!("frontmatter block is not closed, treating content as body");
        return ParsedDocument::body_only(content);
    };

    ParsedDocument { frontmatter: parse_block(block), body: body.trim().to_string() }
}

/// Parse the `key: value` lines between the markers.
fn parse_block(block: &str) -> Frontmatter {
    let mut fm = Frontmatter::new();

    for line in block.trim().lines() {
        let Some((key, raw)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        // A line like `: value` has no usable key and is dropped.
        if key.is_empty() {
            continue;
        }
        fm.insert(key, coerce_value(raw));
    }

    fm
}

/// Coerce a raw value: list first, then boolean, then string.
fn coerce_value(raw: &str) -> FieldValue {
    let value = raw.trim();

    // `[]` splits into a single empty item, which the serializer writes back
    // as `[""]`.
    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        let items = inner.split(',').map(|item| strip_quotes(item.trim()).to_string());
        return FieldValue::List(items.collect());
    }

    match value.to_lowercase().as_str() {
        "true" => FieldValue::Bool(true),
        "false" => FieldValue::Bool(false),
        _ => FieldValue::String(strip_quotes(value).to_string()),
    }
}

/// Remove one layer of matching `"` or `'` quotes.
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(value)
}
