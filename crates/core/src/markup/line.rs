//! Block-level classification of a single body line.

/// Opening and closing marker of a fenced code block.
pub const FENCE: &str = "```";

/// What kind of line this is, with the prefix already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Heading1(String),
    Heading2(String),
    Heading3(String),
    Blockquote(String),
    FenceBoundary { lang: Option<String> },
    Blank,
    Plain(String),
}

/// Classify a line by exact prefix.
///
/// Trailing whitespace is ignored. Rules are tried in order: `# `, `## `,
/// `### `, `> `, a fence (three backticks plus an optional language tag),
/// blank, and finally plain text.
pub fn classify_line(line: &str) -> LineClass {
    let line = line.trim_end();

    if let Some(rest) = line.strip_prefix("# ") {
        return LineClass::Heading1(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return LineClass::Heading2(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return LineClass::Heading3(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix("> ") {
        return LineClass::Blockquote(rest.to_string());
    }
    if let Some(tag) = line.strip_prefix(FENCE)
        && is_fence_tag(tag)
    {
        let lang = (!tag.is_empty()).then(|| tag.to_string());
        return LineClass::FenceBoundary { lang };
    }
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    LineClass::Plain(line.to_string())
}

/// A language tag is a single word with no backticks; empty is allowed.
fn is_fence_tag(tag: &str) -> bool {
    !tag.contains(|c: char| c == '`' || c.is_whitespace())
}
