//! Inline markup tokenizer for preview rendering.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Inline style of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
}

/// A styled run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub style: Style,
    /// Link target, only set for `Style::Link`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::Plain)
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style, target: None }
    }

    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self { text: text.into(), style: Style::Link, target: Some(target.into()) }
    }
}

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// Patterns in evaluation order.
///
/// Bold must come before italic so that the stable sort keeps a `**` match
/// ahead of a `*` match starting at the same offset.
fn patterns() -> [(Style, &'static Regex); 4] {
    [
        (Style::Bold, &*BOLD_RE),
        (Style::Italic, &*ITALIC_RE),
        (Style::Code, &*CODE_RE),
        (Style::Link, &*LINK_RE),
    ]
}

#[derive(Debug)]
struct Match<'a> {
    start: usize,
    end: usize,
    style: Style,
    inner: &'a str,
    target: Option<&'a str>,
}

/// Split one line into styled segments.
///
/// Every pattern is matched independently over the whole line. Matches are
/// ordered by start offset and a match is kept only if it starts at or after
/// the end of the previously kept one. Text outside kept matches becomes
/// plain segments. A link yields its text followed by a plain `" (url)"`.
pub fn tokenize(line: &str) -> Vec<Segment> {
    let mut found = find_matches(line);
    found.sort_by_key(|m| m.start);

    let mut segments = Vec::new();
    let mut cursor = 0;

    for m in found {
        if m.start < cursor {
            continue;
        }
        if m.start > cursor {
            segments.push(Segment::plain(&line[cursor..m.start]));
        }
        match (m.style, m.target) {
            (Style::Link, Some(url)) => {
                segments.push(Segment::link(m.inner, url));
                segments.push(Segment::plain(format!(" ({url})")));
            }
            (style, _) => segments.push(Segment::styled(m.inner, style)),
        }
        cursor = m.end;
    }

    if cursor < line.len() {
        segments.push(Segment::plain(&line[cursor..]));
    }

    segments
}

fn find_matches(line: &str) -> Vec<Match<'_>> {
    let mut found = Vec::new();

    for (style, re) in patterns() {
        for caps in re.captures_iter(line) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            found.push(Match {
                start: whole.start(),
                end: whole.end(),
                style,
                inner: caps.get(1).map_or("", |g| g.as_str()),
                target: caps.get(2).map(|g| g.as_str()),
            });
        }
    }

    found
}
