//! Validation and templating for newly created posts.

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Timestamp format written to the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NewPostError {
    #[error("post title must not be empty")]
    EmptyTitle,

    #[error("file name must not be empty")]
    EmptyFilename,

    #[error("file name '{0}' may only contain letters, digits, underscores and hyphens")]
    InvalidFilename(String),
}

/// A validated request to create a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    /// File stem, without the `.md` extension.
    pub filename: String,
}

impl NewPost {
    /// Validate a title and optional file name.
    ///
    /// Without an explicit file name one is derived from the title with
    /// [`slugify`]. Rules are checked in order and the first violation wins.
    pub fn new(title: &str, filename: Option<&str>) -> Result<Self, NewPostError> {
        let title = title.trim();
        let filename = match filename {
            Some(f) => f.trim().to_string(),
            None => slugify(title),
        };

        if title.is_empty() {
            return Err(NewPostError::EmptyTitle);
        }
        if filename.is_empty() {
            return Err(NewPostError::EmptyFilename);
        }
        if !FILENAME_RE.is_match(&filename) {
            return Err(NewPostError::InvalidFilename(filename));
        }

        Ok(Self { title: title.to_string(), filename })
    }

    pub fn file_name(&self) -> String {
        format!("{}.md", self.filename)
    }

    /// Initial file contents: frontmatter skeleton and an empty body.
    pub fn render(&self, author: &str, now: &DateTime<FixedOffset>) -> String {
        format!(
            "---\ntitle: \"{title}\"\ndate: {date}\ndraft: true\nauthor: \"{author}\"\n\
             tags: []\ncategories: []\ndescription: \"\"\n---\n\n",
            title = self.title,
            date = now.format(DATE_FORMAT),
        )
    }
}

/// Derive a URL-friendly file stem from a title.
pub fn slugify(title: &str) -> String {
    let cleaned = NON_SLUG_RE.replace_all(title, "");
    let dashed = SEPARATOR_RE.replace_all(&cleaned, "-");
    dashed.trim_matches('-').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::{FieldValue, parse};
    use chrono::TimeZone;

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust -- and   Hugo  "), "rust-and-hugo");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn derives_filename_from_title() {
        let post = NewPost::new("My First Post", None).unwrap();
        assert_eq!(post.filename, "my-first-post");
        assert_eq!(post.file_name(), "my-first-post.md");
    }

    #[test]
    fn rejects_each_rule() {
        assert_eq!(NewPost::new("   ", Some("x")), Err(NewPostError::EmptyTitle));
        assert_eq!(NewPost::new("Title", Some("  ")), Err(NewPostError::EmptyFilename));
        assert_eq!(NewPost::new("!!!", None), Err(NewPostError::EmptyFilename));
        assert_eq!(
            NewPost::new("Title", Some("bad name")),
            Err(NewPostError::InvalidFilename("bad name".into()))
        );
    }

    #[test]
    fn non_ascii_title_needs_explicit_filename() {
        assert!(matches!(
            NewPost::new("你好 世界", None),
            Err(NewPostError::InvalidFilename(_))
        ));
        assert!(NewPost::new("你好 世界", Some("hello-world")).is_ok());
    }

    #[test]
    fn rendered_skeleton_parses_back() {
        let post = NewPost::new("Hello", None).unwrap();
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();

        let content = post.render("Jane", &now);
        assert!(content.contains("date: 2024-03-09T07:05:00+08:00\n"));
        assert!(content.ends_with("---\n\n"));

        let doc = parse(&content);
        let keys: Vec<_> = doc.frontmatter.keys().collect();
        assert_eq!(
            keys,
            vec!["title", "date", "draft", "author", "tags", "categories", "description"]
        );
        assert_eq!(doc.frontmatter.get("draft"), Some(&FieldValue::Bool(true)));
        assert_eq!(doc.frontmatter.get("tags"), Some(&FieldValue::List(vec![String::new()])));
        assert_eq!(doc.frontmatter.get("description"), Some(&FieldValue::from("")));
        assert_eq!(doc.body, "");
    }
}
