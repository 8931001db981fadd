//! Flat-file post storage.
//!
//! Posts are `*.md` files directly inside one directory; the file name is
//! the only key. Reads and writes are whole-file and last save wins.

pub mod new_post;

pub use new_post::{NewPost, NewPostError, slugify};

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::frontmatter::{ManagedFields, ParsedDocument, merge_managed, parse, serialize};

/// Extension of post files.
pub const POST_EXTENSION: &str = "md";

#[derive(Debug, Error)]
pub enum PostError {
    #[error("posts directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read posts directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("invalid post name '{0}'")]
    InvalidName(String),

    #[error("post not found: {0}")]
    NotFound(String),

    #[error("post already exists: {0}")]
    AlreadyExists(String),

    #[error("failed to read post {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to write post {0}: {1}")]
    WriteError(String, #[source] std::io::Error),

    #[error(transparent)]
    InvalidNewPost(#[from] NewPostError),
}

/// Listing entry for a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub file_name: String,
    pub path: PathBuf,
    pub title: String,
    pub draft: bool,
    pub tags: Vec<String>,
}

/// Store over a single posts directory.
#[derive(Debug, Clone)]
pub struct PostStore {
    dir: PathBuf,
}

impl PostStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File names of all posts, sorted.
    pub fn list_names(&self) -> Result<Vec<String>, PostError> {
        if !self.dir.is_dir() {
            return Err(PostError::MissingDir(self.dir.display().to_string()));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry =
                entry.map_err(|e| PostError::WalkError(self.dir.display().to_string(), e))?;
            if !entry.file_type().is_file() || !is_post_file(entry.path()) {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        names.sort();
        tracing::debug!(count = names.len(), dir = %self.dir.display(), "listed posts");
        Ok(names)
    }

    /// List posts with their managed fields.
    pub fn list(&self) -> Result<Vec<PostSummary>, PostError> {
        self.list_names()?
            .into_iter()
            .map(|name| {
                let doc = self.load(&name)?;
                let fields = ManagedFields::from_frontmatter(&doc.frontmatter);
                Ok(PostSummary {
                    path: self.dir.join(&name),
                    file_name: name,
                    title: fields.title,
                    draft: fields.draft,
                    tags: fields.tags,
                })
            })
            .collect()
    }

    /// Resolve a post name to its path. The `.md` extension is optional.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, PostError> {
        let name = name.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(PostError::InvalidName(name.to_string()));
        }

        let file_name = if is_post_file(Path::new(name)) {
            name.to_string()
        } else {
            format!("{name}.{POST_EXTENSION}")
        };
        Ok(self.dir.join(file_name))
    }

    /// Read and parse a post.
    pub fn load(&self, name: &str) -> Result<ParsedDocument, PostError> {
        let path = self.path_for(name)?;
        let content = read_post(&path)?;
        Ok(parse(&content))
    }

    /// Save edited managed fields and body.
    ///
    /// The frontmatter is re-read from disk right before writing so that keys
    /// edited elsewhere survive; the managed fields passed in always win.
    pub fn save(
        &self,
        name: &str,
        fields: &ManagedFields,
        body: &str,
    ) -> Result<PathBuf, PostError> {
        let path = self.path_for(name)?;
        let on_disk = parse(&read_post(&path)?);

        let merged = merge_managed(on_disk.frontmatter, fields);
        let content = serialize(&merged, body);

        fs::write(&path, content)
            .map_err(|e| PostError::WriteError(path.display().to_string(), e))?;
        tracing::info!(path = %path.display(), "saved post");
        Ok(path)
    }

    /// Create a new post file from its skeleton.
    pub fn create(
        &self,
        post: &NewPost,
        author: &str,
        now: &DateTime<FixedOffset>,
    ) -> Result<PathBuf, PostError> {
        if !self.dir.is_dir() {
            return Err(PostError::MissingDir(self.dir.display().to_string()));
        }

        let path = self.dir.join(post.file_name());
        if path.exists() {
            return Err(PostError::AlreadyExists(post.file_name()));
        }

        fs::write(&path, post.render(author, now))
            .map_err(|e| PostError::WriteError(path.display().to_string(), e))?;
        tracing::info!(path = %path.display(), "created post");
        Ok(path)
    }
}

fn is_post_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == POST_EXTENSION)
}

fn read_post(path: &Path) -> Result<String, PostError> {
    if !path.is_file() {
        return Err(PostError::NotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| PostError::ReadError(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn path_for_appends_extension() {
        let store = PostStore::new("/posts");
        assert_eq!(store.path_for("hello").unwrap(), PathBuf::from("/posts/hello.md"));
        assert_eq!(store.path_for("hello.md").unwrap(), PathBuf::from("/posts/hello.md"));
    }

    #[test]
    fn path_for_rejects_traversal() {
        let store = PostStore::new("/posts");
        assert!(matches!(store.path_for("../etc/passwd"), Err(PostError::InvalidName(_))));
        assert!(matches!(store.path_for(".."), Err(PostError::InvalidName(_))));
        assert!(matches!(store.path_for(""), Err(PostError::InvalidName(_))));
    }

    #[test]
    fn list_names_only_direct_markdown_files() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("b.md"), "b").unwrap();
        fs::write(tmp.path().join("a.md"), "a").unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("c.md"), "c").unwrap();

        let names = PostStore::new(tmp.path()).list_names().unwrap();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn missing_dir_is_reported() {
        let tmp = tempdir().unwrap();
        let store = PostStore::new(tmp.path().join("nope"));
        assert!(matches!(store.list_names(), Err(PostError::MissingDir(_))));
    }

    #[test]
    fn load_missing_post() {
        let tmp = tempdir().unwrap();
        let store = PostStore::new(tmp.path());
        assert!(matches!(store.load("ghost"), Err(PostError::NotFound(_))));
    }
}
