//! Frontmatter parsing, merging, and serialization.
//!
//! This module provides functionality to:
//! - Parse the `---` delimited metadata block at the start of a post
//! - Merge the editor-managed fields over what is on disk
//! - Serialize a document back to markdown with frontmatter

pub mod modifier;
pub mod parser;
pub mod serializer;
pub mod types;

pub use modifier::{ManagedFields, merge_managed, split_list};
pub use parser::{DELIMITER, parse};
pub use serializer::{serialize, serialize_document};
pub use types::{FieldValue, Frontmatter, ParsedDocument};
