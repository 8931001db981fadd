//! Lightweight markup handling for the styled preview.
//!
//! This is deliberately not a Markdown parser. Lines are classified by
//! prefix, fenced code is passed through verbatim, and the remaining text is
//! split into bold, italic, code and link segments.

pub mod block;
pub mod inline;
pub mod line;

pub use block::{LineScanner, PreviewBlock, scan_lines};
pub use inline::{Segment, Style, tokenize};
pub use line::{FENCE, LineClass, classify_line};
