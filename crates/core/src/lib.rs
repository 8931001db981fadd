pub mod config;
pub mod deploy;
pub mod frontmatter;
pub mod html;
pub mod markup;
pub mod posts;
