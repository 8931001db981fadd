//! List command implementation.

use std::path::Path;

use postdesk_core::posts::{PostStore, PostSummary};
use tabled::{Table, Tabled, settings::Style};

use super::{fail, load_config_or_exit};
use crate::ListArgs;

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Draft")]
    draft: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&PostSummary> for PostRow {
    fn from(post: &PostSummary) -> Self {
        Self {
            file: post.file_name.clone(),
            title: post.title.clone(),
            draft: if post.draft { "yes".into() } else { String::new() },
            tags: post.tags.join(", "),
        }
    }
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ListArgs) {
    let rc = load_config_or_exit("list", config, profile);

    let mut posts = match PostStore::new(&rc.posts_dir).list() {
        Ok(posts) => posts,
        Err(e) => fail("list", e),
    };
    if args.drafts {
        posts.retain(|p| p.draft);
    }

    if args.json {
        match serde_json::to_string_pretty(&posts) {
            Ok(json) => println!("{json}"),
            Err(e) => fail("list", e),
        }
        return;
    }

    if posts.is_empty() {
        println!("(no posts found)");
        return;
    }

    let rows: Vec<PostRow> = posts.iter().map(PostRow::from).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!("-- {} posts --", posts.len());
}
