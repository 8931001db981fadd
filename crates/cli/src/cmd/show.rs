use std::path::Path;

use postdesk_core::frontmatter::Frontmatter;
use postdesk_core::posts::PostStore;
use serde::Serialize;

use super::{fail, load_config_or_exit};
use crate::ShowArgs;

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    file: &'a str,
    frontmatter: &'a Frontmatter,
    body: &'a str,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ShowArgs) {
    let rc = load_config_or_exit("show", config, profile);

    let doc = match PostStore::new(&rc.posts_dir).load(&args.post) {
        Ok(doc) => doc,
        Err(e) => fail("show", e),
    };

    if args.json {
        let out = ShowOutput { file: &args.post, frontmatter: &doc.frontmatter, body: &doc.body };
        match serde_json::to_string_pretty(&out) {
            Ok(json) => println!("{json}"),
            Err(e) => fail("show", e),
        }
        return;
    }

    for (key, value) in doc.frontmatter.iter() {
        println!("{key}: {value}");
    }
    println!();
    println!("{}", doc.body);
}
