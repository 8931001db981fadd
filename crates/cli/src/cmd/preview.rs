use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use postdesk_core::frontmatter::ManagedFields;
use postdesk_core::html::render_page;
use postdesk_core::markup::scan_lines;
use postdesk_core::posts::PostStore;

use super::{fail, load_config_or_exit};
use crate::PreviewArgs;
use crate::render::render_terminal;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &PreviewArgs) {
    let rc = load_config_or_exit("preview", config, profile);
    let store = PostStore::new(&rc.posts_dir);

    let doc = match store.load(&args.post) {
        Ok(doc) => doc,
        Err(e) => fail("preview", e),
    };

    if !args.html {
        let styled = !args.plain
            && std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none();
        print!("{}", render_terminal(&scan_lines(&doc.body), styled));
        return;
    }

    let stem = post_stem(&args.post);
    let mut title = ManagedFields::from_frontmatter(&doc.frontmatter).title;
    if title.is_empty() {
        title = stem.clone();
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(format!("pdk-preview-{stem}.html")));

    match fs::write(&out, render_page(&title, &doc.body)) {
        Ok(()) => {
            println!("OK   pdk preview");
            println!("html: {}", out.display());
        }
        Err(e) => fail("preview", format!("failed to write {}: {e}", out.display())),
    }
}

fn post_stem(name: &str) -> String {
    PathBuf::from(name.trim())
        .file_stem()
        .map_or_else(|| "post".to_string(), |s| s.to_string_lossy().into_owned())
}
