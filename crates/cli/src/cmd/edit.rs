use std::fs;
use std::path::Path;

use postdesk_core::frontmatter::{ManagedFields, split_list};
use postdesk_core::posts::PostStore;

use super::{fail, load_config_or_exit};
use crate::EditArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &EditArgs) {
    let rc = load_config_or_exit("edit", config, profile);
    let store = PostStore::new(&rc.posts_dir);

    let doc = match store.load(&args.post) {
        Ok(doc) => doc,
        Err(e) => fail("edit", e),
    };

    let fields = apply_args(ManagedFields::from_frontmatter(&doc.frontmatter), args);

    let body = match &args.body_file {
        Some(path) => match fs::read_to_string(path) {
            Ok(body) => body,
            Err(e) => fail("edit", format!("failed to read {}: {e}", path.display())),
        },
        None => doc.body,
    };

    match store.save(&args.post, &fields, &body) {
        Ok(path) => {
            println!("OK   pdk edit");
            println!("path: {}", path.display());
        }
        Err(e) => fail("edit", e),
    }
}

fn apply_args(mut fields: ManagedFields, args: &EditArgs) -> ManagedFields {
    if let Some(title) = &args.title {
        fields.title = title.trim().to_string();
    }
    if let Some(tags) = &args.tags {
        fields.tags = split_list(tags);
    }
    if let Some(categories) = &args.categories {
        fields.categories = split_list(categories);
    }
    if let Some(draft) = args.draft {
        fields.draft = draft;
    }
    fields
}
