use std::path::Path;

use chrono::Local;
use postdesk_core::posts::{NewPost, PostStore};

use super::{fail, load_config_or_exit};
use crate::NewArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &NewArgs) {
    let rc = load_config_or_exit("new", config, profile);

    let post = match NewPost::new(&args.title, args.filename.as_deref()) {
        Ok(post) => post,
        Err(e) => fail("new", e),
    };

    let now = Local::now().fixed_offset();
    match PostStore::new(&rc.posts_dir).create(&post, &rc.author, &now) {
        Ok(path) => {
            println!("OK   pdk new");
            println!("title: {}", post.title);
            println!("path: {}", path.display());
        }
        Err(e) => fail("new", e),
    }
}
