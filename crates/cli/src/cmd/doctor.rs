use postdesk_core::config::loader::{ConfigLoader, default_config_path};
use postdesk_core::posts::PostStore;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   pdk doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("blog_root: {}", rc.blog_root.display());
            println!("posts_dir: {}", rc.posts_dir.display());
            println!("deploy: {}", rc.deploy.command.join(" "));

            match PostStore::new(&rc.posts_dir).list_names() {
                Ok(names) => println!("posts: {}", names.len()),
                Err(e) => println!("WARN {e}"),
            }
        }
        Err(e) => {
            println!("FAIL pdk doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
