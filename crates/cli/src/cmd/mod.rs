pub mod deploy;
pub mod doctor;
pub mod edit;
pub mod list;
pub mod new;
pub mod preview;
pub mod show;

use postdesk_core::config::ResolvedConfig;
use postdesk_core::config::loader::{ConfigLoader, default_config_path};
use std::fmt::Display;
use std::path::Path;

/// Load the config or report the failure for `cmd` and exit.
pub fn load_config_or_exit(
    cmd: &str,
    config: Option<&Path>,
    profile: Option<&str>,
) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL pdk {cmd}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Report a command failure and exit.
pub fn fail(cmd: &str, err: impl Display) -> ! {
    println!("FAIL pdk {cmd}");
    println!("{err}");
    std::process::exit(1);
}
