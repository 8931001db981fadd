use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use postdesk_core::deploy;

use super::{fail, load_config_or_exit};
use crate::DeployArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &DeployArgs) {
    let rc = load_config_or_exit("deploy", config, profile);

    if !args.yes {
        if !io::stdin().is_terminal() {
            fail("deploy", "refusing to deploy without confirmation; pass --yes");
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Build and publish the blog now?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("deploy cancelled");
            return;
        }
    }

    let outcome = match deploy::run(&rc.deploy, &rc.blog_root) {
        Ok(outcome) => outcome,
        Err(e) => fail("deploy", e),
    };

    if outcome.success {
        println!("OK   pdk deploy");
        return;
    }

    println!("FAIL pdk deploy");
    match outcome.code {
        Some(code) => println!("exit code: {code}"),
        None => println!("terminated by signal"),
    }
    if !outcome.stderr.trim().is_empty() {
        println!("{}", outcome.stderr.trim_end());
    }
    std::process::exit(1);
}
