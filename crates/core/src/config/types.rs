use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Root of the static site; the deploy command runs here.
    pub blog_root: String,
    /// Directory holding the posts (defaults to `{{blog_root}}/content/posts`).
    pub posts_dir: Option<String>,
    /// Author written into newly created posts.
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub deploy: DeployConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    /// Program followed by its arguments.
    #[serde(default = "default_deploy_command")]
    pub command: Vec<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self { command: default_deploy_command() }
    }
}

fn default_deploy_command() -> Vec<String> {
    vec!["./updateblog.sh".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub blog_root: PathBuf,
    pub posts_dir: PathBuf,
    pub author: String,
    pub deploy: DeployConfig,
    pub logging: LoggingConfig,
}
