mod cmd;
mod logging;
mod render;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use postdesk_core::config::loader::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pdk", version, about = "Edit, preview and deploy Markdown blog posts")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List posts in the posts directory
    List(ListArgs),

    /// Show a post's frontmatter and body
    Show(ShowArgs),

    /// Create a new draft post
    New(NewArgs),

    /// Update a post's title, tags, categories, draft flag or body
    Edit(EditArgs),

    /// Render a post preview in the terminal or as an HTML page
    Preview(PreviewArgs),

    /// Run the configured build/deploy command
    Deploy(DeployArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list drafts
    #[arg(long)]
    pub drafts: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Post file name (the .md extension is optional)
    pub post: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Post title
    #[arg(long)]
    pub title: String,

    /// File name without extension (derived from the title if omitted)
    #[arg(long)]
    pub filename: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Post file name (the .md extension is optional)
    pub post: String,

    #[arg(long)]
    pub title: Option<String>,

    /// Comma separated tags; an empty value clears them
    #[arg(long)]
    pub tags: Option<String>,

    /// Comma separated categories; an empty value clears them
    #[arg(long)]
    pub categories: Option<String>,

    #[arg(long)]
    pub draft: Option<bool>,

    /// Replace the body with the contents of this file
    #[arg(long)]
    pub body_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Post file name (the .md extension is optional)
    pub post: String,

    /// Render a standalone HTML page instead of terminal output
    #[arg(long)]
    pub html: bool,

    /// Where to write the HTML page (defaults to the temp directory)
    #[arg(long, requires = "html")]
    pub out: Option<PathBuf>,

    /// Disable terminal styling
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Args)]
pub struct DeployArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Ok(cfg) = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref()) {
        logging::init(&cfg);
    }

    tracing::debug!(command = ?cli.command, "dispatching");

    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::List(args) => cmd::list::run(config, profile, &args),
        Commands::Show(args) => cmd::show::run(config, profile, &args),
        Commands::New(args) => cmd::new::run(config, profile, &args),
        Commands::Edit(args) => cmd::edit::run(config, profile, &args),
        Commands::Preview(args) => cmd::preview::run(config, profile, &args),
        Commands::Deploy(args) => cmd::deploy::run(config, profile, &args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pdk", &mut std::io::stdout());
        }
    }
}
