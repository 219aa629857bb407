use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "codejinx")]
#[command(about = "Browse the Codejinx site content from the command line")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Content store endpoint (overrides the config file)
    #[arg(long, global = true, env = "CODEJINX_STORE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Content store API key
    #[arg(long, global = true, env = "CODEJINX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Serve content from a local JSON fixture file instead of the store
    #[arg(long, global = true)]
    pub fixtures: Option<String>,

    /// Route prefix the site is mounted under
    #[arg(long, global = true)]
    pub base_name: Option<String>,

    /// Print pages as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Open a site path, e.g. `/`, `/portfolio`, `/blog/my-post`
    Page(PageArgs),
    /// Run the study simplifier demo
    Simplify(SimplifyArgs),
    /// Submit the contact form demo
    Contact(ContactArgs),
}

#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct PageArgs {
    #[arg(default_value = "/")]
    pub path: String,

    /// Portfolio discipline filter ("All" for no filter)
    #[arg(long)]
    pub discipline: Option<String>,

    /// Portfolio service type filter
    #[arg(long)]
    pub service_type: Option<String>,

    /// Portfolio skill category filter
    #[arg(long)]
    pub skill: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct SimplifyArgs {
    /// Study material to simplify
    pub text: String,

    /// easy, medium or advanced
    #[arg(short, long, default_value = "medium")]
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub message: String,
}
