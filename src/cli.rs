use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixseek", version, about = "Paginated image search")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "PIXSEEK_SOURCE",
        help = "Search API base url, or path to a local JSON catalog"
    )]
    pub source: Option<String>,
    #[arg(
        long,
        global = true,
        env = "PIXSEEK_API_KEY",
        hide_env_values = true,
        help = "API key for the remote search API"
    )]
    pub api_key: Option<String>,
    #[arg(long, global = true, help = "Config file (default: ~/.config/pixseek/config.toml)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Results per page")]
    pub per_page: Option<u32>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one search and page through it.
    Search {
        query: String,
        #[arg(long, default_value_t = 1, help = "Number of pages to fetch")]
        pages: u32,
        #[arg(long, default_value_t = false, help = "Fetch until results run out")]
        all: bool,
        #[arg(long, help = "Write the gallery as an HTML page")]
        html: Option<PathBuf>,
    },
    /// Interactive session: each stdin line is a query, or `:more`/`:m`,
    /// `:top`, `:quit`/`:q`.
    Browse {
        #[arg(long, help = "Rewrite the gallery HTML page after every step")]
        html: Option<PathBuf>,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
    Path,
}
