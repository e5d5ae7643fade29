use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::config::{Overrides, load_settings};

fn main() -> anyhow::Result<()> {
    services::logging::init();
    let cli = Cli::parse();

    let settings = load_settings(
        cli.config.as_deref(),
        Overrides {
            source: cli.source.clone(),
            api_key: cli.api_key.clone(),
            per_page: cli.per_page,
        },
    )?;

    match &cli.command {
        Commands::Search {
            query,
            pages,
            all,
            html,
        } => commands::handle_search(cli.json, &settings, query, *pages, *all, html.as_deref()),
        Commands::Browse { html } => commands::handle_browse(cli.json, &settings, html.as_deref()),
        Commands::Config { command } => {
            commands::handle_config_commands(cli.json, command, &settings)
        }
    }
}
