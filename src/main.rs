use anyhow::{Context, Result};
use clap::Parser;

use freddie::Config;

mod cli;
mod commands;
mod logging;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::resolve(cli.bear_db, cli.index_db)
        .context("Failed to resolve database locations")?;
    tracing::debug!(?config, "resolved configuration");

    commands::run(cli.command, &config, cli.json)
}
