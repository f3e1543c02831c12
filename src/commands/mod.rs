use anyhow::{Context, Result};
use colored::*;
use serde_json::json;

use freddie::alfred;
use freddie::db::{BearDb, SearchResult};
use freddie::index::FtsIndex;
use freddie::Config;

use crate::cli::Commands;

mod backlinks;
mod fts;
mod search;
mod today;

pub fn run(command: Commands, config: &Config, json_mode: bool) -> Result<()> {
    match command {
        Commands::Search { term } => search::cmd_search(config, &term, json_mode)?,
        Commands::Text { term } => search::cmd_text(config, &term, json_mode)?,
        Commands::Today => today::cmd_today(config, json_mode)?,
        Commands::Backlinks { term } => backlinks::cmd_backlinks(config, &term, json_mode)?,
        Commands::Fts { query, index, info } => {
            fts::cmd_fts(config, query.as_deref(), index, info, json_mode)?
        }
    }

    Ok(())
}

fn open_bear(config: &Config) -> Result<BearDb> {
    BearDb::open(&config.bear_db)
        .with_context(|| format!("Failed to open Bear database at {}", config.bear_db.display()))
}

fn open_index(config: &Config) -> Result<FtsIndex> {
    config.ensure_index_dir()?;
    FtsIndex::open(&config.index_db).with_context(|| {
        format!("Failed to open search index at {}", config.index_db.display())
    })
}

/// Print results for Alfred, or as JSON for everything else
fn print_results(command: &str, query: &str, results: &[SearchResult], json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            json!({
                "command": command,
                "query": query,
                "count": results.len(),
                "results": results,
            })
        );
    } else {
        print!("{}", alfred::results_xml(results, query));
    }
}
