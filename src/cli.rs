use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "freddie",
    version,
    about = "Search Bear notes from Alfred",
    long_about = "Search Bear notes from Alfred. Prints Alfred script filter XML on stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Bear database (defaults to Bear's group container)
    #[arg(long, global = true)]
    pub bear_db: Option<PathBuf>,

    /// Full-text index database (defaults to the workflow data directory)
    #[arg(long, global = true)]
    pub index_db: Option<PathBuf>,

    /// Output in JSON format instead of Alfred XML
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search note titles
    Search {
        /// Search term
        term: String,
    },

    /// Search note titles and bodies
    Text {
        /// Search term
        term: String,
    },

    /// Find today's daily note
    Today,

    /// Show backlinks for notes matching a search term
    Backlinks {
        /// Search term matched against the linked note's title
        term: String,
    },

    /// Search notes using the SQLite full-text index
    Fts {
        /// FTS5 query; and/or/not/near( work in any case
        #[arg(required_unless_present_any = ["index", "info"])]
        query: Option<String>,

        /// (Re)build the index from Bear
        #[arg(long, conflicts_with = "info")]
        index: bool,

        /// Show index and Bear record counts
        #[arg(long)]
        info: bool,
    },
}
