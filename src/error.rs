use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the note stores
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// More than one live note carries a title that should be unique
    #[error("found too many records titled {0:?}")]
    TooManyRecords(String),

    #[error("failed to index note {id}: {source}")]
    Index {
        id: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("could not resolve the home or cache directory")]
    NoDataDir,

    #[error("failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
