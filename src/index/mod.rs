//! The full-text search index over Bear notes.
//!
//! The index lives in its own SQLite file and is never updated in place. A
//! reindex throws the table away and streams every live note back in, so the
//! index is a snapshot of Bear as of the last rebuild.

mod info;
pub mod query;
mod reindex;
pub mod schema;
mod search;

#[cfg(test)]
mod tests;

use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub use self::info::IndexInfo;

/// File name of the index inside the workflow data directory
pub const INDEX_FILE: &str = "fts.sqlite3";

/// Tags are flattened into one column with this separator. Tags never span
/// lines, so it cannot occur inside one.
pub const TAGS_SEPARATOR: &str = "\n";

/// Handle on the FTS5 index database
pub struct FtsIndex {
    conn: Connection,
    path: PathBuf,
}

impl FtsIndex {
    /// Open or create the index database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        schema::ensure(&conn)?;

        tracing::debug!(path = %path.display(), "opened search index");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of indexed notes
    pub fn count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT count(*) FROM notes", [], |row| row.get(0))?)
    }
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(TAGS_SEPARATOR)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
