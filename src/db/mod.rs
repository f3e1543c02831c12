mod export;
mod graph;
pub mod models;
mod notes;


use rusqlite::{Connection, OpenFlags, Row};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub use self::models::*;

/// Location of Bear's database, relative to the user's home directory
pub const BEAR_DB_PATH: &str =
    "Library/Group Containers/9K33E3U3T4.net.shinyfrog.bear/Application Data/database.sqlite";

/// Read-only handle on Bear's note database
pub struct BearDb {
    conn: Connection,
    path: PathBuf,
}

impl BearDb {
    /// Open Bear's database without write access
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "opened bear database");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Default location under the given home directory
    pub fn default_path(home: &Path) -> PathBuf {
        home.join(BEAR_DB_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Map `(id, title, text, modified)` columns starting at `offset`
fn note_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<NoteRecord> {
    let title: Option<String> = row.get(offset + 1)?;
    let text: Option<String> = row.get(offset + 2)?;
    Ok(NoteRecord::new(
        row.get(offset)?,
        title.unwrap_or_default(),
        text.unwrap_or_default(),
        row.get(offset + 3)?,
    ))
}

/// Escape LIKE wildcards so `term` only ever matches literally
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
