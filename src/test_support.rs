//! Fixture Bear databases for unit tests

use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::db::BearDb;

const BEAR_SCHEMA: &str = "
    CREATE TABLE ZSFNOTE (
        Z_PK               INTEGER PRIMARY KEY,
        ZUNIQUEIDENTIFIER  VARCHAR,
        ZTITLE             VARCHAR,
        ZTEXT              VARCHAR,
        ZARCHIVED          INTEGER NOT NULL DEFAULT 0,
        ZTRASHED           INTEGER NOT NULL DEFAULT 0,
        ZMODIFICATIONDATE  TIMESTAMP
    );

    CREATE TABLE ZSFNOTEBACKLINK (
        Z_PK        INTEGER PRIMARY KEY,
        ZLINKEDBY   INTEGER,
        ZLINKINGTO  INTEGER
    );
";

/// A note row to seed into a fixture database
pub struct Seed<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub text: &'a str,
    pub archived: bool,
    pub trashed: bool,
    pub modified: f64,
}

impl<'a> Seed<'a> {
    pub fn note(id: &'a str, title: &'a str, text: &'a str) -> Self {
        Self {
            id,
            title,
            text,
            archived: false,
            trashed: false,
            modified: 0.0,
        }
    }

    pub fn modified(mut self, modified: f64) -> Self {
        self.modified = modified;
        self
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    pub fn trashed(mut self) -> Self {
        self.trashed = true;
        self
    }
}

/// A Bear database on disk, written through a writable connection
pub struct BearFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl BearFixture {
    pub fn new(notes: &[Seed<'_>]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.sqlite");

        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(BEAR_SCHEMA).unwrap();
        for note in notes {
            conn.execute(
                "INSERT INTO ZSFNOTE (ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, ZARCHIVED, ZTRASHED, ZMODIFICATIONDATE)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    note.id,
                    note.title,
                    note.text,
                    note.archived as i64,
                    note.trashed as i64,
                    note.modified
                ],
            )
            .unwrap();
        }

        Self { _dir: dir, path }
    }

    /// Record that note `from` links to note `to`
    pub fn link(&self, from: &str, to: &str) {
        let conn = Connection::open(&self.path).unwrap();
        conn.execute(
            "INSERT INTO ZSFNOTEBACKLINK (ZLINKEDBY, ZLINKINGTO)
             SELECT s.Z_PK, t.Z_PK FROM ZSFNOTE s, ZSFNOTE t
             WHERE s.ZUNIQUEIDENTIFIER = ?1 AND t.ZUNIQUEIDENTIFIER = ?2",
            params![from, to],
        )
        .unwrap();
    }

    pub fn open(&self) -> BearDb {
        BearDb::open(&self.path).unwrap()
    }
}
