use rusqlite::params;

use super::*;
use crate::db::BearDb;

const SQL_INSERT: &str = "
    INSERT INTO notes (title, body, uuid, tags)
    VALUES (?1, ?2, ?3, ?4)
";

impl FtsIndex {
    /// Rebuild the index from scratch out of every live note in `bear`.
    ///
    /// Stops at the first failed insert. Rows written before the failure stay
    /// in the table.
    pub fn reindex(&self, bear: &BearDb) -> Result<usize> {
        schema::recreate(&self.conn)?;

        let mut insert = self.conn.prepare(SQL_INSERT)?;
        let indexed = bear.export(|note| {
            insert
                .execute(params![
                    note.title,
                    note.text,
                    note.id,
                    note.tags.join(TAGS_SEPARATOR)
                ])
                .map(|_| ())
                .map_err(|source| Error::Index {
                    id: note.id.clone(),
                    source,
                })
        })?;

        tracing::info!(indexed, path = %self.path.display(), "rebuilt search index");
        Ok(indexed)
    }
}
