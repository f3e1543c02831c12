use super::query::{normalize, sql_literal};
use super::*;
use crate::db::SearchResult;

const READ_ONLY_PRAGMAS: &str = "
    PRAGMA synchronous = off;
    PRAGMA mmap_size = 250000000;
    PRAGMA temp_store = memory;
    PRAGMA journal_mode = off;
    PRAGMA cache_size = -25000;
    PRAGMA query_only = on;
";

impl FtsIndex {
    /// Ranked full-text search over note titles and bodies
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        // MATCH takes the query language inline, hence the literal.
        // Each clause runs the whole query against a single column.
        let literal = sql_literal(&normalize(query));
        let sql = format!(
            "SELECT title, uuid, tags FROM notes
             WHERE (title MATCH {literal}) OR (body MATCH {literal})
             ORDER BY rank"
        );
        tracing::debug!(%sql, "searching index");

        self.conn.execute_batch(READ_ONLY_PRAGMAS)?;
        let results = self.run_match(&sql);
        self.conn.execute_batch("PRAGMA query_only = off;")?;

        results
    }

    fn run_match(&self, sql: &str) -> Result<Vec<SearchResult>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| {
            let tags: String = row.get(2)?;
            Ok(SearchResult {
                title: row.get(0)?,
                id: row.get(1)?,
                tags: split_tags(&tags),
                body: None,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
