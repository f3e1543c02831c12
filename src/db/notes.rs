use chrono::{Local, NaiveDate};

use super::*;

const SQL_DAY: &str = "
    SELECT ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, ZMODIFICATIONDATE
    FROM ZSFNOTE
    WHERE ZARCHIVED = 0
      AND ZTRASHED = 0
      AND ZTITLE = ?1
";

const SQL_TITLE: &str = "
    SELECT ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, ZMODIFICATIONDATE
    FROM ZSFNOTE
    WHERE ZARCHIVED = 0
      AND ZTRASHED = 0
      AND lower(ZTITLE) LIKE lower(?1) ESCAPE '\\'
    ORDER BY ZMODIFICATIONDATE DESC
";

const SQL_TEXT: &str = "
    SELECT ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, ZMODIFICATIONDATE
    FROM ZSFNOTE
    WHERE ZARCHIVED = 0
      AND ZTRASHED = 0
      AND (lower(ZTEXT) LIKE lower(?1) ESCAPE '\\' OR lower(ZTITLE) LIKE lower(?1) ESCAPE '\\')
    ORDER BY ZMODIFICATIONDATE DESC
";

impl BearDb {
    // =================================================================
    // Note lookups
    // =================================================================

    /// Identifier of the note titled with today's date, if there is one
    pub fn query_today(&self) -> Result<Option<String>> {
        self.query_day(Local::now().date_naive())
    }

    /// Identifier of the note titled `YYYY-MM-DD` for `date`.
    ///
    /// Daily notes are expected to be unique, so two matches is an error.
    pub fn query_day(&self, date: NaiveDate) -> Result<Option<String>> {
        let title = date.format("%Y-%m-%d").to_string();
        let mut notes = self.collect(SQL_DAY, &title)?;

        match notes.len() {
            0 => Ok(None),
            1 => Ok(notes.pop().map(|n| n.id)),
            _ => Err(Error::TooManyRecords(title)),
        }
    }

    /// Notes whose title contains `term`, most recently modified first
    pub fn query_titles(&self, term: &str) -> Result<Vec<SearchResult>> {
        let notes = self.collect(SQL_TITLE, &like_pattern(term))?;
        Ok(notes
            .into_iter()
            .map(|n| SearchResult {
                body: None,
                ..SearchResult::from(n)
            })
            .collect())
    }

    /// Notes whose title or body contains `term`, most recently modified first
    pub fn query_text(&self, term: &str) -> Result<Vec<SearchResult>> {
        let notes = self.collect(SQL_TEXT, &like_pattern(term))?;
        Ok(notes.into_iter().map(SearchResult::from).collect())
    }

    fn collect(&self, sql: &str, bind: &str) -> Result<Vec<NoteRecord>> {
        tracing::debug!(bind, "querying bear notes");
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([bind], |row| note_from_row(row, 0))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
