use super::*;

const SQL_EXPORT: &str = "
    SELECT ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, ZMODIFICATIONDATE
    FROM ZSFNOTE
    WHERE ZARCHIVED = 0
      AND ZTRASHED = 0
";

impl BearDb {
    /// Stream every live note through `visit`.
    ///
    /// Rows are read lazily. The first error from `visit` stops the scan and
    /// is returned as is. Returns the number of notes visited.
    pub fn export<F, E>(&self, mut visit: F) -> std::result::Result<usize, E>
    where
        F: FnMut(NoteRecord) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        let mut stmt = self.conn.prepare(SQL_EXPORT).map_err(Error::from)?;
        let rows = stmt
            .query_map([], |row| note_from_row(row, 0))
            .map_err(Error::from)?;

        let mut visited = 0;
        for note in rows {
            visit(note.map_err(Error::from)?)?;
            visited += 1;
        }

        tracing::debug!(visited, "exported bear notes");
        Ok(visited)
    }
}
