use super::*;

const SQL_GRAPH: &str = "
    SELECT s.ZUNIQUEIDENTIFIER, s.ZTITLE, s.ZTEXT, s.ZMODIFICATIONDATE,
           t.ZUNIQUEIDENTIFIER, t.ZTITLE, t.ZTEXT, t.ZMODIFICATIONDATE
    FROM ZSFNOTEBACKLINK l
    JOIN ZSFNOTE s ON s.Z_PK = l.ZLINKEDBY
    JOIN ZSFNOTE t ON t.Z_PK = l.ZLINKINGTO
    WHERE s.ZARCHIVED = 0 AND s.ZTRASHED = 0
      AND t.ZARCHIVED = 0 AND t.ZTRASHED = 0
    ORDER BY s.ZMODIFICATIONDATE DESC
";

impl BearDb {
    /// Every link between two live notes
    pub fn query_graph(&self) -> Result<Vec<Backlink>> {
        let mut stmt = self.conn.prepare(SQL_GRAPH)?;
        let rows = stmt.query_map([], |row| {
            let source = note_from_row(row, 0)?;
            let target = note_from_row(row, 4)?;
            Ok(Backlink {
                source: SearchResult {
                    body: None,
                    ..SearchResult::from(source)
                },
                target: SearchResult {
                    body: None,
                    ..SearchResult::from(target)
                },
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
