use rusqlite::Connection;

use crate::error::Result;

/// Columns: title, body, uuid, tags. Only title and body are searchable.
const CREATE_NOTES: &str = "
    CREATE VIRTUAL TABLE IF NOT EXISTS notes USING fts5(
        title,
        body,
        uuid UNINDEXED,
        tags UNINDEXED,
        tokenize = 'trigram'
    );
";

/// Make sure the notes table exists so an unindexed store searches as empty
pub fn ensure(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_NOTES)?;
    Ok(())
}

/// Drop the notes table and create it again, empty
pub fn recreate(conn: &Connection) -> Result<()> {
    conn.execute_batch("DROP TABLE IF EXISTS notes;")?;
    conn.execute_batch(CREATE_NOTES)?;
    Ok(())
}
