use std::fmt;

use super::*;
use crate::db::BearDb;

/// Record counts of the index next to the notes it was built from
#[derive(Debug, Clone)]
pub struct IndexInfo {
    pub path: PathBuf,
    pub index_records: std::result::Result<i64, String>,
    pub source_records: std::result::Result<usize, String>,
}

impl IndexInfo {
    /// Whether the index holds exactly the live notes
    pub fn in_sync(&self) -> bool {
        match (&self.index_records, &self.source_records) {
            (Ok(index), Ok(source)) => usize::try_from(*index).is_ok_and(|i| i == *source),
            _ => false,
        }
    }
}

impl fmt::Display for IndexInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    DB File: {}", self.path.display())?;
        match &self.index_records {
            Ok(count) => writeln!(f, "FTS Records: {count}")?,
            Err(e) => writeln!(f, "FTS Records: -1\n      Error: {e}")?,
        }
        match &self.source_records {
            Ok(count) => write!(f, " DB Records: {count}"),
            Err(e) => write!(f, " DB Records: -1\n      Error: {e}"),
        }
    }
}

impl FtsIndex {
    /// Compare the index against a full scan of `bear`. Never fails.
    pub fn info(&self, bear: &BearDb) -> IndexInfo {
        let index_records = self.count().map_err(|e| {
            tracing::warn!(error = %e, "could not count index records");
            e.to_string()
        });

        let mut visited = 0usize;
        let source_records = bear
            .export(|_| {
                visited += 1;
                Ok::<_, Error>(())
            })
            .map(|_| visited)
            .map_err(|e| {
                tracing::warn!(error = %e, "could not count bear records");
                e.to_string()
            });

        IndexInfo {
            path: self.path.clone(),
            index_records,
            source_records,
        }
    }
}
