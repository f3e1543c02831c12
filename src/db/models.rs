use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util;

/// Seconds between the Unix epoch and the Core Data epoch (2001-01-01)
const CORE_DATA_EPOCH_OFFSET: f64 = 978_307_200.0;

/// A live note as stored by Bear
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteRecord {
    pub id: String,
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
    pub modified: Option<DateTime<Utc>>,
}

impl NoteRecord {
    pub fn new(id: String, title: String, text: String, modified: Option<f64>) -> Self {
        let tags = util::extract_tags(&text);
        Self {
            id,
            title,
            text,
            tags,
            modified: modified.and_then(from_core_data),
        }
    }
}

/// A query-scoped match handed to the output formatters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl SearchResult {
    pub fn title_case(&self) -> String {
        util::title_case(&self.title)
    }

    pub fn unique_tags(&self) -> Vec<String> {
        util::unique_tags(&self.tags)
    }
}

impl From<NoteRecord> for SearchResult {
    fn from(note: NoteRecord) -> Self {
        Self {
            id: note.id,
            title: note.title,
            tags: note.tags,
            body: Some(note.text),
        }
    }
}

/// A link from `source` to `target`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backlink {
    pub source: SearchResult,
    pub target: SearchResult,
}

fn from_core_data(seconds: f64) -> Option<DateTime<Utc>> {
    let unix = seconds + CORE_DATA_EPOCH_OFFSET;
    DateTime::from_timestamp(unix.trunc() as i64, (unix.fract() * 1e9) as u32)
}
