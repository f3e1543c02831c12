use std::path::PathBuf;

use crate::db::BearDb;
use crate::error::{Error, Result};
use crate::index::INDEX_FILE;

/// Environment variable Alfred sets to the workflow's private data directory
pub const WORKFLOW_DATA_ENV: &str = "alfred_workflow_data";

/// Where the two databases live. Built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bear_db: PathBuf,
    pub index_db: PathBuf,
}

impl Config {
    /// Resolve paths from explicit overrides, then the process environment
    pub fn resolve(bear_db: Option<PathBuf>, index_db: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(bear_db, index_db, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::resolve`] with a caller-supplied environment lookup
    pub fn resolve_with(
        bear_db: Option<PathBuf>,
        index_db: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let bear_db = match bear_db {
            Some(p) => p,
            None => BearDb::default_path(&dirs::home_dir().ok_or(Error::NoDataDir)?),
        };

        let index_db = match index_db {
            Some(p) => p,
            None => index_dir(&env)?.join(INDEX_FILE),
        };

        Ok(Self { bear_db, index_db })
    }

    /// Create the directory holding the index, if needed
    pub fn ensure_index_dir(&self) -> Result<()> {
        match self.index_db.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                std::fs::create_dir_all(dir).map_err(|source| Error::Io {
                    path: dir.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Workflow data dir, else the user cache dir, else home
fn index_dir(env: &impl Fn(&str) -> Option<String>) -> Result<PathBuf> {
    if let Some(dir) = env(WORKFLOW_DATA_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::cache_dir()
        .or_else(dirs::home_dir)
        .ok_or(Error::NoDataDir)
}
