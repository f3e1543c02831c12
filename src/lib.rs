pub mod alfred;
pub mod config;
pub mod db;
pub mod error;
pub mod index;
pub mod util;

#[cfg(test)]
mod test_support;

// Re-export core types
pub use config::Config;
pub use db::BearDb;
pub use error::{Error, Result};
pub use index::FtsIndex;
