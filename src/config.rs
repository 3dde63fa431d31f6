//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::storage::FileStorage;

/// Configuration for where session data lives on disk, loaded once at
/// startup by the composition root.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted snapshot files
    pub data_dir: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("traillog-data"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `TRAILLOG_DATA_DIR` overrides the data directory; otherwise the
    /// platform's per-user data directory is used.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_dir = env::var("TRAILLOG_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self { data_dir }
    }

    /// File storage rooted at the configured data directory.
    pub fn file_storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("traillog")
}
