// SPDX-License-Identifier: MIT

//! JSON-file storage backend.
//!
//! Each slot maps to a `<key>.json` file under a data directory. Writes go
//! through a temp file and rename, so a crash mid-write leaves the previous
//! snapshot intact rather than a truncated one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::storage::Storage;

/// File-per-slot storage rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`. The directory is created on first
    /// write, not here, so constructing against a read-only location only
    /// fails once something is persisted.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading slot {}", path.display())),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating data directory {}", self.dir.display()))?;

        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value)
            .with_context(|| format!("writing slot temp file {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("replacing slot {}", path.display()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        let path = self.slot_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing slot {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.read("workouts").unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("traillog");
        let mut storage = FileStorage::new(&nested);

        storage.write("workouts", r#"[{"id":"a"}]"#).unwrap();

        assert!(nested.join("workouts.json").is_file());
        assert_eq!(
            storage.read("workouts").unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        storage.write("workouts", "[1]").unwrap();
        storage.write("workouts", "[2]").unwrap();

        assert_eq!(storage.read("workouts").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_remove_missing_slot_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.remove("workouts").unwrap();

        storage.write("workouts", "[]").unwrap();
        storage.remove("workouts").unwrap();
        assert_eq!(storage.read("workouts").unwrap(), None);
    }
}
