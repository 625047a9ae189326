//! Fragment persisted as a one-line text file.

use skilltrack_core::FragmentStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
#[error("failed to write fragment to {path}: {source}")]
pub struct FileStoreError {
    path: String,
    #[source]
    source: io::Error,
}

/// Reads the fragment from a file at startup and rewrites it on publish.
///
/// A missing or blank file reads as "no fragment".
#[derive(Debug, Clone)]
pub struct FileFragmentStore {
    path: PathBuf,
    writes: usize,
}

impl FileFragmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writes: 0,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Successful publishes so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl FragmentStore for FileFragmentStore {
    type Error = FileStoreError;

    fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let line = contents.trim();
                (!line.is_empty()).then(|| line.to_string())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("could not read {}: {err}", self.path.display());
                None
            }
        }
    }

    fn publish(&mut self, fragment: &str) -> Result<(), Self::Error> {
        fs::write(&self.path, format!("{fragment}\n")).map_err(|source| FileStoreError {
            path: self.path.display().to_string(),
            source,
        })?;
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "skilltrack-store-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn missing_and_blank_files_read_as_none() {
        let path = temp_path("blank");
        let store = FileFragmentStore::new(&path);
        assert!(store.read().is_none());
        fs::write(&path, "  \n").unwrap();
        assert!(store.read().is_none());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn publish_round_trips_through_disk() {
        let path = temp_path("publish");
        let mut store = FileFragmentStore::new(&path);
        store.publish("1,2,3").unwrap();
        assert_eq!(store.read().as_deref(), Some("1,2,3"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "1,2,3\n");
        assert_eq!(store.writes(), 1);
        assert_eq!(store.path(), path.as_path());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn publish_into_missing_directory_fails() {
        let mut store = FileFragmentStore::new(temp_path("dir").join("nested").join("frag"));
        let err = store.publish("0").unwrap_err();
        assert!(err.to_string().contains("failed to write fragment"));
        assert_eq!(store.writes(), 0);
    }
}
