//! File-backed storage slot.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::error::StorageError;
use super::StorageSlot;

/// A slot persisted as a single file.
///
/// Writes go through a sibling temp file followed by a rename, so a crash
/// mid-write leaves the previous payload intact rather than a truncated
/// one. A missing file reads as "no prior state".
///
/// # Example
///
/// ```rust,no_run
/// use levain::{FileSlot, HistoryStore};
///
/// let slot = FileSlot::new("fermentation_history.json");
/// let mut history = HistoryStore::load(slot);
/// history.append(24.0, 4.0, 175.0)?;
/// # Ok::<(), levain::HistoryError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot backed by the file at `path`.
    ///
    /// The file is not created until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file backing this slot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        let temp = self.temp_path();
        let mut file = fs::File::create(&temp)?;
        file.write_all(payload.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
