//! History error types.

use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur while mutating the history log
#[derive(Debug, Error)]
pub enum HistoryError {
    /// A toggle aimed at a record that does not exist
    #[error("no record at index {index}, the log holds {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The log could not be serialized for persistence
    #[error("history serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The durable slot rejected the operation; the in-memory log was
    /// rolled back to its previous contents
    #[error(transparent)]
    Storage(#[from] StorageError),
}
