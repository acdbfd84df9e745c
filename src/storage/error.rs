//! Storage error types.

use thiserror::Error;

/// Errors that can occur while touching a durable slot
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying medium failed the operation (missing permissions,
    /// full disk, and the like)
    #[error("storage slot unavailable: {0}")]
    Io(#[from] std::io::Error),
}
