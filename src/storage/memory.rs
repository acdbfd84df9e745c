//! In-memory storage slot.

use super::error::StorageError;
use super::StorageSlot;

/// A slot that lives only as long as the process.
///
/// Useful in tests and for callers that want an ephemeral history.
///
/// # Example
///
/// ```rust
/// use levain::{MemorySlot, StorageSlot};
///
/// let mut slot = MemorySlot::new();
/// assert!(slot.read().unwrap().is_none());
///
/// slot.write("[]").unwrap();
/// assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySlot {
    payload: Option<String>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw payload, if any. Handy for asserting on persisted state.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        self.payload = Some(payload.to_owned());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StorageError> {
        self.payload = None;
        Ok(())
    }
}
