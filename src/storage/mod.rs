//! Durable string slots.
//!
//! The history log lives under exactly one durable key. This module
//! abstracts that key as a [`StorageSlot`]: one readable, writable,
//! removable string payload. The store is handed a slot at load time and
//! is the only component that touches it afterwards.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StorageError;
pub use file::FileSlot;
pub use memory::MemorySlot;

/// One durable string payload.
///
/// `read` returning `Ok(None)` means no prior state exists, which is
/// distinct from a read failure. Writes replace the whole payload.
pub trait StorageSlot {
    /// Read the current payload, if any.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the payload.
    fn write(&mut self, payload: &str) -> Result<(), StorageError>;

    /// Remove the payload. Removing an empty slot is a no-op.
    fn remove(&mut self) -> Result<(), StorageError>;
}
