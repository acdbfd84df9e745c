//! The durable history log.

use super::error::HistoryError;
use super::record::HistoryRecord;
use crate::storage::StorageSlot;

/// Newest-first log of saved calculations, mirrored to one durable slot.
///
/// Loading a slot is the only way to get a store, so a store is always
/// hydrated. Each mutating operation serializes the whole log and writes
/// it in one shot; if the write fails, the in-memory mutation is rolled
/// back and the failure is returned, so memory and storage stay equal
/// either way.
///
/// # Example
///
/// ```rust
/// use levain::{HistoryStore, MemorySlot};
///
/// let mut history = HistoryStore::load(MemorySlot::new());
/// assert!(history.is_empty());
///
/// history.append(24.0, 4.0, 175.0)?;
/// history.append(18.0, 10.0, 93.33)?;
///
/// // Newest first
/// assert_eq!(history.records()[0].yeast_grams, 93.33);
/// assert_eq!(history.records()[1].yeast_grams, 175.0);
///
/// history.toggle_succeeded(0)?;
/// assert!(history.records()[0].succeeded);
///
/// history.clear()?;
/// assert!(history.is_empty());
/// # Ok::<(), levain::HistoryError>(())
/// ```
#[derive(Debug)]
pub struct HistoryStore<S: StorageSlot> {
    slot: S,
    records: Vec<HistoryRecord>,
}

impl<S: StorageSlot> HistoryStore<S> {
    /// Load the log persisted in `slot`.
    ///
    /// Missing state and unparseable state both hydrate as an empty log.
    /// A corrupt blob is an expected, recoverable condition and never
    /// blocks startup; the next successful mutation overwrites it.
    pub fn load(slot: S) -> Self {
        let records = slot
            .read()
            .ok()
            .flatten()
            .and_then(|payload| serde_json::from_str(&payload).ok())
            .unwrap_or_default();
        Self { slot, records }
    }

    /// All records, newest first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Number of saved calculations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the log holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Save a calculation at the head of the log.
    ///
    /// The record is stamped with the current local time and starts with
    /// `succeeded` false. Returns the updated log.
    pub fn append(
        &mut self,
        temperature_c: f64,
        hours: f64,
        yeast_grams: f64,
    ) -> Result<&[HistoryRecord], HistoryError> {
        let record = HistoryRecord::capture(temperature_c, hours, yeast_grams);
        self.records.insert(0, record);
        if let Err(err) = self.persist() {
            self.records.remove(0);
            return Err(err);
        }
        Ok(&self.records)
    }

    /// Flip the outcome flag of the record at `index` (0 = newest).
    ///
    /// Records are addressed by position rather than a stable id. The log
    /// is single-device and never reordered, so positions stay valid
    /// between the caller reading the log and toggling an entry.
    pub fn toggle_succeeded(&mut self, index: usize) -> Result<&[HistoryRecord], HistoryError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(HistoryError::IndexOutOfBounds { index, len })?;
        record.succeeded = !record.succeeded;
        if let Err(err) = self.persist() {
            self.records[index].succeeded = !self.records[index].succeeded;
            return Err(err);
        }
        Ok(&self.records)
    }

    /// Drop every record and remove the persisted state with them.
    pub fn clear(&mut self) -> Result<&[HistoryRecord], HistoryError> {
        let kept = std::mem::take(&mut self.records);
        if let Err(err) = self.slot.remove() {
            self.records = kept;
            return Err(err.into());
        }
        Ok(&self.records)
    }

    /// Give the slot back, consuming the store.
    pub fn into_slot(self) -> S {
        self.slot
    }

    fn persist(&mut self) -> Result<(), HistoryError> {
        let payload = serde_json::to_string(&self.records)?;
        self.slot.write(&payload)?;
        Ok(())
    }
}
