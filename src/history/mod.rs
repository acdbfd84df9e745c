//! The persisted calculation log.
//!
//! [`HistoryStore`] owns a newest-first list of saved calculations and
//! the durable slot it mirrors them to. Every mutation persists the whole
//! log in one write before returning, so memory and storage never drift.

pub mod error;
pub mod record;
pub mod store;

pub use error::HistoryError;
pub use record::HistoryRecord;
pub use store::HistoryStore;
