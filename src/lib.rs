//! Levain: yeast dosing for a fixed 25 kg flour batch.
//!
//! The crate follows a "pure core, thin shell" split. The calculation and
//! classification logic in [`calc`] is composed of pure functions with no
//! side effects, while persistence is isolated behind the [`storage`]
//! seam consumed by [`history`].
//!
//! # Core Concepts
//!
//! - **Calculation**: explicit three-way outcome of a dose request
//!   (incomplete, degenerate, or a dose in grams)
//! - **Status bands**: qualitative classification of each raw input
//! - **History**: newest-first log of saved calculations, mirrored to one
//!   durable slot after every mutation
//!
//! # Example
//!
//! ```rust
//! use levain::{Calculation, HistoryStore, InputPair, MemorySlot};
//! use levain::calc::{classify_duration, classify_temperature};
//!
//! let inputs = InputPair::new(Some(24.0), Some(4.0));
//!
//! let dose = match inputs.compute() {
//!     Calculation::Ready { yeast_grams } => yeast_grams,
//!     _ => unreachable!("both inputs present and non-zero"),
//! };
//! assert_eq!(dose, 175.0);
//! assert_eq!(classify_temperature(24.0).label(), "Ideal");
//! assert_eq!(classify_duration(4.0).label(), "Normal");
//!
//! let mut history = HistoryStore::load(MemorySlot::new());
//! history.append(24.0, 4.0, dose)?;
//! assert_eq!(history.records()[0].yeast_grams, 175.0);
//! # Ok::<(), levain::HistoryError>(())
//! ```

pub mod calc;
pub mod history;
pub mod storage;

// Re-export commonly used types
pub use calc::{
    classify_duration, classify_temperature, Calculation, DegenerateFormula, DurationBand,
    InputPair, Severity, TemperatureBand,
};
pub use history::{HistoryError, HistoryRecord, HistoryStore};
pub use storage::{FileSlot, MemorySlot, StorageError, StorageSlot};
