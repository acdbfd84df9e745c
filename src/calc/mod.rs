//! Dose calculation and input classification.
//!
//! Everything in this module is pure: the same inputs always produce the
//! same outputs, and nothing here touches the history log or any other
//! state. Callers re-run [`InputPair::compute`] whenever an input field
//! changes.

pub mod bands;
pub mod formula;

pub use bands::{classify_duration, classify_temperature, DurationBand, Severity, TemperatureBand};
pub use formula::{yeast_grams, Calculation, DegenerateFormula, InputPair, DOSE_FACTOR};
