//! The yeast dose formula.
//!
//! The dose is derived from two user inputs, ambient temperature and
//! fermentation time, and is only defined once both are present and their
//! product is non-zero. Every other case is an explicit [`Calculation`]
//! variant so callers never see `Infinity` or `NaN`.

use thiserror::Error;

/// Dose factor for the fixed 25 kg flour reference batch.
///
/// Grams of fresh biological yeast = `DOSE_FACTOR / (hours * temperature)`.
pub const DOSE_FACTOR: f64 = 16800.0;

/// The formula's denominator is zero, so the dose is undefined.
///
/// Raised when `hours * temperature_c == 0`. The original formula would
/// divide by zero here; the error makes that state explicit instead of
/// letting an infinite dose escape to the caller.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("hours x temperature is zero, yeast dose is undefined")]
pub struct DegenerateFormula;

/// The two user inputs, as far as they have been filled in.
///
/// Transient and caller-owned: the caller keeps raw text-field state and
/// parses into an `InputPair` whenever a field changes. A field holding a
/// non-finite number counts as absent, the same as an unparseable one.
///
/// # Example
///
/// ```rust
/// use levain::{Calculation, InputPair};
///
/// let half_filled = InputPair::new(Some(24.0), None);
/// assert_eq!(half_filled.compute(), Calculation::Incomplete);
///
/// let filled = InputPair::new(Some(24.0), Some(4.0));
/// assert_eq!(filled.compute(), Calculation::Ready { yeast_grams: 175.0 });
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputPair {
    /// Ambient temperature in degrees Celsius, if filled in.
    pub temperature_c: Option<f64>,
    /// Desired fermentation time in hours, if filled in.
    pub hours: Option<f64>,
}

impl InputPair {
    /// Create an input pair from whatever fields are currently filled.
    pub fn new(temperature_c: Option<f64>, hours: Option<f64>) -> Self {
        Self {
            temperature_c,
            hours,
        }
    }

    /// Check whether both inputs are present and finite.
    pub fn is_complete(&self) -> bool {
        matches!(
            (self.temperature_c, self.hours),
            (Some(t), Some(h)) if t.is_finite() && h.is_finite()
        )
    }

    /// Compute the yeast dose for these inputs.
    ///
    /// This is a pure function; callers invoke it on every input change
    /// rather than caching the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use levain::{Calculation, DegenerateFormula, InputPair};
    ///
    /// // Not ready until both fields are filled
    /// assert_eq!(InputPair::default().compute(), Calculation::Incomplete);
    ///
    /// // A zero input makes the dose undefined, not infinite
    /// let zeroed = InputPair::new(Some(0.0), Some(4.0));
    /// assert_eq!(zeroed.compute(), Calculation::Degenerate(DegenerateFormula));
    ///
    /// // 18 degrees over 10 hours
    /// let slow = InputPair::new(Some(18.0), Some(10.0));
    /// assert_eq!(slow.compute(), Calculation::Ready { yeast_grams: 93.33 });
    /// ```
    pub fn compute(&self) -> Calculation {
        match (self.temperature_c, self.hours) {
            (Some(t), Some(h)) if t.is_finite() && h.is_finite() => match yeast_grams(t, h) {
                Ok(grams) => Calculation::Ready { yeast_grams: grams },
                Err(err) => Calculation::Degenerate(err),
            },
            _ => Calculation::Incomplete,
        }
    }
}

/// Outcome of a dose request.
///
/// The three cases are deliberately distinct: `Incomplete` means "not
/// ready yet" and is never an error, while `Degenerate` is a real invalid
/// state the caller should surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Calculation {
    /// At least one input is absent or non-finite.
    Incomplete,
    /// Both inputs present, but the formula divides by zero.
    Degenerate(DegenerateFormula),
    /// The dose in grams, rounded to two decimals.
    Ready { yeast_grams: f64 },
}

impl Calculation {
    /// The dose in grams, if one was produced.
    pub fn yeast_grams(&self) -> Option<f64> {
        match self {
            Self::Ready { yeast_grams } => Some(*yeast_grams),
            _ => None,
        }
    }

    /// Check whether a dose was produced.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Raw dose formula for inputs already known to be present and finite.
///
/// Returns the grams of yeast rounded to two decimals, or
/// [`DegenerateFormula`] when the denominator is zero.
///
/// # Example
///
/// ```rust
/// use levain::calc::yeast_grams;
///
/// assert_eq!(yeast_grams(24.0, 4.0), Ok(175.0));
/// assert!(yeast_grams(24.0, 0.0).is_err());
/// ```
pub fn yeast_grams(temperature_c: f64, hours: f64) -> Result<f64, DegenerateFormula> {
    let denominator = hours * temperature_c;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(DegenerateFormula);
    }
    Ok(round2(DOSE_FACTOR / denominator))
}

/// Round half away from zero to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario_ideal_normal() {
        assert_eq!(yeast_grams(24.0, 4.0), Ok(175.0));
    }

    #[test]
    fn reference_scenario_cold_very_slow() {
        assert_eq!(yeast_grams(18.0, 10.0), Ok(93.33));
    }

    #[test]
    fn dose_rounds_to_two_decimals() {
        // 16800 / (3 * 23) = 243.478...
        assert_eq!(yeast_grams(23.0, 3.0), Ok(243.48));
    }

    #[test]
    fn zero_temperature_is_degenerate() {
        assert_eq!(yeast_grams(0.0, 4.0), Err(DegenerateFormula));
    }

    #[test]
    fn zero_hours_is_degenerate() {
        assert_eq!(yeast_grams(24.0, 0.0), Err(DegenerateFormula));
    }

    #[test]
    fn compute_waits_for_both_inputs() {
        assert_eq!(InputPair::default().compute(), Calculation::Incomplete);
        assert_eq!(
            InputPair::new(Some(24.0), None).compute(),
            Calculation::Incomplete
        );
        assert_eq!(
            InputPair::new(None, Some(4.0)).compute(),
            Calculation::Incomplete
        );
    }

    #[test]
    fn non_finite_input_counts_as_absent() {
        assert_eq!(
            InputPair::new(Some(f64::NAN), Some(4.0)).compute(),
            Calculation::Incomplete
        );
        assert_eq!(
            InputPair::new(Some(24.0), Some(f64::INFINITY)).compute(),
            Calculation::Incomplete
        );
        assert!(!InputPair::new(Some(f64::NAN), Some(4.0)).is_complete());
    }

    #[test]
    fn compute_never_yields_non_finite_dose() {
        for &(t, h) in &[(0.0, 4.0), (24.0, 0.0), (0.0, 0.0), (-0.0, 5.0)] {
            let outcome = InputPair::new(Some(t), Some(h)).compute();
            assert_eq!(outcome, Calculation::Degenerate(DegenerateFormula));
            assert_eq!(outcome.yeast_grams(), None);
        }
    }

    #[test]
    fn negative_inputs_still_produce_a_finite_dose() {
        // Nonsensical for baking, but the contract only excludes zero
        let dose = yeast_grams(-24.0, 4.0).unwrap();
        assert!(dose.is_finite());
    }

    #[test]
    fn yeast_grams_accessor_matches_variant() {
        let ready = Calculation::Ready { yeast_grams: 175.0 };
        assert_eq!(ready.yeast_grams(), Some(175.0));
        assert!(ready.is_ready());
        assert!(!Calculation::Incomplete.is_ready());
    }
}
