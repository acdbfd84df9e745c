//! Status bands for the raw inputs.
//!
//! Two independent taxonomies classify each input into a named range: one
//! for ambient temperature, one for fermentation time. Both classifiers
//! are total over all real inputs and ignore the dose formula entirely.

use std::fmt;

/// How a band should be presented.
///
/// The presentation layer maps severities to styling; the crate only says
/// how much attention a band deserves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// The input sits in the recommended range.
    Ok,
    /// Outside the recommended range, but workable.
    Info,
    /// Worth a second look before baking.
    Caution,
    /// Likely to hurt the result.
    Warning,
}

/// Qualitative band for an ambient temperature in degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemperatureBand {
    /// Below 20 degrees.
    Cold,
    /// 20 to 26 degrees inclusive.
    Ideal,
    /// Above 26 up to 30 degrees.
    Warm,
    /// Above 30 degrees.
    Hot,
}

impl TemperatureBand {
    /// Display label for the band.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Ideal => "Ideal",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }

    /// Severity tag for the band.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Cold => Severity::Info,
            Self::Ideal => Severity::Ok,
            Self::Warm => Severity::Caution,
            Self::Hot => Severity::Warning,
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative band for a fermentation time in hours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationBand {
    /// Under 2 hours.
    Fast,
    /// 2 to 4 hours inclusive.
    Normal,
    /// Above 4 up to 8 hours.
    Slow,
    /// Above 8 hours.
    VerySlow,
}

impl DurationBand {
    /// Display label for the band.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fast => "Fast",
            Self::Normal => "Normal",
            Self::Slow => "Slow",
            Self::VerySlow => "Very Slow",
        }
    }

    /// Severity tag for the band.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Fast => Severity::Warning,
            Self::Normal => Severity::Ok,
            Self::Slow => Severity::Info,
            Self::VerySlow => Severity::Caution,
        }
    }
}

impl fmt::Display for DurationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an ambient temperature.
///
/// # Example
///
/// ```rust
/// use levain::{classify_temperature, TemperatureBand};
///
/// assert_eq!(classify_temperature(18.0), TemperatureBand::Cold);
/// assert_eq!(classify_temperature(24.0), TemperatureBand::Ideal);
/// assert_eq!(classify_temperature(28.0), TemperatureBand::Warm);
/// assert_eq!(classify_temperature(33.0), TemperatureBand::Hot);
/// ```
pub fn classify_temperature(temperature_c: f64) -> TemperatureBand {
    if temperature_c < 20.0 {
        TemperatureBand::Cold
    } else if temperature_c <= 26.0 {
        TemperatureBand::Ideal
    } else if temperature_c <= 30.0 {
        TemperatureBand::Warm
    } else {
        TemperatureBand::Hot
    }
}

/// Classify a fermentation time.
///
/// # Example
///
/// ```rust
/// use levain::{classify_duration, DurationBand};
///
/// assert_eq!(classify_duration(1.5), DurationBand::Fast);
/// assert_eq!(classify_duration(4.0), DurationBand::Normal);
/// assert_eq!(classify_duration(6.0), DurationBand::Slow);
/// assert_eq!(classify_duration(12.0), DurationBand::VerySlow);
/// ```
pub fn classify_duration(hours: f64) -> DurationBand {
    if hours < 2.0 {
        DurationBand::Fast
    } else if hours <= 4.0 {
        DurationBand::Normal
    } else if hours <= 8.0 {
        DurationBand::Slow
    } else {
        DurationBand::VerySlow
    }
}
