//! Saved calculation records.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Wall-clock format captured at save time, e.g. `25/12/2024, 14:30:05`.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// One saved calculation.
///
/// The serialized field names match the log format of the legacy
/// application, so blobs it wrote load unchanged and blobs written here
/// load there. Numeric fields keep full float precision on the wire;
/// rounding for display is the presentation layer's business.
///
/// Records are immutable once saved, except for [`succeeded`], which the
/// user flips after finding out how the bake went.
///
/// [`succeeded`]: HistoryRecord::succeeded
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Locale-formatted date and time the record was saved.
    #[serde(rename = "dataHora")]
    pub recorded_at: String,
    /// Ambient temperature the dose was computed for, in degrees Celsius.
    #[serde(rename = "temperatura")]
    pub temperature_c: f64,
    /// Fermentation time the dose was computed for, in hours.
    #[serde(rename = "horas")]
    pub hours: f64,
    /// The computed dose in grams.
    #[serde(rename = "fermento")]
    pub yeast_grams: f64,
    /// Whether the bake worked out. Absent in older blobs, so it
    /// defaults to false on load.
    #[serde(rename = "deuCerto", default)]
    pub succeeded: bool,
}

impl HistoryRecord {
    /// Build a record stamped with the current local time.
    ///
    /// Only the store creates records; `succeeded` always starts false.
    pub(crate) fn capture(temperature_c: f64, hours: f64, yeast_grams: f64) -> Self {
        Self {
            recorded_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            temperature_c,
            hours,
            yeast_grams,
            succeeded: false,
        }
    }
}
