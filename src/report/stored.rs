//! Normalization for previously persisted records.
//!
//! Stored submissions predate schema additions, and some exporters
//! write `null` where this crate expects an absent key. Stripping
//! nulls before deserializing lets `#[serde(default)]` supply
//! type-correct defaults for both cases, which is the deep-merge-over-
//! defaults behavior editing flows rely on.

use serde_json::Value;

use crate::errors::SurveyError;
use crate::report::{AnnualReport, MonthlyReport};

/// Recursively removes `null` entries from objects so serde defaults
/// apply to them. Array elements are normalized in place but never
/// removed.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, entry| !entry.is_null());
            for entry in map.values_mut() {
                strip_nulls(entry);
            }
        }
        Value::Array(entries) => {
            for entry in entries.iter_mut() {
                strip_nulls(entry);
            }
        }
        _ => {}
    }
}

/// Builds an [`AnnualReport`] from a stored JSON value, filling
/// missing or null leaves with defaults.
pub fn annual_from_stored(mut value: Value) -> Result<AnnualReport, SurveyError> {
    strip_nulls(&mut value);
    Ok(serde_json::from_value(value)?)
}

/// Builds a [`MonthlyReport`] from a stored JSON value, filling
/// missing or null leaves with defaults.
pub fn monthly_from_stored(mut value: Value) -> Result<MonthlyReport, SurveyError> {
    strip_nulls(&mut value);
    Ok(serde_json::from_value(value)?)
}
