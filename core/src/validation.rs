//! Input validation: fatal finiteness checks and non-fatal plausibility
//! advisories.
//!
//! An advisory never aborts a call. The estimator trusts the caller's
//! numbers and computes with them as-is; the advisory flags what is most
//! likely a unit mix-up (pounds passed as kilograms, inches as centimeters).

use std::fmt;

use serde::Serialize;

use crate::errors::EstimateError;
use crate::profile::Profile;

/// Plausible height range in cm, exclusive below and inclusive above.
pub const PLAUSIBLE_HEIGHT_CM: (f64, f64) = (100.0, 250.0);

/// Plausible weight range in kg, exclusive below and inclusive above.
pub const PLAUSIBLE_WEIGHT_KG: (f64, f64) = (30.0, 250.0);

/// Ages at or past this are flagged.
pub const PLAUSIBLE_MAX_AGE_YEARS: f64 = 100.0;

/// Non-fatal warning about an implausible profile value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "field", content = "value")]
pub enum Advisory {
    #[serde(rename = "height")]
    ImplausibleHeight(f64),
    #[serde(rename = "weight")]
    ImplausibleWeight(f64),
    #[serde(rename = "age")]
    ImplausibleAge(f64),
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::ImplausibleHeight(h) => write!(
                f,
                "height {} cm is outside ({}, {}] cm; check that the value is in centimeters",
                h, PLAUSIBLE_HEIGHT_CM.0, PLAUSIBLE_HEIGHT_CM.1
            ),
            Advisory::ImplausibleWeight(w) => write!(
                f,
                "weight {} kg is outside ({}, {}] kg; check that the value is in kilograms",
                w, PLAUSIBLE_WEIGHT_KG.0, PLAUSIBLE_WEIGHT_KG.1
            ),
            Advisory::ImplausibleAge(a) => {
                write!(f, "age {} is {} years or more", a, PLAUSIBLE_MAX_AGE_YEARS)
            }
        }
    }
}

/// Check a height in cm
pub fn check_height_cm(height_cm: f64) -> Option<Advisory> {
    let (low, high) = PLAUSIBLE_HEIGHT_CM;
    if height_cm <= low || height_cm > high {
        Some(Advisory::ImplausibleHeight(height_cm))
    } else {
        None
    }
}

/// Check a weight in kg
pub fn check_weight_kg(weight_kg: f64) -> Option<Advisory> {
    let (low, high) = PLAUSIBLE_WEIGHT_KG;
    if weight_kg <= low || weight_kg > high {
        Some(Advisory::ImplausibleWeight(weight_kg))
    } else {
        None
    }
}

/// Check an age in years
pub fn check_age_years(age_years: f64) -> Option<Advisory> {
    if age_years >= PLAUSIBLE_MAX_AGE_YEARS {
        Some(Advisory::ImplausibleAge(age_years))
    } else {
        None
    }
}

/// Collect every advisory a profile raises, in field order.
pub fn check_profile(profile: &Profile) -> Vec<Advisory> {
    [
        check_height_cm(profile.height_cm),
        check_weight_kg(profile.weight_kg),
        check_age_years(profile.age_years),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Reject NaN and infinities with a typed error.
///
/// The data model calls for positive reals; a non-finite weight would also
/// stall or never terminate the range walk.
pub fn require_finite(field: &'static str, value: f64) -> Result<f64, EstimateError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimateError::NonFinite { field, value })
    }
}
