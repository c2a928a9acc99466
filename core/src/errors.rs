//! Error types for the calorie planner.

use thiserror::Error;

/// Fatal input failures.
///
/// Only malformed enumerations and contradictory or non-finite inputs abort
/// an estimate; implausible-but-usable values (a 260 cm height, say) are
/// surfaced as [`crate::validation::Advisory`] warnings instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("unknown biological sex '{0}', expected one of: female, male")]
    UnknownSex(String),

    #[error(
        "unknown activity level '{0}', expected one of: sedentary, lightly, moderately, very, extremely"
    )]
    UnknownActivityLevel(String),

    #[error("unknown weight aim '{0}', expected one of: lose, maintain, gain")]
    UnknownAim(String),

    #[error("unknown weight unit '{0}', expected one of: kg, lbs, st")]
    UnknownWeightUnit(String),

    #[error("unknown height unit '{0}', expected one of: cm, m, in")]
    UnknownHeightUnit(String),

    #[error("a goal weight requires aim 'lose' or 'gain', not 'maintain'")]
    MaintainWithGoal,

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}
