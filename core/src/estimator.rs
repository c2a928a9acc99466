//! BMR, TDEE and calorie-target estimation.
//!
//! The chain is three fixed formulas: a per-sex linear BMR model, a fixed
//! activity multiplier producing TDEE, and an aim adjustment producing the
//! daily calorie target. Applied once for a point estimate, or per
//! whole-kilogram step when walking toward a goal weight.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: every row is a deterministic function of the
//!    profile, no hidden state
//! 2. **Typed Boundary**: enumerations are rejected at parse time, the
//!    formulas never see strings
//! 3. **Advisory, not fatal**: implausible values warn and compute anyway

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::EstimateError;
use crate::profile::{ActivityLevel, EstimateMode, Profile, Sex, WeightAim};
use crate::validation::{self, Advisory};

// ============================================================================
// Result Types
// ============================================================================

/// One evaluated weight.
///
/// The serialized field names `weight`, `bmr`, `tdee`, `calories` are a wire
/// contract: charting consumers pick out the `weight` and `calories` columns
/// by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRow {
    /// Weight the row was evaluated at (kg)
    pub weight: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure, floored (kcal/day)
    pub tdee: i64,
    /// Daily calorie target for the aim (kcal/day)
    pub calories: i64,
}

/// Ordered estimation result.
///
/// Rows follow the walk from current weight toward the goal (one row in
/// point mode). Advisories raised while checking the profile ride along so
/// embedding callers can surface them; they are also logged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateTable {
    pub rows: Vec<EstimateRow>,
    pub advisories: Vec<Advisory>,
}

// ============================================================================
// Formulas
// ============================================================================

/// Basal metabolic rate at a given weight (kcal/day).
///
/// Per-sex linear model:
/// female: `655 + 9.6*w + 1.8*height - 4.7*age`
/// male:   `66 + 13.7*w + 5*height - 6.8*age`
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Female => 655.0 + 9.6 * weight_kg + 1.8 * height_cm - 4.7 * age_years,
        Sex::Male => 66.0 + 13.7 * weight_kg + 5.0 * height_cm - 6.8 * age_years,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier,
/// floored to whole kcal.
pub fn total_daily_energy(bmr: f64, activity_level: ActivityLevel) -> i64 {
    (bmr * activity_level.multiplier()).floor() as i64
}

/// Evaluate one weight with aim-adjusted calories.
fn aim_row(profile: &Profile, weight_kg: f64) -> EstimateRow {
    let bmr = basal_metabolic_rate(weight_kg, profile.height_cm, profile.age_years, profile.sex);
    let tdee = total_daily_energy(bmr, profile.activity_level);
    EstimateRow {
        weight: weight_kg,
        bmr,
        tdee,
        calories: profile.aim.target_calories(tdee),
    }
}

/// Evaluate the goal weight.
///
/// The goal row's calorie column is the maintenance target once the goal is
/// reached, so no aim adjustment is applied.
fn maintenance_row(profile: &Profile, weight_kg: f64) -> EstimateRow {
    let bmr = basal_metabolic_rate(weight_kg, profile.height_cm, profile.age_years, profile.sex);
    let tdee = total_daily_energy(bmr, profile.activity_level);
    EstimateRow {
        weight: weight_kg,
        bmr,
        tdee,
        calories: tdee,
    }
}

/// Whether the range walk emits an intermediate row at `w`.
///
/// Gain stops one step short of the goal. Lose runs one whole step past it,
/// reproducing the legacy table shape for output compatibility: ascending
/// steps up to `goal + 1`, with the goal row appended afterwards even though
/// it is numerically smaller than its predecessor.
fn keeps_stepping(aim: WeightAim, w: f64, goal_kg: f64) -> bool {
    match aim {
        WeightAim::Gain => w < goal_kg,
        WeightAim::Lose => w <= goal_kg + 1.0,
        WeightAim::Maintain => false,
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// Compute the estimate table for a profile.
///
/// This is the named-parameter calling style: construct a [`Profile`] and
/// pick an [`EstimateMode`]. See [`estimate_for`] for the positional style
/// over string enumerations.
///
/// # Errors
///
/// [`EstimateError::MaintainWithGoal`] when a goal weight is combined with
/// aim `maintain` (a maintain walk has no direction to step in), and
/// [`EstimateError::NonFinite`] for NaN or infinite numeric inputs. Nothing
/// is computed in either case.
pub fn estimate(profile: &Profile, mode: EstimateMode) -> Result<EstimateTable, EstimateError> {
    validation::require_finite("height", profile.height_cm)?;
    validation::require_finite("weight", profile.weight_kg)?;
    validation::require_finite("age", profile.age_years)?;
    if let EstimateMode::Range { goal_kg } = mode {
        validation::require_finite("goal weight", goal_kg)?;
        if profile.aim == WeightAim::Maintain {
            return Err(EstimateError::MaintainWithGoal);
        }
    }

    let advisories = validation::check_profile(profile);
    for advisory in &advisories {
        warn!(%advisory, "implausible profile value, computing anyway");
    }

    let rows = match mode {
        EstimateMode::Point => vec![aim_row(profile, profile.weight_kg)],
        EstimateMode::Range { goal_kg } => {
            debug!(
                start_kg = profile.weight_kg,
                goal_kg,
                aim = %profile.aim,
                "walking weight range"
            );
            let mut rows = Vec::new();
            let mut w = profile.weight_kg;
            while keeps_stepping(profile.aim, w, goal_kg) {
                rows.push(aim_row(profile, w));
                w += 1.0;
            }
            rows.push(maintenance_row(profile, goal_kg));
            rows
        }
    };

    Ok(EstimateTable { rows, advisories })
}

/// Positional calling style, matching the legacy signature.
///
/// Enumerations arrive as strings and are rejected at this boundary with a
/// typed error; a supplied `goal_kg` selects range mode.
pub fn estimate_for(
    height_cm: f64,
    weight_kg: f64,
    age_years: f64,
    sex: &str,
    activity_level: &str,
    aim: &str,
    goal_kg: Option<f64>,
) -> Result<EstimateTable, EstimateError> {
    let profile = Profile::new(
        height_cm,
        weight_kg,
        age_years,
        sex.parse()?,
        activity_level.parse()?,
        aim.parse()?,
    );
    let mode = match goal_kg {
        Some(goal_kg) => EstimateMode::Range { goal_kg },
        None => EstimateMode::Point,
    };
    estimate(&profile, mode)
}
