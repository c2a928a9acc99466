//! Personal profile types used by the estimator.
//!
//! All enumerations are closed sum types rejected at the parse boundary with
//! a typed error; downstream code never compares strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EstimateError;
use crate::units::{HeightUnit, WeightUnit};

// ============================================================================
// Enumerations
// ============================================================================

/// Biological sex for the BMR formula.
/// Note: this is used for physiological calculations only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl FromStr for Sex {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            _ => Err(EstimateError::UnknownSex(s.to_string())),
        }
    }
}

/// Activity level scaling BMR up to a daily expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(rename = "lightly")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(rename = "moderately")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(rename = "very")]
    VeryActive,
    /// Very hard exercise, physical job
    #[serde(rename = "extremely")]
    ExtremelyActive,
}

impl ActivityLevel {
    /// Fixed multiplier applied to BMR to obtain TDEE.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtremelyActive => "Very hard exercise or physical job",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly" => Ok(ActivityLevel::LightlyActive),
            "moderately" => Ok(ActivityLevel::ModeratelyActive),
            "very" => Ok(ActivityLevel::VeryActive),
            "extremely" => Ok(ActivityLevel::ExtremelyActive),
            _ => Err(EstimateError::UnknownActivityLevel(s.to_string())),
        }
    }
}

/// Desired weight-change direction, adjusting the calorie target relative
/// to TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightAim {
    Lose,
    Maintain,
    Gain,
}

impl WeightAim {
    /// Daily calorie target at the given expenditure.
    ///
    /// Gain eats a 300 kcal surplus, lose a 20% deficit (floored), maintain
    /// the expenditure itself.
    pub fn target_calories(&self, tdee: i64) -> i64 {
        match self {
            WeightAim::Gain => tdee + 300,
            WeightAim::Lose => (tdee as f64 * 0.8).floor() as i64,
            WeightAim::Maintain => tdee,
        }
    }
}

impl FromStr for WeightAim {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(WeightAim::Lose),
            "maintain" => Ok(WeightAim::Maintain),
            "gain" => Ok(WeightAim::Gain),
            _ => Err(EstimateError::UnknownAim(s.to_string())),
        }
    }
}

impl fmt::Display for WeightAim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WeightAim::Lose => "lose",
            WeightAim::Maintain => "maintain",
            WeightAim::Gain => "gain",
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Personal parameters the estimate is a pure function of.
///
/// Stored in SI units; conversion happens at construction, never in the
/// formulas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Current weight in kilograms (start of the range when a goal is given)
    pub weight_kg: f64,
    /// Age in years
    pub age_years: f64,
    /// Biological sex for the BMR formula
    pub sex: Sex,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
    /// Weight aim adjusting the calorie target
    pub aim: WeightAim,
}

impl Profile {
    /// Profile from SI values.
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        age_years: f64,
        sex: Sex,
        activity_level: ActivityLevel,
        aim: WeightAim,
    ) -> Self {
        Self {
            height_cm,
            weight_kg,
            age_years,
            sex,
            activity_level,
            aim,
        }
    }

    /// Profile from measurements in arbitrary supported units.
    ///
    /// The plausibility advisories exist mostly to catch unit mix-ups
    /// (pounds passed as kilograms); converting here removes the mix-up at
    /// the source.
    #[allow(clippy::too_many_arguments)]
    pub fn from_units(
        height: f64,
        height_unit: HeightUnit,
        weight: f64,
        weight_unit: WeightUnit,
        age_years: f64,
        sex: Sex,
        activity_level: ActivityLevel,
        aim: WeightAim,
    ) -> Self {
        Self::new(
            height_unit.to_cm(height),
            weight_unit.to_kg(weight),
            age_years,
            sex,
            activity_level,
            aim,
        )
    }
}

// ============================================================================
// Estimate Mode
// ============================================================================

/// Row-producing branch of an estimate.
///
/// An explicit variant rather than an optional goal parameter, so the two
/// shapes of output cannot be conflated by a missed null check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimateMode {
    /// One row, evaluated at the profile weight.
    Point,
    /// One row per whole-kilogram step from the profile weight toward the
    /// goal, plus a final row at the goal weight itself.
    Range { goal_kg: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1.2)]
    #[case(ActivityLevel::LightlyActive, 1.375)]
    #[case(ActivityLevel::ModeratelyActive, 1.55)]
    #[case(ActivityLevel::VeryActive, 1.725)]
    #[case(ActivityLevel::ExtremelyActive, 1.9)]
    fn activity_multipliers(#[case] level: ActivityLevel, #[case] expected: f64) {
        assert_eq!(level.multiplier(), expected);
    }

    #[rstest]
    #[case(WeightAim::Gain, 3054, 3354)]
    #[case(WeightAim::Maintain, 3054, 3054)]
    #[case(WeightAim::Lose, 1977, 1581)] // floor(1977 * 0.8)
    fn aim_adjustments(#[case] aim: WeightAim, #[case] tdee: i64, #[case] expected: i64) {
        assert_eq!(aim.target_calories(tdee), expected);
    }

    #[test]
    fn lose_target_floors_the_deficit() {
        // 2001 * 0.8 = 1600.8
        assert_eq!(WeightAim::Lose.target_calories(2001), 1600);
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("MALE".parse::<Sex>().unwrap(), Sex::Male);
        assert!(matches!(
            "other".parse::<Sex>(),
            Err(EstimateError::UnknownSex(_))
        ));
    }

    #[test]
    fn test_activity_parsing() {
        assert_eq!(
            "lightly".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::LightlyActive
        );
        assert_eq!(
            "Extremely".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ExtremelyActive
        );
        // "active" is not one of the five recognized levels
        assert!(matches!(
            "active".parse::<ActivityLevel>(),
            Err(EstimateError::UnknownActivityLevel(_))
        ));
    }

    #[test]
    fn test_aim_parsing() {
        assert_eq!("lose".parse::<WeightAim>().unwrap(), WeightAim::Lose);
        assert_eq!("Gain".parse::<WeightAim>().unwrap(), WeightAim::Gain);
        assert!(matches!(
            "bulk".parse::<WeightAim>(),
            Err(EstimateError::UnknownAim(_))
        ));
    }

    #[test]
    fn wire_tokens_match_the_contract() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"female\"");
        assert_eq!(
            serde_json::to_string(&ActivityLevel::ModeratelyActive).unwrap(),
            "\"moderately\""
        );
        assert_eq!(
            serde_json::to_string(&WeightAim::Maintain).unwrap(),
            "\"maintain\""
        );
        // and back in
        assert_eq!(
            serde_json::from_str::<ActivityLevel>("\"very\"").unwrap(),
            ActivityLevel::VeryActive
        );
    }

    #[test]
    fn test_from_units() {
        let profile = Profile::from_units(
            72.0,
            HeightUnit::Inches,
            185.0,
            WeightUnit::Lbs,
            30.0,
            Sex::Male,
            ActivityLevel::ModeratelyActive,
            WeightAim::Maintain,
        );
        assert!((profile.height_cm - 182.88).abs() < 0.01);
        assert!((profile.weight_kg - 83.91).abs() < 0.01);
    }
}
