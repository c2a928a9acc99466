//! Calorie Planner core library
//!
//! Computes basal metabolic rate (BMR), total daily energy expenditure
//! (TDEE) and a daily calorie target for a stated weight aim, either at a
//! single weight or as a table over every whole-kilogram step from a current
//! weight toward a goal weight.
//!
//! Two calling styles are supported:
//!
//! ```
//! use calorie_planner_core::{
//!     estimate, estimate_for, ActivityLevel, EstimateMode, Profile, Sex, WeightAim,
//! };
//!
//! // named: build a typed profile
//! let profile = Profile::new(182.0, 84.0, 23.0, Sex::Male, ActivityLevel::ModeratelyActive, WeightAim::Gain);
//! let table = estimate(&profile, EstimateMode::Range { goal_kg: 89.0 }).unwrap();
//! assert_eq!(table.rows.len(), 6);
//!
//! // positional: strings parsed at the boundary
//! let table = estimate_for(182.0, 84.0, 23.0, "male", "moderately", "gain", None).unwrap();
//! assert_eq!(table.rows[0].calories, 3354);
//! ```

pub mod errors;
pub mod estimator;
pub mod profile;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use estimator::*;
pub use profile::*;
pub use units::*;

pub use validation::Advisory;
