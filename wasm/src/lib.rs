//! Calorie Planner WASM Module
//!
//! This crate provides WebAssembly bindings over the core estimator so the
//! calorie table can be produced directly in the browser, e.g. by a charting
//! frontend reading the `weight` and `calories` columns.

use calorie_planner_core::{estimator, Sex};
use wasm_bindgen::prelude::*;

/// Basal metabolic rate at a single weight (kcal/day)
#[wasm_bindgen]
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: f64, is_male: bool) -> f64 {
    let sex = if is_male { Sex::Male } else { Sex::Female };
    estimator::basal_metabolic_rate(weight_kg, height_cm, age_years, sex)
}

/// Compute the estimate table and return it as JSON.
///
/// `sex`, `activity_level` and `aim` take the same tokens as the core
/// boundary (`"male"`, `"moderately"`, `"gain"`, ...); passing a `goal_kg`
/// selects range mode. The result is `{"rows": [...], "advisories": [...]}`
/// with row columns `weight`, `bmr`, `tdee`, `calories`.
#[wasm_bindgen]
pub fn estimate_table_json(
    height_cm: f64,
    weight_kg: f64,
    age_years: f64,
    sex: &str,
    activity_level: &str,
    aim: &str,
    goal_kg: Option<f64>,
) -> Result<String, JsError> {
    let table = estimator::estimate_for(
        height_cm,
        weight_kg,
        age_years,
        sex,
        activity_level,
        aim,
        goal_kg,
    )
    .map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&table).map_err(|e| JsError::new(&e.to_string()))
}
