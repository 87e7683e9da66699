//! Energy and macronutrient estimator
//!
//! Mifflin-St Jeor BMR, activity-scaled TDEE, a goal-adjusted calorie target
//! and a fixed-split macronutrient breakdown.
//!
//! Rounding uses `f64::round` (half away from zero). Each reported quantity is
//! rounded from its own unrounded value: TDEE is scaled from the unrounded BMR
//! and macros are split from the unrounded target.

use serde::Serialize;

use crate::models::EstimatorInput;

// ============================================================================
// Macro Split Constants
// ============================================================================

/// Share of target calories from protein
pub const PROTEIN_SHARE: f64 = 0.30;
/// Share of target calories from fat
pub const FAT_SHARE: f64 = 0.25;
/// Share of target calories from carbohydrate
pub const CARBS_SHARE: f64 = 0.45;

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Unrounded intermediate values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyBreakdown {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Macros {
    pub protein_g: i64,
    pub fat_g: i64,
    pub carbs_g: i64,
}

/// Percent of calories per macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroSplit {
    pub protein_pct: u8,
    pub fat_pct: u8,
    pub carbs_pct: u8,
}

impl MacroSplit {
    pub const STANDARD: MacroSplit = MacroSplit {
        protein_pct: 30,
        fat_pct: 25,
        carbs_pct: 45,
    };
}

/// Result of one estimator run, all kcal/day values rounded to whole numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimatorResult {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub macros: Macros,
    pub split: MacroSplit,
}

/// BMR, TDEE and goal target before rounding
pub fn energy_breakdown(input: &EstimatorInput) -> EnergyBreakdown {
    let base = 10.0 * input.weight_kg() + 6.25 * input.height_cm() - 5.0 * f64::from(input.age());
    let bmr = base + input.sex().bmr_offset();
    let tdee = bmr * input.activity().factor();
    let target_calories = tdee + input.goal().adjustment();

    EnergyBreakdown {
        bmr,
        tdee,
        target_calories,
    }
}

/// Split a calorie target into macro grams.
///
/// A target at or below zero yields zero grams of each macro; the target
/// itself is reported as computed.
pub fn macros_for(target_calories: f64) -> Macros {
    Macros {
        protein_g: grams(target_calories, PROTEIN_SHARE, KCAL_PER_G_PROTEIN),
        fat_g: grams(target_calories, FAT_SHARE, KCAL_PER_G_FAT),
        carbs_g: grams(target_calories, CARBS_SHARE, KCAL_PER_G_CARBS),
    }
}

/// Estimate daily energy needs and macro targets
pub fn estimate(input: &EstimatorInput) -> EstimatorResult {
    let energy = energy_breakdown(input);

    EstimatorResult {
        bmr: round_kcal(energy.bmr),
        tdee: round_kcal(energy.tdee),
        target_calories: round_kcal(energy.target_calories),
        macros: macros_for(energy.target_calories),
        split: MacroSplit::STANDARD,
    }
}

fn round_kcal(value: f64) -> i64 {
    value.round() as i64
}

fn grams(target_calories: f64, share: f64, kcal_per_g: f64) -> i64 {
    round_kcal(target_calories * share / kcal_per_g).max(0)
}
