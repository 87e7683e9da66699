//! Nutrition calculation module
//!
//! Energy expenditure and macronutrient targets.

pub mod estimator;

pub use estimator::{
    energy_breakdown, estimate, macros_for, EnergyBreakdown, EstimatorResult, MacroSplit, Macros,
};
