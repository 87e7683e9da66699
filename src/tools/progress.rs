//! Progress Dashboard Tools
//!
//! Body weight trend, strength progress and personal records.

use serde::Serialize;

use crate::catalog::CatalogProvider;
use crate::models::{Lift, PersonalRecord, StrengthEntry, WeightEntry};

/// Change in one lift's one-rep max over the logged periods
#[derive(Debug, Serialize)]
pub struct LiftGain {
    pub lift: Lift,
    pub name: &'static str,
    pub first_lb: u32,
    pub latest_lb: u32,
    pub gain_lb: i64,
}

/// Response for get_progress
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub weight_unit: &'static str,
    pub weight: Vec<WeightEntry>,
    pub latest_weight_lb: Option<f64>,
    pub weight_change_lb: Option<f64>,
    pub strength: Vec<StrengthEntry>,
    pub strength_gains: Vec<LiftGain>,
    pub records: Vec<PersonalRecord>,
}

pub fn get_progress(catalog: &dyn CatalogProvider) -> ProgressResponse {
    let log = catalog.progress();

    let strength_gains = match (log.strength.first(), log.strength.last()) {
        (Some(first), Some(latest)) => Lift::ALL
            .iter()
            .map(|&lift| LiftGain {
                lift,
                name: lift.display_name(),
                first_lb: first.one_rep_max(lift),
                latest_lb: latest.one_rep_max(lift),
                gain_lb: log.strength_gain_lb(lift).unwrap_or(0),
            })
            .collect(),
        _ => Vec::new(),
    };

    ProgressResponse {
        weight_unit: "lb",
        weight: log.weight.clone(),
        latest_weight_lb: log.weight.last().map(|w| w.weight_lb),
        weight_change_lb: log.weight_change_lb(),
        strength: log.strength.clone(),
        strength_gains,
        records: log.records.clone(),
    }
}
