//! Progress log model
//!
//! Read-only training history shown on the progress dashboard: a body weight
//! series, monthly one-rep maxes for the big three lifts, and recent personal
//! records. Weights are in pounds, as logged.

use serde::{Deserialize, Serialize};

/// One weigh-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Chart label, e.g. "Jan 8"
    pub date: String,
    pub weight_lb: f64,
}

/// Estimated one-rep maxes for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthEntry {
    /// Chart label, e.g. "Feb"
    pub date: String,
    pub bench_lb: u32,
    pub squat_lb: u32,
    pub deadlift_lb: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lift {
    Bench,
    Squat,
    Deadlift,
}

impl Lift {
    pub const ALL: [Lift; 3] = [Lift::Bench, Lift::Squat, Lift::Deadlift];

    pub fn display_name(&self) -> &'static str {
        match self {
            Lift::Bench => "Bench Press",
            Lift::Squat => "Squat",
            Lift::Deadlift => "Deadlift",
        }
    }
}

impl StrengthEntry {
    pub fn one_rep_max(&self, lift: Lift) -> u32 {
        match lift {
            Lift::Bench => self.bench_lb,
            Lift::Squat => self.squat_lb,
            Lift::Deadlift => self.deadlift_lb,
        }
    }
}

/// A personal best, displayed as logged ("275 lbs", "24:30")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub activity: String,
    /// ISO 8601 date
    pub date: String,
    pub value: String,
}

/// Everything the progress dashboard plots, oldest entry first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    #[serde(default)]
    pub weight: Vec<WeightEntry>,
    #[serde(default)]
    pub strength: Vec<StrengthEntry>,
    #[serde(default)]
    pub records: Vec<PersonalRecord>,
}

impl ProgressLog {
    /// Latest minus first weigh-in; `None` with fewer than two entries
    pub fn weight_change_lb(&self) -> Option<f64> {
        match (self.weight.first(), self.weight.last()) {
            (Some(first), Some(last)) if self.weight.len() > 1 => Some(last.weight_lb - first.weight_lb),
            _ => None,
        }
    }

    /// Gain in one-rep max between the first and latest period
    pub fn strength_gain_lb(&self, lift: Lift) -> Option<i64> {
        match (self.strength.first(), self.strength.last()) {
            (Some(first), Some(last)) if self.strength.len() > 1 => {
                Some(i64::from(last.one_rep_max(lift)) - i64::from(first.one_rep_max(lift)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weigh_in(date: &str, weight_lb: f64) -> WeightEntry {
        WeightEntry {
            date: date.to_string(),
            weight_lb,
        }
    }

    fn month(date: &str, bench: u32, squat: u32, deadlift: u32) -> StrengthEntry {
        StrengthEntry {
            date: date.to_string(),
            bench_lb: bench,
            squat_lb: squat,
            deadlift_lb: deadlift,
        }
    }

    #[test]
    fn test_weight_change() {
        let mut log = ProgressLog::default();
        assert_eq!(log.weight_change_lb(), None);

        log.weight.push(weigh_in("Jan 1", 185.0));
        assert_eq!(log.weight_change_lb(), None);

        log.weight.push(weigh_in("Jan 8", 182.5));
        assert!((log.weight_change_lb().unwrap() + 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_strength_gain() {
        let log = ProgressLog {
            strength: vec![month("Jan", 135, 185, 225), month("Feb", 130, 205, 245)],
            ..Default::default()
        };
        assert_eq!(log.strength_gain_lb(Lift::Bench), Some(-5));
        assert_eq!(log.strength_gain_lb(Lift::Squat), Some(20));
        assert_eq!(ProgressLog::default().strength_gain_lb(Lift::Deadlift), None);
    }

    #[test]
    fn test_partial_json() {
        let log: ProgressLog =
            serde_json::from_str(r#"{"weight": [{"date": "Jan 1", "weight_lb": 185}]}"#).unwrap();
        assert_eq!(log.weight.len(), 1);
        assert!(log.strength.is_empty());
        assert!(log.records.is_empty());
    }
}
