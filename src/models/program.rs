//! Workout program model
//!
//! Multi-week training programs with a phase outline.

use serde::{Deserialize, Serialize};

use super::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramCategory {
    Strength,
    Cardio,
    Mobility,
}

impl ProgramCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramCategory::Strength => "strength",
            ProgramCategory::Cardio => "cardio",
            ProgramCategory::Mobility => "mobility",
        }
    }

    /// Parse a category name. "all" is not a category and yields `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Some(ProgramCategory::Strength),
            "cardio" => Some(ProgramCategory::Cardio),
            "mobility" => Some(ProgramCategory::Mobility),
            _ => None,
        }
    }
}

/// One block of weeks in a program ("Week 1-4: Volume Accumulation")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramPhase {
    pub title: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutProgram {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub level: Difficulty,
    pub duration_weeks: u32,
    pub days_per_week: u32,
    pub category: ProgramCategory,
    pub image: String,
    pub phases: Vec<ProgramPhase>,
}

impl WorkoutProgram {
    /// "12 Weeks"
    pub fn duration_label(&self) -> String {
        match self.duration_weeks {
            1 => "1 Week".to_string(),
            n => format!("{} Weeks", n),
        }
    }

    /// "6 days/week"
    pub fn frequency_label(&self) -> String {
        match self.days_per_week {
            1 => "1 day/week".to_string(),
            n => format!("{} days/week", n),
        }
    }

    pub fn total_sessions(&self) -> u32 {
        self.duration_weeks.saturating_mul(self.days_per_week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(weeks: u32, days: u32) -> WorkoutProgram {
        WorkoutProgram {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            long_description: String::new(),
            level: Difficulty::Beginner,
            duration_weeks: weeks,
            days_per_week: days,
            category: ProgramCategory::Strength,
            image: String::new(),
            phases: Vec::new(),
        }
    }

    #[test]
    fn test_labels() {
        let p = program(12, 6);
        assert_eq!(p.duration_label(), "12 Weeks");
        assert_eq!(p.frequency_label(), "6 days/week");
        assert_eq!(p.total_sessions(), 72);

        let p = program(1, 1);
        assert_eq!(p.duration_label(), "1 Week");
        assert_eq!(p.frequency_label(), "1 day/week");

        assert_eq!(program(100_000, 100_000).total_sessions(), u32::MAX);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(ProgramCategory::from_str("Cardio"), Some(ProgramCategory::Cardio));
        assert_eq!(ProgramCategory::from_str("all"), None);
    }
}
