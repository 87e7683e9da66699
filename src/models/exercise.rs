//! Exercise model
//!
//! Reference entries in the exercise library: target muscle, equipment,
//! difficulty and step-by-step instructions.

use serde::{Deserialize, Serialize};

/// Primary muscle group an exercise targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "chest" => Some(MuscleGroup::Chest),
            "back" => Some(MuscleGroup::Back),
            "legs" => Some(MuscleGroup::Legs),
            "shoulders" => Some(MuscleGroup::Shoulders),
            "arms" => Some(MuscleGroup::Arms),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Barbell,
    Dumbbells,
    Machine,
    Bodyweight,
}

impl Equipment {
    pub fn display_name(&self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Machine => "Machine",
            Equipment::Bodyweight => "Bodyweight",
        }
    }
}

/// Difficulty rating, shared by exercises and workout programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::AllLevels => "All Levels",
        }
    }
}

/// An exercise in the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub muscle: MuscleGroup,
    pub equipment: Equipment,
    pub difficulty: Difficulty,
    pub image: String,
    pub description: String,
    pub instructions: Vec<String>,
}

impl Exercise {
    /// Case-insensitive substring match on the name. The query is used as
    /// typed, whitespace included; an empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Muscle filter as sent by the library page: "all" or a muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MuscleFilter {
    #[default]
    All,
    Only(MuscleGroup),
}

impl MuscleFilter {
    pub fn from_str(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Some(MuscleFilter::All);
        }
        MuscleGroup::from_str(trimmed).map(MuscleFilter::Only)
    }

    pub fn accepts(&self, exercise: &Exercise) -> bool {
        match self {
            MuscleFilter::All => true,
            MuscleFilter::Only(muscle) => exercise.muscle == *muscle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bench() -> Exercise {
        Exercise {
            id: 1,
            name: "Barbell Bench Press".to_string(),
            muscle: MuscleGroup::Chest,
            equipment: Equipment::Barbell,
            difficulty: Difficulty::Intermediate,
            image: "bench_press_exercise_demonstration.png".to_string(),
            description: String::new(),
            instructions: Vec::new(),
        }
    }

    #[test]
    fn test_matches_query() {
        let ex = bench();
        assert!(ex.matches_query("bench"));
        assert!(ex.matches_query("BARBELL"));
        assert!(ex.matches_query(""));
        assert!(!ex.matches_query("squat"));

        assert!(ex.matches_query(" press"));
        assert!(!ex.matches_query(" barbell"));
        assert!(!ex.matches_query("press "));
    }

    #[test]
    fn test_muscle_filter() {
        let ex = bench();
        assert_eq!(MuscleFilter::from_str("all"), Some(MuscleFilter::All));
        assert_eq!(MuscleFilter::from_str(""), Some(MuscleFilter::All));
        assert_eq!(MuscleFilter::from_str("Chest"), Some(MuscleFilter::Only(MuscleGroup::Chest)));
        assert_eq!(MuscleFilter::from_str("neck"), None);

        assert!(MuscleFilter::All.accepts(&ex));
        assert!(MuscleFilter::Only(MuscleGroup::Chest).accepts(&ex));
        assert!(!MuscleFilter::Only(MuscleGroup::Legs).accepts(&ex));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Difficulty::AllLevels).unwrap();
        assert_eq!(json, "\"all_levels\"");
        let muscle: MuscleGroup = serde_json::from_str("\"shoulders\"").unwrap();
        assert_eq!(muscle, MuscleGroup::Shoulders);
    }
}
