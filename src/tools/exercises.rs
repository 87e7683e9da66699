//! Exercise Library Tools
//!
//! Search and detail lookups over the exercise catalog.

use serde::Serialize;

use crate::catalog::CatalogProvider;
use crate::models::{Exercise, MuscleFilter};

/// Summary of an exercise for search results
#[derive(Debug, Serialize)]
pub struct ExerciseSummary {
    pub id: u32,
    pub name: String,
    pub muscle: String,
    pub equipment: String,
    pub difficulty: String,
    pub image: String,
}

impl From<&Exercise> for ExerciseSummary {
    fn from(ex: &Exercise) -> Self {
        Self {
            id: ex.id,
            name: ex.name.clone(),
            muscle: ex.muscle.display_name().to_string(),
            equipment: ex.equipment.display_name().to_string(),
            difficulty: ex.difficulty.display_name().to_string(),
            image: ex.image.clone(),
        }
    }
}

/// Response for search_exercises
#[derive(Debug, Serialize)]
pub struct SearchExercisesResponse {
    pub exercises: Vec<ExerciseSummary>,
    pub total: usize,
}

/// Full exercise detail with numbered steps
#[derive(Debug, Serialize)]
pub struct ExerciseDetail {
    pub id: u32,
    pub name: String,
    pub muscle: String,
    pub equipment: String,
    pub difficulty: String,
    pub image: String,
    pub description: String,
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Serialize)]
pub struct InstructionStep {
    pub step: usize,
    pub text: String,
}

impl From<&Exercise> for ExerciseDetail {
    fn from(ex: &Exercise) -> Self {
        Self {
            id: ex.id,
            name: ex.name.clone(),
            muscle: ex.muscle.display_name().to_string(),
            equipment: ex.equipment.display_name().to_string(),
            difficulty: ex.difficulty.display_name().to_string(),
            image: ex.image.clone(),
            description: ex.description.clone(),
            steps: ex
                .instructions
                .iter()
                .enumerate()
                .map(|(i, text)| InstructionStep {
                    step: i + 1,
                    text: text.clone(),
                })
                .collect(),
        }
    }
}

/// Search exercises by name and muscle group
pub fn search_exercises(
    catalog: &dyn CatalogProvider,
    query: Option<&str>,
    muscle: Option<&str>,
) -> Result<SearchExercisesResponse, String> {
    let filter = match muscle {
        Some(m) => MuscleFilter::from_str(m).ok_or_else(|| {
            format!(
                "Unknown muscle group '{}'. Use all, chest, back, legs, shoulders or arms",
                m
            )
        })?,
        None => MuscleFilter::All,
    };
    let query = query.unwrap_or("");

    let exercises: Vec<ExerciseSummary> = catalog
        .exercises()
        .iter()
        .filter(|ex| ex.matches_query(query) && filter.accepts(ex))
        .map(ExerciseSummary::from)
        .collect();

    let total = exercises.len();
    Ok(SearchExercisesResponse { exercises, total })
}

/// Get a single exercise by ID
pub fn get_exercise(catalog: &dyn CatalogProvider, id: u32) -> Option<ExerciseDetail> {
    catalog.exercise_by_id(id).map(ExerciseDetail::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(response: &SearchExercisesResponse) -> Vec<&str> {
        response.exercises.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_search_by_name() {
        let catalog = Catalog::builtin();
        let response = search_exercises(&catalog, Some("press"), None).unwrap();
        assert_eq!(names(&response), vec!["Barbell Bench Press", "Leg Press"]);
        assert_eq!(response.total, 2);
    }

    #[test]
    fn test_search_all() {
        let catalog = Catalog::builtin();
        let response = search_exercises(&catalog, None, Some("all")).unwrap();
        assert_eq!(response.total, 8);
    }

    #[test]
    fn test_search_by_muscle_and_name() {
        let catalog = Catalog::builtin();
        let response = search_exercises(&catalog, Some("ups"), Some("back")).unwrap();
        assert_eq!(names(&response), vec!["Pull Ups"]);

        let response = search_exercises(&catalog, None, Some("shoulders")).unwrap();
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_unknown_muscle() {
        let catalog = Catalog::builtin();
        assert!(search_exercises(&catalog, None, Some("neck")).is_err());
    }

    #[test]
    fn test_get_exercise() {
        let catalog = Catalog::builtin();
        let detail = get_exercise(&catalog, 2).unwrap();
        assert_eq!(detail.name, "Barbell Squat");
        assert_eq!(detail.muscle, "Legs");
        assert_eq!(detail.steps.len(), 4);
        assert_eq!(detail.steps[0].step, 1);
        assert_eq!(detail.steps[3].text, "Drive back up through your heels.");

        assert!(get_exercise(&catalog, 42).is_none());
    }
}
