//! Workout Program Tools

use serde::Serialize;

use crate::catalog::CatalogProvider;
use crate::models::{ProgramCategory, ProgramPhase, WorkoutProgram};

/// Program card for list results
#[derive(Debug, Serialize)]
pub struct WorkoutSummary {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub level: String,
    pub duration: String,
    pub frequency: String,
    pub category: String,
    pub image: String,
}

impl From<&WorkoutProgram> for WorkoutSummary {
    fn from(p: &WorkoutProgram) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone(),
            level: p.level.display_name().to_string(),
            duration: p.duration_label(),
            frequency: p.frequency_label(),
            category: p.category.as_str().to_string(),
            image: p.image.clone(),
        }
    }
}

/// Response for list_workouts
#[derive(Debug, Serialize)]
pub struct ListWorkoutsResponse {
    pub programs: Vec<WorkoutSummary>,
    pub total: usize,
}

/// Full program detail
#[derive(Debug, Serialize)]
pub struct WorkoutDetail {
    #[serde(flatten)]
    pub summary: WorkoutSummary,
    pub long_description: String,
    pub duration_weeks: u32,
    pub days_per_week: u32,
    pub total_sessions: u32,
    pub phases: Vec<ProgramPhase>,
}

/// List programs, optionally limited to one category ("all" means no filter)
pub fn list_workouts(
    catalog: &dyn CatalogProvider,
    category: Option<&str>,
) -> Result<ListWorkoutsResponse, String> {
    let category = match category.map(str::trim) {
        None | Some("") => None,
        Some(c) if c.eq_ignore_ascii_case("all") => None,
        Some(c) => Some(ProgramCategory::from_str(c).ok_or_else(|| {
            format!("Unknown category '{}'. Use all, strength, cardio or mobility", c)
        })?),
    };

    let programs: Vec<WorkoutSummary> = catalog
        .programs()
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .map(WorkoutSummary::from)
        .collect();

    let total = programs.len();
    Ok(ListWorkoutsResponse { programs, total })
}

/// Get a single program by ID
pub fn get_workout(catalog: &dyn CatalogProvider, id: u32) -> Option<WorkoutDetail> {
    catalog.program_by_id(id).map(|p| WorkoutDetail {
        summary: WorkoutSummary::from(p),
        long_description: p.long_description.clone(),
        duration_weeks: p.duration_weeks,
        days_per_week: p.days_per_week,
        total_sessions: p.total_sessions(),
        phases: p.phases.clone(),
    })
}
