//! Catalog module
//!
//! Read-only exercise, workout program and progress data behind a provider trait.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Exercise, ProgressLog, WorkoutProgram};

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("Program {id} has an invalid schedule: {duration_weeks} weeks, {days_per_week} days/week")]
    InvalidSchedule {
        id: u32,
        duration_weeks: u32,
        days_per_week: u32,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Longest program accepted from a catalog file, in weeks
pub const MAX_PROGRAM_WEEKS: u32 = 104;
/// A week has seven training days at most
pub const MAX_DAYS_PER_WEEK: u32 = 7;

/// Read-only lookup of reference records by id
pub trait CatalogProvider: Send + Sync {
    fn exercises(&self) -> &[Exercise];

    fn programs(&self) -> &[WorkoutProgram];

    fn progress(&self) -> &ProgressLog;

    fn exercise_by_id(&self, id: u32) -> Option<&Exercise> {
        self.exercises().iter().find(|e| e.id == id)
    }

    fn program_by_id(&self, id: u32) -> Option<&WorkoutProgram> {
        self.programs().iter().find(|p| p.id == id)
    }
}

/// In-memory catalog, either built in or loaded from a JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    exercises: Vec<Exercise>,
    #[serde(default)]
    programs: Vec<WorkoutProgram>,
    #[serde(default)]
    progress: ProgressLog,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>, programs: Vec<WorkoutProgram>) -> CatalogResult<Self> {
        check_unique("exercise", exercises.iter().map(|e| e.id))?;
        check_unique("program", programs.iter().map(|p| p.id))?;
        for program in &programs {
            check_schedule(program)?;
        }
        Ok(Self {
            exercises,
            programs,
            progress: ProgressLog::default(),
        })
    }

    pub fn with_progress(mut self, progress: ProgressLog) -> Self {
        self.progress = progress;
        self
    }

    /// The fixed library shipped with the server
    pub fn builtin() -> Self {
        Self {
            exercises: builtin::exercises(),
            programs: builtin::programs(),
            progress: builtin::progress(),
        }
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let parsed: Catalog = serde_json::from_str(json)?;
        Ok(Self::new(parsed.exercises, parsed.programs)?.with_progress(parsed.progress))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl CatalogProvider for Catalog {
    fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    fn programs(&self) -> &[WorkoutProgram] {
        &self.programs
    }

    fn progress(&self) -> &ProgressLog {
        &self.progress
    }
}

fn check_unique(kind: &'static str, ids: impl Iterator<Item = u32>) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

fn check_schedule(program: &WorkoutProgram) -> CatalogResult<()> {
    let weeks_ok = (1..=MAX_PROGRAM_WEEKS).contains(&program.duration_weeks);
    let days_ok = (1..=MAX_DAYS_PER_WEEK).contains(&program.days_per_week);
    if weeks_ok && days_ok {
        Ok(())
    } else {
        Err(CatalogError::InvalidSchedule {
            id: program.id,
            duration_weeks: program.duration_weeks,
            days_per_week: program.days_per_week,
        })
    }
}
