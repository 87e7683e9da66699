//! Data models
//!
//! Calculator input types, catalog records and the progress log.

mod exercise;
mod profile;
mod program;
mod progress;
mod validation;

pub use exercise::{Difficulty, Equipment, Exercise, MuscleFilter, MuscleGroup};
pub use profile::{ActivityLevel, CalculatorForm, EstimatorInput, Goal, Sex};
pub use program::{ProgramCategory, ProgramPhase, WorkoutProgram};
pub use progress::{Lift, PersonalRecord, ProgressLog, StrengthEntry, WeightEntry};
pub use validation::{Field, ValidationError, ValidationErrors};
