//! Nutrition Calculator Tools
//!
//! Validates raw calculator input and runs the energy estimator.

use serde::Serialize;

use crate::models::{ActivityLevel, CalculatorForm, Goal, ValidationErrors};
use crate::nutrition::{estimate, EstimatorResult};

// ============================================================================
// Response Structs
// ============================================================================

/// Echo of the validated input, with display labels
#[derive(Debug, Serialize)]
pub struct InputSummary {
    pub age: u32,
    pub sex: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: String,
    pub activity_factor: f64,
    pub activity_label: String,
    pub goal: String,
    pub goal_label: String,
}

/// Response for calculate_nutrition
#[derive(Debug, Serialize)]
pub struct CalculateNutritionResponse {
    pub input: InputSummary,
    #[serde(flatten)]
    pub result: EstimatorResult,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FieldErrorDetail {
    pub field: String,
    pub message: String,
}

/// Response for calculate_nutrition when validation fails
#[derive(Debug, Serialize)]
pub struct ValidationFailedResponse {
    pub error: String,
    pub fields: Vec<FieldErrorDetail>,
}

impl From<ValidationErrors> for ValidationFailedResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            error: "Invalid calculator input".to_string(),
            fields: errors
                .iter()
                .map(|e| FieldErrorDetail {
                    field: e.field().to_string(),
                    message: e.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityLevelOption {
    pub value: &'static str,
    pub factor: f64,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GoalOption {
    pub value: &'static str,
    pub adjustment_kcal: f64,
    pub label: &'static str,
}

/// Response for list_calculator_options
#[derive(Debug, Serialize)]
pub struct CalculatorOptionsResponse {
    pub sexes: Vec<&'static str>,
    pub activity_levels: Vec<ActivityLevelOption>,
    pub goals: Vec<GoalOption>,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Validate the form and estimate energy needs
pub fn calculate_nutrition(
    form: &CalculatorForm,
) -> Result<CalculateNutritionResponse, ValidationFailedResponse> {
    let input = form.validate().map_err(|errors| {
        tracing::debug!("Calculator input rejected: {}", errors);
        ValidationFailedResponse::from(errors)
    })?;

    let result = estimate(&input);

    Ok(CalculateNutritionResponse {
        input: InputSummary {
            age: input.age(),
            sex: input.sex().as_str().to_string(),
            weight_kg: input.weight_kg(),
            height_cm: input.height_cm(),
            activity: input.activity().as_str().to_string(),
            activity_factor: input.activity().factor(),
            activity_label: input.activity().display_name().to_string(),
            goal: input.goal().as_str().to_string(),
            goal_label: input.goal().display_name().to_string(),
        },
        result,
    })
}

/// Accepted values for the enumerated calculator fields
pub fn list_calculator_options() -> CalculatorOptionsResponse {
    CalculatorOptionsResponse {
        sexes: vec!["male", "female"],
        activity_levels: ActivityLevel::ALL
            .iter()
            .map(|level| ActivityLevelOption {
                value: level.as_str(),
                factor: level.factor(),
                label: level.display_name(),
            })
            .collect(),
        goals: Goal::ALL
            .iter()
            .map(|goal| GoalOption {
                value: goal.as_str(),
                adjustment_kcal: goal.adjustment(),
                label: goal.display_name(),
            })
            .collect(),
    }
}
