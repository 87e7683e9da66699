//! FitPulse MCP Server Implementation
//!
//! Implements the MCP server with all FitPulse tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::CatalogProvider;
use crate::models::CalculatorForm;
use crate::tools::status::StatusTracker;
use crate::tools::{calculator, exercises, progress, workouts};

/// FitPulse MCP Service
#[derive(Clone)]
pub struct FitPulseService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    catalog: Arc<dyn CatalogProvider>,
    tool_router: ToolRouter<FitPulseService>,
}

impl FitPulseService {
    pub fn new(catalog: Arc<dyn CatalogProvider>, catalog_source: impl Into<String>) -> Self {
        let tracker = StatusTracker::new(
            catalog_source,
            catalog.exercises().len(),
            catalog.programs().len(),
        );
        Self {
            status_tracker: Arc::new(Mutex::new(tracker)),
            catalog,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

/// A form value sent either as text or as a JSON number
#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    fn into_text(self) -> String {
        match self {
            FormValue::Number(n) => n.to_string(),
            FormValue::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateNutritionParams {
    /// Age in whole years
    pub age: FormValue,
    /// "male" or "female"
    pub sex: String,
    /// Body weight in kilograms
    pub weight_kg: FormValue,
    /// Height in centimeters
    pub height_cm: FormValue,
    /// Activity level name (sedentary, light, moderate, heavy, athlete) or multiplier (1.2, 1.375, 1.55, 1.725, 1.9)
    pub activity: FormValue,
    /// "cut", "maintain" or "bulk"
    #[serde(default = "default_goal")]
    pub goal: String,
}

fn default_goal() -> String { "maintain".to_string() }

impl From<CalculateNutritionParams> for CalculatorForm {
    fn from(p: CalculateNutritionParams) -> Self {
        Self {
            age: p.age.into_text(),
            sex: p.sex,
            weight_kg: p.weight_kg.into_text(),
            height_cm: p.height_cm.into_text(),
            activity: p.activity.into_text(),
            goal: p.goal,
        }
    }
}

// ============================================================================
// Catalog Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchExercisesParams {
    /// Case-insensitive substring of the exercise name (optional)
    pub query: Option<String>,
    /// Muscle group: all, chest, back, legs, shoulders, arms (default all)
    pub muscle: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetExerciseParams {
    /// Exercise ID
    pub id: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListWorkoutsParams {
    /// Category: all, strength, cardio, mobility (default all)
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetWorkoutParams {
    /// Workout program ID
    pub id: u32,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitPulseService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitPulse service including build info, catalog size, calculator usage, and process information")]
    async fn fitpulse_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for the nutrition calculator: accepted inputs, activity levels, goals, and how to read the output. Call this before the first calculation.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "Calculate BMR, TDEE, a goal-adjusted daily calorie target, and protein/fat/carb grams (Mifflin-St Jeor). Weight in kg, height in cm. Invalid fields are returned in a 'fields' list.")]
    async fn calculate_nutrition(&self, Parameters(p): Parameters<CalculateNutritionParams>) -> Result<CallToolResult, McpError> {
        let form = CalculatorForm::from(p);
        let result = calculator::calculate_nutrition(&form);
        self.status_tracker.lock().await.record_calculation(result.is_ok());

        let json = match result {
            Ok(response) => to_json(&response)?,
            Err(failure) => to_json(&failure)?,
        };
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List accepted values for sex, activity level (with multipliers), and goal (with calorie adjustments)")]
    fn list_calculator_options(&self) -> Result<CallToolResult, McpError> {
        let json = to_json(&calculator::list_calculator_options())?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Exercises ---

    #[tool(description = "Search the exercise library by name and/or muscle group")]
    fn search_exercises(&self, Parameters(p): Parameters<SearchExercisesParams>) -> Result<CallToolResult, McpError> {
        let result = exercises::search_exercises(self.catalog.as_ref(), p.query.as_deref(), p.muscle.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = to_json(&result)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get full exercise details including description and step-by-step instructions")]
    fn get_exercise(&self, Parameters(p): Parameters<GetExerciseParams>) -> Result<CallToolResult, McpError> {
        let json = match exercises::get_exercise(self.catalog.as_ref(), p.id) {
            Some(detail) => to_json(&detail)?,
            None => format!(r#"{{"error": "Exercise not found", "id": {}}}"#, p.id),
        };
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Workouts ---

    #[tool(description = "List workout programs, optionally filtered by category")]
    fn list_workouts(&self, Parameters(p): Parameters<ListWorkoutsParams>) -> Result<CallToolResult, McpError> {
        let result = workouts::list_workouts(self.catalog.as_ref(), p.category.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = to_json(&result)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get full workout program details including the week-by-week phase outline")]
    fn get_workout(&self, Parameters(p): Parameters<GetWorkoutParams>) -> Result<CallToolResult, McpError> {
        let json = match workouts::get_workout(self.catalog.as_ref(), p.id) {
            Some(detail) => to_json(&detail)?,
            None => format!(r#"{{"error": "Workout program not found", "id": {}}}"#, p.id),
        };
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Progress ---

    #[tool(description = "Get the progress dashboard: weekly body weight (lb), monthly one-rep maxes for bench, squat and deadlift (lb) with gains, and recent personal records")]
    fn get_progress(&self) -> Result<CallToolResult, McpError> {
        let json = to_json(&progress::get_progress(self.catalog.as_ref()))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitPulseService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitpulse".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FitPulse".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitPulse - Nutrition targets and training reference data. \
                 Call calculator_instructions before the first calculation. \
                 Calculator: calculate_nutrition, list_calculator_options. \
                 Exercises: search_exercises, get_exercise. \
                 Workouts: list_workouts, get_workout. \
                 Progress: get_progress. \
                 Status: fitpulse_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_value_text() {
        assert_eq!(FormValue::Number(75.0).into_text(), "75");
        assert_eq!(FormValue::Number(1.55).into_text(), "1.55");
        assert_eq!(FormValue::Text("abc".into()).into_text(), "abc");
    }

    #[test]
    fn test_params_accept_numbers_and_strings() {
        let params: CalculateNutritionParams = serde_json::from_str(
            r#"{"age": 25, "sex": "male", "weight_kg": "75", "height_cm": 180, "activity": 1.2}"#,
        )
        .unwrap();
        let form = CalculatorForm::from(params);
        assert_eq!(form.age, "25");
        assert_eq!(form.weight_kg, "75");
        assert_eq!(form.activity, "1.2");
        assert_eq!(form.goal, "maintain");

        let input = form.validate().unwrap();
        assert_eq!(crate::nutrition::estimate(&input).tdee, 2106);
    }

    #[test]
    fn test_get_progress_tool() {
        use crate::catalog::Catalog;

        let service = FitPulseService::new(Arc::new(Catalog::builtin()), "built-in");
        let result = service.get_progress().unwrap();
        let value = serde_json::to_value(&result).unwrap();
        let text = value["content"][0]["text"].as_str().unwrap();
        let body: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(body["weight_unit"], "lb");
        assert_eq!(body["strength_gains"][2]["gain_lb"], 50);
        assert_eq!(body["records"].as_array().unwrap().len(), 3);
    }
}
