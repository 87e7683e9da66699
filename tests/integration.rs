//! End-to-end checks through the public library API

use std::io::Write;

use fitpulse::catalog::{Catalog, CatalogError, CatalogProvider};
use fitpulse::config::ServerConfig;
use fitpulse::models::{CalculatorForm, Field, ValidationError};
use fitpulse::nutrition::estimate;
use fitpulse::tools::{exercises, progress, workouts};

fn form(sex: &str, age: &str, weight: &str, height: &str, activity: &str, goal: &str) -> CalculatorForm {
    CalculatorForm {
        age: age.to_string(),
        sex: sex.to_string(),
        weight_kg: weight.to_string(),
        height_cm: height.to_string(),
        activity: activity.to_string(),
        goal: goal.to_string(),
    }
}

#[test]
fn form_to_result_scenarios() {
    let maintain = estimate(&form("male", "25", "75", "180", "1.2", "maintain").validate().unwrap());
    assert_eq!((maintain.bmr, maintain.tdee, maintain.target_calories), (1755, 2106, 2106));
    assert_eq!(
        (maintain.macros.protein_g, maintain.macros.fat_g, maintain.macros.carbs_g),
        (158, 59, 237)
    );

    let cut = estimate(&form("male", "25", "75", "180", "1.2", "cut").validate().unwrap());
    assert_eq!(cut.target_calories, 1606);

    let bulk = estimate(&form("male", "25", "75", "180", "1.2", "bulk").validate().unwrap());
    assert_eq!(bulk.target_calories, 2606);

    let female = estimate(&form("female", "30", "60", "165", "1.55", "maintain").validate().unwrap());
    assert_eq!((female.bmr, female.tdee), (1320, 2046));
}

#[test]
fn invalid_weight_never_reaches_estimator() {
    let errors = form("male", "25", "-5", "180", "1.2", "maintain").validate().unwrap_err();
    assert_eq!(errors.errors(), &[ValidationError::NotPositive { field: Field::Weight }]);
}

#[test]
fn json_catalog_file_replaces_builtin() {
    let json = r#"{
        "exercises": [{
            "id": 10,
            "name": "Overhead Press",
            "muscle": "shoulders",
            "equipment": "barbell",
            "difficulty": "intermediate",
            "image": "ohp.png",
            "description": "Standing barbell press.",
            "instructions": ["Brace.", "Press overhead.", "Lower under control."]
        }],
        "programs": [{
            "id": 7,
            "title": "Rowing Base",
            "description": "Aerobic base on the erg.",
            "long_description": "Steady-state rowing blocks.",
            "level": "all_levels",
            "duration_weeks": 4,
            "days_per_week": 3,
            "category": "cardio",
            "image": "row.png",
            "phases": [{"title": "Week 1-4", "focus": "Steady State"}]
        }],
        "progress": {
            "weight": [
                {"date": "Mar 1", "weight_lb": 200},
                {"date": "Mar 8", "weight_lb": 198.5}
            ]
        }
    }"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let config = ServerConfig {
        catalog_path: Some(file.path().to_path_buf()),
    };
    let catalog = config.load_catalog().unwrap();

    assert_eq!(catalog.exercises().len(), 1);
    let found = exercises::search_exercises(&catalog, None, Some("shoulders")).unwrap();
    assert_eq!(found.exercises[0].name, "Overhead Press");

    let detail = workouts::get_workout(&catalog, 7).unwrap();
    assert_eq!(detail.summary.level, "All Levels");
    assert_eq!(detail.total_sessions, 12);
    assert!(workouts::get_workout(&catalog, 1).is_none());

    let dashboard = progress::get_progress(&catalog);
    assert_eq!(dashboard.weight_change_lb, Some(-1.5));
    assert!(dashboard.strength_gains.is_empty());
}

#[test]
fn catalog_file_with_runaway_schedule_is_rejected() {
    let json = r#"{
        "programs": [{
            "id": 1,
            "title": "Forever",
            "description": "",
            "long_description": "",
            "level": "beginner",
            "duration_weeks": 100000,
            "days_per_week": 100000,
            "category": "strength",
            "image": "",
            "phases": []
        }]
    }"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let err = Catalog::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidSchedule { id: 1, .. }));
}

#[test]
fn builtin_catalog_is_provider() {
    let provider: Box<dyn CatalogProvider> = Box::new(Catalog::builtin());
    assert_eq!(provider.exercise_by_id(7).map(|e| e.name.as_str()), Some("Push Ups"));
    assert!(provider.program_by_id(5).is_some());
}
