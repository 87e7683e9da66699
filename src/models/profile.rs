//! Calculator profile model
//!
//! Biometric and lifestyle inputs for the energy estimator, plus the form
//! boundary that turns raw text fields into a validated `EstimatorInput`.

use serde::{Deserialize, Serialize};

use super::validation::{Field, ValidationError, ValidationErrors};

/// Biological sex, selects the Mifflin-St Jeor offset term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }

    /// kcal/day added to the sex-independent base
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        }
    }
}

/// Activity level, one of five fixed TDEE multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Heavy,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Heavy,
        ActivityLevel::Athlete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Heavy => "heavy",
            ActivityLevel::Athlete => "athlete",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Heavy => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (Office job)",
            ActivityLevel::Light => "Light Exercise (1-2 days/week)",
            ActivityLevel::Moderate => "Moderate Exercise (3-5 days/week)",
            ActivityLevel::Heavy => "Heavy Exercise (6-7 days/week)",
            ActivityLevel::Athlete => "Athlete (2x per day)",
        }
    }

    /// Look up a level by its multiplier. Only the five enumerated values match.
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.factor() == factor)
    }

    /// Parse either a level name ("moderate") or its multiplier text ("1.55")
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let by_name = match lower.as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Some(ActivityLevel::Light),
            "moderate" | "moderately_active" => Some(ActivityLevel::Moderate),
            "heavy" | "very_active" => Some(ActivityLevel::Heavy),
            "athlete" | "extra_active" => Some(ActivityLevel::Athlete),
            _ => None,
        };
        by_name.or_else(|| lower.parse::<f64>().ok().and_then(Self::from_factor))
    }
}

/// Weight goal, selects a fixed daily calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    Maintain,
    Bulk,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Cut, Goal::Maintain, Goal::Bulk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Cut => "cut",
            Goal::Maintain => "maintain",
            Goal::Bulk => "bulk",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Some(Goal::Cut),
            "maintain" => Some(Goal::Maintain),
            "bulk" => Some(Goal::Bulk),
            _ => None,
        }
    }

    /// kcal/day added to TDEE
    pub fn adjustment(&self) -> f64 {
        match self {
            Goal::Cut => -500.0,
            Goal::Maintain => 0.0,
            Goal::Bulk => 500.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Cut => "Lose Fat (-500 cal)",
            Goal::Maintain => "Maintain Weight",
            Goal::Bulk => "Build Muscle (+500 cal)",
        }
    }
}

/// Validated estimator input.
///
/// Fields are private so every instance has passed through `new` or
/// `CalculatorForm::validate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimatorInput {
    age: u32,
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    activity: ActivityLevel,
    goal: Goal,
}

impl EstimatorInput {
    pub fn new(
        age: u32,
        sex: Sex,
        weight_kg: f64,
        height_cm: f64,
        activity: ActivityLevel,
        goal: Goal,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if age == 0 {
            errors.push(ValidationError::NotPositive { field: Field::Age });
        }
        check_positive(Field::Weight, weight_kg, &mut errors);
        check_positive(Field::Height, height_cm, &mut errors);

        errors.into_result(Self {
            age,
            sex,
            weight_kg,
            height_cm,
            activity,
            goal,
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn activity(&self) -> ActivityLevel {
        self.activity
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Same biometrics with a different goal
    pub fn with_goal(self, goal: Goal) -> Self {
        Self { goal, ..self }
    }
}

fn check_positive(field: Field, value: f64, errors: &mut ValidationErrors) {
    if !value.is_finite() {
        errors.push(ValidationError::NotNumeric {
            field,
            value: value.to_string(),
        });
    } else if value <= 0.0 {
        errors.push(ValidationError::NotPositive { field });
    }
}

/// Raw calculator form values as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorForm {
    pub age: String,
    pub sex: String,
    pub weight_kg: String,
    pub height_cm: String,
    pub activity: String,
    pub goal: String,
}

impl CalculatorForm {
    /// Validate every field and build an `EstimatorInput`.
    ///
    /// All failing fields are reported, not just the first.
    pub fn validate(&self) -> Result<EstimatorInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let age = parse_age(&self.age).map_err(|e| errors.push(e)).ok();
        let weight_kg = parse_positive(Field::Weight, &self.weight_kg)
            .map_err(|e| errors.push(e))
            .ok();
        let height_cm = parse_positive(Field::Height, &self.height_cm)
            .map_err(|e| errors.push(e))
            .ok();
        let sex = parse_option(Field::Sex, &self.sex, Sex::from_str)
            .map_err(|e| errors.push(e))
            .ok();
        let activity = parse_option(Field::Activity, &self.activity, ActivityLevel::from_str)
            .map_err(|e| errors.push(e))
            .ok();
        let goal = parse_option(Field::Goal, &self.goal, Goal::from_str)
            .map_err(|e| errors.push(e))
            .ok();

        match (age, sex, weight_kg, height_cm, activity, goal) {
            (Some(age), Some(sex), Some(weight_kg), Some(height_cm), Some(activity), Some(goal))
                if errors.is_empty() =>
            {
                EstimatorInput::new(age, sex, weight_kg, height_cm, activity, goal)
            }
            _ => Err(errors),
        }
    }
}

fn parse_number(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotNumeric {
        field,
        value: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ValidationError::NotNumeric {
            field,
            value: trimmed.to_string(),
        });
    }
    Ok(value)
}

fn parse_positive(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_number(field, raw)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(value)
}

fn parse_age(raw: &str) -> Result<u32, ValidationError> {
    let value = parse_positive(Field::Age, raw)?;
    if value.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger { field: Field::Age });
    }
    if value > f64::from(u32::MAX) {
        return Err(ValidationError::OutOfRange { field: Field::Age });
    }
    Ok(value as u32)
}

fn parse_option<T>(
    field: Field,
    raw: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    parse(trimmed).ok_or_else(|| ValidationError::UnknownOption {
        field,
        value: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(age: &str, sex: &str, weight: &str, height: &str, activity: &str, goal: &str) -> CalculatorForm {
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
    fn test_valid_form() {
        let input = form("25", "male", "75", "180", "1.2", "maintain").validate().unwrap();
        assert_eq!(input.age(), 25);
        assert_eq!(input.sex(), Sex::Male);
        assert_eq!(input.weight_kg(), 75.0);
        assert_eq!(input.height_cm(), 180.0);
        assert_eq!(input.activity(), ActivityLevel::Sedentary);
        assert_eq!(input.goal(), Goal::Maintain);
    }

    #[test]
    fn test_form_trims_and_ignores_case() {
        let input = form(" 30 ", "Female", "60.5", " 165 ", "MODERATE", "Bulk").validate().unwrap();
        assert_eq!(input.sex(), Sex::Female);
        assert_eq!(input.activity(), ActivityLevel::Moderate);
        assert_eq!(input.goal(), Goal::Bulk);
        assert!((input.weight_kg() - 60.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let errors = form("25", "male", "-5", "180", "1.2", "maintain").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0], ValidationError::NotPositive { field: Field::Weight });
    }

    #[test]
    fn test_all_bad_fields_reported() {
        let errors = form("", "robot", "abc", "0", "1.3", "shred").validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec![Field::Age, Field::Weight, Field::Height, Field::Sex, Field::Activity, Field::Goal]
        );
        assert_eq!(errors.errors()[0], ValidationError::Empty { field: Field::Age });
        assert_eq!(
            errors.errors()[1],
            ValidationError::NotNumeric { field: Field::Weight, value: "abc".to_string() }
        );
    }

    #[test]
    fn test_age_must_be_whole_positive() {
        let errors = form("25.5", "male", "75", "180", "1.2", "cut").validate().unwrap_err();
        assert_eq!(errors.errors()[0], ValidationError::NotAnInteger { field: Field::Age });

        let errors = form("0", "male", "75", "180", "1.2", "cut").validate().unwrap_err();
        assert_eq!(errors.errors()[0], ValidationError::NotPositive { field: Field::Age });

        let errors = form("-3", "male", "75", "180", "1.2", "cut").validate().unwrap_err();
        assert_eq!(errors.errors()[0], ValidationError::NotPositive { field: Field::Age });
    }

    #[test]
    fn test_non_finite_rejected() {
        let errors = form("25", "male", "inf", "NaN", "1.2", "cut").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| matches!(e, ValidationError::NotNumeric { .. })));
    }

    #[test]
    fn test_activity_factor_must_be_enumerated() {
        assert_eq!(ActivityLevel::from_str("1.55"), Some(ActivityLevel::Moderate));
        assert_eq!(ActivityLevel::from_str("1.725"), Some(ActivityLevel::Heavy));
        assert_eq!(ActivityLevel::from_str("1.9"), Some(ActivityLevel::Athlete));
        assert_eq!(ActivityLevel::from_str("1.50"), None);
        assert_eq!(ActivityLevel::from_str("2.0"), None);
        assert_eq!(ActivityLevel::from_factor(1.4), None);
    }

    #[test]
    fn test_every_level_round_trips_through_factor() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_factor(level.factor()), Some(level));
            assert_eq!(ActivityLevel::from_str(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_typed_constructor_checks_invariants() {
        let errors = EstimatorInput::new(0, Sex::Male, 0.0, -1.0, ActivityLevel::Light, Goal::Cut)
            .unwrap_err();
        assert_eq!(errors.len(), 3);

        assert!(EstimatorInput::new(40, Sex::Female, 70.0, 170.0, ActivityLevel::Light, Goal::Cut).is_ok());
    }

    #[test]
    fn test_goal_adjustments() {
        assert_eq!(Goal::Cut.adjustment(), -500.0);
        assert_eq!(Goal::Maintain.adjustment(), 0.0);
        assert_eq!(Goal::Bulk.adjustment(), 500.0);
    }
}
