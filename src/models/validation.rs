//! Field-level validation errors for calculator input

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Calculator form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    Sex,
    Weight,
    Height,
    Activity,
    Goal,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Sex => "sex",
            Field::Weight => "weight_kg",
            Field::Height => "height_cm",
            Field::Activity => "activity",
            Field::Goal => "goal",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Empty { field: Field },

    #[error("{field} must be a number, got '{value}'")]
    NotNumeric { field: Field, value: String },

    #[error("{field} must be greater than 0")]
    NotPositive { field: Field },

    #[error("{field} must be a whole number")]
    NotAnInteger { field: Field },

    #[error("{field} is out of range")]
    OutOfRange { field: Field },

    #[error("'{value}' is not a valid {field}")]
    UnknownOption { field: Field, value: String },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Empty { field }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::NotPositive { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::OutOfRange { field }
            | ValidationError::UnknownOption { field, .. } => *field,
        }
    }
}

/// Every failing field of one form submission, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} invalid field(s): {}", .0.len(), join_messages(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// `Ok(value)` when nothing failed
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = ValidationError::NotPositive { field: Field::Weight };
        assert_eq!(e.to_string(), "weight_kg must be greater than 0");

        let e = ValidationError::UnknownOption { field: Field::Goal, value: "shred".into() };
        assert_eq!(e.to_string(), "'shred' is not a valid goal");
    }

    #[test]
    fn test_collection_display() {
        let mut errors = ValidationErrors::default();
        errors.push(ValidationError::Empty { field: Field::Age });
        errors.push(ValidationError::NotPositive { field: Field::Height });
        assert_eq!(
            errors.to_string(),
            "2 invalid field(s): age is required; height_cm must be greater than 0"
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::default().into_result(7), Ok(7));

        let mut errors = ValidationErrors::default();
        errors.push(ValidationError::Empty { field: Field::Sex });
        assert!(errors.into_result(7).is_err());
    }
}
