// crates/board-core/src/validation.rs
// Field constraint checks for user input

use std::fmt;

use crate::error::{BoardError, Result};

/// Raw value of a form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A value plus the constraints it must satisfy. Unset constraints are not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub label: Option<&'static str>,
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// The constraint that rejected a value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
    Integer,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("value is required"),
            Rule::MinLength(n) => write!(f, "must be at least {} characters", n),
            Rule::MaxLength(n) => write!(f, "must be at most {} characters", n),
            Rule::Min(n) => write!(f, "must be at least {}", n),
            Rule::Max(n) => write!(f, "must be at most {}", n),
            Rule::Integer => f.write_str("must be a whole number"),
        }
    }
}

impl Validatable {
    fn new(value: FieldValue) -> Self {
        Self {
            label: None,
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn min(mut self, n: f64) -> Self {
        self.min = Some(n);
        self
    }

    pub fn max(mut self, n: f64) -> Self {
        self.max = Some(n);
        self
    }

    /// First rule this field violates, if any
    fn violation(&self) -> Option<Rule> {
        if self.required && self.value.to_string().trim().is_empty() {
            return Some(Rule::Required);
        }

        match &self.value {
            FieldValue::Text(s) => {
                let len = s.trim().chars().count();
                if let Some(min) = self.min_length {
                    if len < min {
                        return Some(Rule::MinLength(min));
                    }
                }
                if let Some(max) = self.max_length {
                    if len > max {
                        return Some(Rule::MaxLength(max));
                    }
                }
            }
            FieldValue::Number(n) => {
                if let Some(min) = self.min {
                    if n.is_nan() || *n < min {
                        return Some(Rule::Min(min));
                    }
                }
                if let Some(max) = self.max {
                    if n.is_nan() || *n > max {
                        return Some(Rule::Max(max));
                    }
                }
            }
        }

        None
    }
}

/// Check every field, reporting the first failure
pub fn check(fields: &[Validatable]) -> Result<()> {
    for field in fields {
        if let Some(rule) = field.violation() {
            return Err(BoardError::Validation {
                field: field.label.unwrap_or("value").to_string(),
                rule,
            });
        }
    }
    Ok(())
}

/// True when every field satisfies all of its constraints
pub fn validate(fields: &[Validatable]) -> bool {
    check(fields).is_ok()
}
