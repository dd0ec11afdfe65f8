//! Field-level validation applied before every write.
//!
//! Checks are pure and collect every violated field in declaration order, so
//! validating the same payload twice always reports the same list.

use std::fmt;

use serde::Serialize;

use crate::errors::ModelError;

/// One violated rule on one field. `field` is the JSON name clients send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|v| v.field).collect()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(Violation { field, message: message.into() });
    }

    pub fn required<T>(&mut self, field: &'static str, value: Option<&T>) {
        if value.is_none() {
            self.push(field, "is required");
        }
    }

    /// Required string that must contain something besides whitespace.
    pub fn non_empty(&mut self, field: &'static str, value: Option<&str>) {
        match value {
            None => self.push(field, "is required"),
            Some(s) if s.trim().is_empty() => self.push(field, "must not be empty"),
            Some(_) => {}
        }
    }

    pub fn max_len(&mut self, field: &'static str, value: Option<&str>, max: usize) {
        if let Some(s) = value {
            if s.chars().count() > max {
                self.push(field, format!("must be at most {max} characters"));
            }
        }
    }

    /// Required number strictly above `bound`.
    pub fn greater_than(&mut self, field: &'static str, value: Option<f64>, bound: f64) {
        match value {
            None => self.push(field, "is required"),
            Some(v) if !v.is_finite() || v <= bound => {
                self.push(field, format!("must be greater than {bound}"))
            }
            Some(_) => {}
        }
    }

    pub fn into_result(self) -> Result<(), ModelError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(self))
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Declares the field rules of a payload.
pub trait Validate {
    fn check(&self, violations: &mut Violations);

    fn validate(&self) -> Result<(), ModelError> {
        let mut violations = Violations::default();
        self.check(&mut violations);
        violations.into_result()
    }
}
