//! Validation result types.

use serde::Serialize;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A submission that failed validation.
///
/// Carries the sanitized draft so the form can be re-rendered with the
/// user's input preserved.
#[derive(Debug, Clone)]
pub struct Rejected<D> {
    pub draft: D,
    pub violations: Vec<FieldViolation>,
}

impl<D> Rejected<D> {
    /// Messages in the order the rules were evaluated.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }
}
