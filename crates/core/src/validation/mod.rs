//! Validation & sanitization layer.
//!
//! Field rules, the per-field pipeline and the sanitizers it applies. Pure
//! logic, no database access.

pub mod evaluator;
pub mod rules;
pub mod sanitize;

pub use evaluator::{Field, FieldValidator};
pub use rules::{FieldViolation, Rejected};
