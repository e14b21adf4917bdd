//! Per-field validation pipeline.
//!
//! Each submitted field runs through an explicit chain of steps
//! (`trim` → checks → `escape` → conversion). The first failing check on a
//! field records one violation and the remaining checks on that field are
//! skipped; other fields are still evaluated, so a submission reports every
//! failing field at once.

use std::str::FromStr;

use validator::ValidateLength;

use super::rules::{FieldViolation, Rejected};
use super::sanitize::{escape_html, parse_iso_date};
use crate::types::{Date, DbId};

/// Collects violations across all fields of one submission.
#[derive(Debug, Default)]
pub struct FieldValidator {
    violations: Vec<FieldViolation>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the pipeline for one field. An absent field is treated as "".
    pub fn field(&mut self, name: &'static str, raw: Option<&str>) -> Field<'_> {
        Field {
            violations: &mut self.violations,
            name,
            value: raw.unwrap_or_default().to_string(),
            failed: false,
        }
    }

    /// Sanitize and parse a multi-valued reference field.
    ///
    /// Blank entries are dropped and duplicates collapsed, keeping the first
    /// occurrence. Any non-identifier entry records a single violation for
    /// the field and is left out of the result.
    pub fn references(&mut self, name: &'static str, raws: &[&str], message: &str) -> Vec<DbId> {
        let mut ids = Vec::with_capacity(raws.len());
        let mut invalid = false;
        for raw in raws {
            let value = escape_html(raw.trim());
            if value.is_empty() {
                continue;
            }
            match value.parse::<DbId>() {
                Ok(id) if !ids.contains(&id) => ids.push(id),
                Ok(_) => {}
                Err(_) => invalid = true,
            }
        }
        if invalid {
            self.violations.push(FieldViolation::new(name, message));
        }
        ids
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Close the submission.
    ///
    /// Returns the accepted input when no rule failed and `accept` can build
    /// it from the draft; otherwise hands the draft back with the violations.
    pub fn finish<D, I>(
        self,
        draft: D,
        accept: impl FnOnce(&D) -> Option<I>,
    ) -> Result<I, Rejected<D>> {
        if self.violations.is_empty() {
            if let Some(input) = accept(&draft) {
                return Ok(input);
            }
        }
        Err(Rejected {
            draft,
            violations: self.violations,
        })
    }
}

/// One field moving through the pipeline.
#[derive(Debug)]
pub struct Field<'v> {
    violations: &'v mut Vec<FieldViolation>,
    name: &'static str,
    value: String,
    failed: bool,
}

impl Field<'_> {
    fn fail(&mut self, message: &str) {
        if !self.failed {
            self.failed = true;
            self.violations.push(FieldViolation::new(self.name, message));
        }
    }

    pub fn trim(mut self) -> Self {
        self.value = self.value.trim().to_string();
        self
    }

    /// Require at least one character.
    pub fn required(self, message: &str) -> Self {
        self.min_length(1, message)
    }

    pub fn min_length(mut self, min: u64, message: &str) -> Self {
        if !self.failed && !self.value.validate_length(Some(min), None, None) {
            self.fail(message);
        }
        self
    }

    pub fn max_length(mut self, max: u64, message: &str) -> Self {
        if !self.failed && !self.value.validate_length(None, Some(max), None) {
            self.fail(message);
        }
        self
    }

    /// Require letters and digits only. Empty values pass; pair with
    /// [`Field::required`] when the field is mandatory.
    pub fn alphanumeric(mut self, message: &str) -> Self {
        if !self.failed && !self.value.chars().all(char::is_alphanumeric) {
            self.fail(message);
        }
        self
    }

    pub fn escape(mut self) -> Self {
        self.value = escape_html(&self.value);
        self
    }

    /// The sanitized text, kept even when a check failed so the form can
    /// show it again.
    pub fn text(self) -> String {
        self.value
    }

    /// Parse the value as a record identifier.
    ///
    /// Returns `None` for blank or already-failed fields without adding a
    /// second violation.
    pub fn id(mut self, message: &str) -> Option<DbId> {
        if self.failed || self.value.is_empty() {
            return None;
        }
        match self.value.parse::<DbId>() {
            Ok(id) => Some(id),
            Err(_) => {
                self.fail(message);
                None
            }
        }
    }

    /// Optional ISO-8601 date. An empty value means "not provided" and is
    /// not validated.
    pub fn optional_date(mut self, message: &str) -> Option<Date> {
        if self.failed || self.value.is_empty() {
            return None;
        }
        let parsed = parse_iso_date(&self.value);
        if parsed.is_none() {
            self.fail(message);
        }
        parsed
    }

    /// One of an enumerated set of values. An empty value selects the
    /// default; an unknown one records a violation and falls back to it.
    pub fn choice<T>(mut self, message: &str) -> T
    where
        T: FromStr + Default,
    {
        if self.failed || self.value.is_empty() {
            return T::default();
        }
        match self.value.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                self.fail(message);
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    #[test]
    fn required_trims_before_checking() {
        let mut v = FieldValidator::new();
        let value = v.field("title", Some("   ")).trim().required("empty").text();
        assert_eq!(value, "");
        assert_eq!(v.violations(), &[FieldViolation::new("title", "empty")]);
    }

    #[test]
    fn absent_field_counts_as_empty() {
        let mut v = FieldValidator::new();
        v.field("title", None).trim().required("empty").text();
        assert!(!v.is_valid());
    }

    #[test]
    fn first_failure_per_field_wins() {
        let mut v = FieldValidator::new();
        v.field("first_name", Some(""))
            .trim()
            .required("must be specified")
            .alphanumeric("non-alphanumeric")
            .text();
        assert_eq!(v.violations().len(), 1);
        assert_eq!(v.violations()[0].message, "must be specified");
    }

    #[test]
    fn all_fields_are_evaluated() {
        let mut v = FieldValidator::new();
        v.field("a", Some("")).required("a empty").text();
        v.field("b", Some("ok")).required("b empty").text();
        v.field("c", None).required("c empty").text();
        let fields: Vec<_> = v.violations().iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["a", "c"]);
    }

    #[test]
    fn escape_runs_after_checks() {
        let mut v = FieldValidator::new();
        let value = v
            .field("title", Some("  <Akira>  "))
            .trim()
            .required("empty")
            .escape()
            .text();
        assert_eq!(value, "&lt;Akira&gt;");
        assert!(v.is_valid());
    }

    #[test]
    fn length_bounds_count_characters() {
        let mut v = FieldValidator::new();
        v.field("name", Some("ab")).min_length(3, "short").text();
        v.field("name", Some("漫画本")).min_length(3, "short").text();
        v.field("name", Some("abcdef")).max_length(5, "long").text();
        let messages: Vec<_> = v.violations().iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, vec!["short", "long"]);
    }

    #[test]
    fn alphanumeric_rejects_spaces_and_symbols() {
        let mut v = FieldValidator::new();
        v.field("n", Some("Eiichiro")).alphanumeric("bad").text();
        v.field("n", Some("Oda Eiichiro")).alphanumeric("bad").text();
        v.field("n", Some("O'Neil")).alphanumeric("bad").text();
        assert_eq!(v.violations().len(), 2);
    }

    #[test]
    fn id_parses_numbers_and_flags_garbage() {
        let mut v = FieldValidator::new();
        assert_eq!(v.field("author", Some(" 12 ")).trim().id("bad"), Some(12));
        assert_eq!(v.field("author", Some("abc")).trim().id("bad"), None);
        assert_eq!(v.violations().len(), 1);
    }

    #[test]
    fn id_on_failed_field_adds_nothing() {
        let mut v = FieldValidator::new();
        let id = v.field("author", Some("")).required("empty").id("bad");
        assert_eq!(id, None);
        assert_eq!(v.violations(), &[FieldViolation::new("author", "empty")]);
    }

    #[test]
    fn empty_date_is_not_provided() {
        let mut v = FieldValidator::new();
        assert_eq!(v.field("due_back", Some("")).trim().optional_date("bad"), None);
        assert!(v.is_valid());
    }

    #[test]
    fn invalid_date_is_reported() {
        let mut v = FieldValidator::new();
        assert_eq!(v.field("due_back", Some("soon")).optional_date("bad"), None);
        assert_eq!(
            v.field("due_back", Some("2025-01-31")).optional_date("bad"),
            NaiveDate::from_ymd_opt(2025, 1, 31)
        );
        assert_eq!(v.violations().len(), 1);
    }

    #[test]
    fn references_dedupe_and_skip_blanks() {
        let mut v = FieldValidator::new();
        let ids = v.references("genre", &["3", "", " 1 ", "3"], "bad");
        assert_eq!(ids, vec![3, 1]);
        assert!(v.is_valid());
    }

    #[test]
    fn references_report_garbage_once() {
        let mut v = FieldValidator::new();
        let ids = v.references("genre", &["x", "2", "y"], "bad");
        assert_eq!(ids, vec![2]);
        assert_eq!(v.violations(), &[FieldViolation::new("genre", "bad")]);
    }

    #[test]
    fn finish_returns_draft_on_failure() {
        let mut v = FieldValidator::new();
        let title = v.field("title", Some("")).required("empty").text();
        let result: Result<String, _> = v.finish(title, |t| Some(t.clone()));
        assert_matches!(result, Err(rejected) if rejected.messages() == vec!["empty"]);
    }

    #[test]
    fn finish_accepts_clean_submission() {
        let mut v = FieldValidator::new();
        let title = v.field("title", Some("Berserk")).required("empty").text();
        let result = v.finish(title, |t| Some(t.len()));
        assert_matches!(result, Ok(7));
    }
}
