//! Genre submission rules.

use super::FormData;
use crate::catalog::GenreInput;
use crate::validation::{FieldValidator, Rejected};

pub const NAME_TOO_SHORT: &str = "Genre name must contain at least 3 characters";
pub const NAME_TOO_LONG: &str = "Genre name must not exceed 100 characters";
pub const NAME_TAKEN: &str = "Another genre already uses this name";

pub const NAME_MIN_LEN: u64 = 3;
pub const NAME_MAX_LEN: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreDraft {
    pub name: String,
}

/// Length limits apply to the submitted text, before escaping.
pub fn validate_genre(form: &FormData) -> Result<GenreInput, Rejected<GenreDraft>> {
    let mut v = FieldValidator::new();

    let name = v
        .field("name", form.first("name"))
        .trim()
        .min_length(NAME_MIN_LEN, NAME_TOO_SHORT)
        .max_length(NAME_MAX_LEN, NAME_TOO_LONG)
        .escape()
        .text();

    v.finish(GenreDraft { name }, |d| {
        Some(GenreInput {
            name: d.name.clone(),
        })
    })
}
