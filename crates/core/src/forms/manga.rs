//! Manga submission rules.

use super::FormData;
use crate::catalog::MangaInput;
use crate::types::DbId;
use crate::validation::{FieldValidator, Rejected};

pub const TITLE_REQUIRED: &str = "Title must not be empty.";
pub const AUTHOR_REQUIRED: &str = "Author must not be empty.";
pub const AUTHOR_INVALID: &str = "Author must be a valid selection.";
pub const SUMMARY_REQUIRED: &str = "Summary must not be empty.";
pub const ISBN_REQUIRED: &str = "ISBN must not be empty";
pub const GENRE_INVALID: &str = "Genre must be a valid selection.";

/// Sanitized manga form values, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MangaDraft {
    pub title: String,
    pub author_id: Option<DbId>,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<DbId>,
}

impl From<&MangaInput> for MangaDraft {
    fn from(input: &MangaInput) -> Self {
        Self {
            title: input.title.clone(),
            author_id: Some(input.author_id),
            summary: input.summary.clone(),
            isbn: input.isbn.clone(),
            genre_ids: input.genre_ids.clone(),
        }
    }
}

pub fn validate_manga(form: &FormData) -> Result<MangaInput, Rejected<MangaDraft>> {
    let mut v = FieldValidator::new();

    let title = v
        .field("title", form.first("title"))
        .trim()
        .required(TITLE_REQUIRED)
        .escape()
        .text();
    let author_id = v
        .field("author", form.first("author"))
        .trim()
        .required(AUTHOR_REQUIRED)
        .escape()
        .id(AUTHOR_INVALID);
    let summary = v
        .field("summary", form.first("summary"))
        .trim()
        .required(SUMMARY_REQUIRED)
        .escape()
        .text();
    let isbn = v
        .field("isbn", form.first("isbn"))
        .trim()
        .required(ISBN_REQUIRED)
        .escape()
        .text();
    let genre_ids = v.references("genre", &form.all("genre"), GENRE_INVALID);

    let draft = MangaDraft {
        title,
        author_id,
        summary,
        isbn,
        genre_ids,
    };
    v.finish(draft, |d| {
        Some(MangaInput {
            title: d.title.clone(),
            author_id: d.author_id?,
            summary: d.summary.clone(),
            isbn: d.isbn.clone(),
            genre_ids: d.genre_ids.clone(),
        })
    })
}
