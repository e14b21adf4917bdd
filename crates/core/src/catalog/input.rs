//! Validated write inputs.
//!
//! The same input type serves create and update: updates replace the whole
//! record at an existing identifier.

use serde::Serialize;

use crate::catalog::InstanceStatus;
use crate::types::{Date, DbId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorInput {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MangaInput {
    pub title: String,
    pub author_id: DbId,
    pub summary: String,
    pub isbn: String,
    /// Deduplicated. Stores hand them back in ascending order.
    pub genre_ids: Vec<DbId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MangaInstanceInput {
    pub manga_id: DbId,
    pub imprint: String,
    pub status: InstanceStatus,
    /// `None` means "use the current date" at persistence time.
    pub due_back: Option<Date>,
}
