//! Author row model.

use mangalib_core::forms::AuthorDraft;
use mangalib_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

impl Author {
    /// "Family, First". Empty when either part is missing.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// "birth - death" with blanks for unknown ends.
    pub fn lifespan(&self) -> String {
        let fmt = |d: Option<Date>| d.map(|d| d.to_string()).unwrap_or_default();
        format!("{} - {}", fmt(self.date_of_birth), fmt(self.date_of_death))
    }
}

impl From<&Author> for AuthorDraft {
    fn from(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
        }
    }
}
