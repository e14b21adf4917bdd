//! Manga instance row models.

use mangalib_core::catalog::InstanceStatus;
use mangalib_core::forms::MangaInstanceDraft;
use mangalib_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `manga_instances` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MangaInstance {
    pub id: DbId,
    pub manga_id: DbId,
    pub imprint: String,
    #[sqlx(try_from = "String")]
    pub status: InstanceStatus,
    pub due_back: Date,
}

impl MangaInstance {
    /// Medium date, e.g. "Oct 19, 2026".
    pub fn due_back_formatted(&self) -> String {
        self.due_back.format("%b %-d, %Y").to_string()
    }

    /// `YYYY-MM-DD`, the value a date input expects.
    pub fn due_back_yyyy_mm_dd(&self) -> String {
        self.due_back.format("%Y-%m-%d").to_string()
    }
}

/// An instance joined with the title of the manga it copies.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MangaInstanceWithManga {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub instance: MangaInstance,
    /// `None` when the referenced manga no longer resolves.
    pub manga_title: Option<String>,
}

impl From<&MangaInstance> for MangaInstanceDraft {
    fn from(instance: &MangaInstance) -> Self {
        Self {
            manga_id: Some(instance.manga_id),
            imprint: instance.imprint.clone(),
            status: instance.status,
            due_back: Some(instance.due_back),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_due_back() {
        let instance = MangaInstance {
            id: 1,
            manga_id: 2,
            imprint: "Viz".to_string(),
            status: InstanceStatus::CurrentlyPublishing,
            due_back: NaiveDate::from_ymd_opt(2026, 10, 9).unwrap(),
        };
        assert_eq!(instance.due_back_formatted(), "Oct 9, 2026");
        assert_eq!(instance.due_back_yyyy_mm_dd(), "2026-10-09");
    }
}
