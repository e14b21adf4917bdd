//! Manga instance submission rules.

use super::FormData;
use crate::catalog::{InstanceStatus, MangaInstanceInput};
use crate::types::{Date, DbId};
use crate::validation::{FieldValidator, Rejected};

pub const MANGA_REQUIRED: &str = "Manga must be specified";
pub const MANGA_INVALID: &str = "Manga must be a valid selection.";
pub const IMPRINT_REQUIRED: &str = "Imprint must be specified";
pub const STATUS_INVALID: &str = "Status must be a valid publishing status.";
pub const DUE_BACK_INVALID: &str = "Invalid date";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MangaInstanceDraft {
    pub manga_id: Option<DbId>,
    pub imprint: String,
    pub status: InstanceStatus,
    pub due_back: Option<Date>,
}

impl From<&MangaInstanceInput> for MangaInstanceDraft {
    fn from(input: &MangaInstanceInput) -> Self {
        Self {
            manga_id: Some(input.manga_id),
            imprint: input.imprint.clone(),
            status: input.status,
            due_back: input.due_back,
        }
    }
}

pub fn validate_manga_instance(
    form: &FormData,
) -> Result<MangaInstanceInput, Rejected<MangaInstanceDraft>> {
    let mut v = FieldValidator::new();

    let manga_id = v
        .field("manga", form.first("manga"))
        .trim()
        .required(MANGA_REQUIRED)
        .escape()
        .id(MANGA_INVALID);
    let imprint = v
        .field("imprint", form.first("imprint"))
        .trim()
        .required(IMPRINT_REQUIRED)
        .escape()
        .text();
    let status = v
        .field("status", form.first("status"))
        .trim()
        .escape()
        .choice::<InstanceStatus>(STATUS_INVALID);
    let due_back = v
        .field("due_back", form.first("due_back"))
        .trim()
        .optional_date(DUE_BACK_INVALID);

    let draft = MangaInstanceDraft {
        manga_id,
        imprint,
        status,
        due_back,
    };
    v.finish(draft, |d| {
        Some(MangaInstanceInput {
            manga_id: d.manga_id?,
            imprint: d.imprint.clone(),
            status: d.status,
            due_back: d.due_back,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn defaults_status_and_due_back() {
        let input = validate_manga_instance(&FormData::from_pairs([
            ("manga", "8"),
            ("imprint", "Viz Media, 2003"),
        ]))
        .unwrap();
        assert_eq!(input.manga_id, 8);
        assert_eq!(input.status, InstanceStatus::CurrentlyPublishing);
        assert_eq!(input.due_back, None);
    }

    #[test]
    fn parses_status_and_date() {
        let input = validate_manga_instance(&FormData::from_pairs([
            ("manga", "8"),
            ("imprint", "Kodansha"),
            ("status", "Finished Publishing"),
            ("due_back", "2026-11-01"),
        ]))
        .unwrap();
        assert_eq!(input.status, InstanceStatus::FinishedPublishing);
        assert_eq!(input.due_back, NaiveDate::from_ymd_opt(2026, 11, 1));
    }

    #[test]
    fn empty_required_fields_are_reported() {
        let rejected = validate_manga_instance(&FormData::default()).unwrap_err();
        assert_eq!(rejected.messages(), vec![MANGA_REQUIRED, IMPRINT_REQUIRED]);
    }

    #[test]
    fn unknown_status_and_bad_date_are_reported() {
        let rejected = validate_manga_instance(&FormData::from_pairs([
            ("manga", "1"),
            ("imprint", "Shueisha"),
            ("status", "Available"),
            ("due_back", "31/12/2026"),
        ]))
        .unwrap_err();
        assert_eq!(rejected.messages(), vec![STATUS_INVALID, DUE_BACK_INVALID]);
        assert_eq!(rejected.draft.manga_id, Some(1));
    }
}
