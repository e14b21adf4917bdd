//! Author submission rules.

use super::FormData;
use crate::catalog::AuthorInput;
use crate::types::Date;
use crate::validation::{FieldValidator, Rejected};

pub const FIRST_NAME_REQUIRED: &str = "First name must be specified.";
pub const FIRST_NAME_NOT_ALPHANUMERIC: &str = "First name has non-alphanumeric characters.";
pub const FAMILY_NAME_REQUIRED: &str = "Family name must be specified.";
pub const FAMILY_NAME_NOT_ALPHANUMERIC: &str = "Family name has non-alphanumeric characters.";
pub const DATE_OF_BIRTH_INVALID: &str = "Invalid date of birth";
pub const DATE_OF_DEATH_INVALID: &str = "Invalid date of death";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorDraft {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

pub fn validate_author(form: &FormData) -> Result<AuthorInput, Rejected<AuthorDraft>> {
    let mut v = FieldValidator::new();

    let first_name = v
        .field("first_name", form.first("first_name"))
        .trim()
        .required(FIRST_NAME_REQUIRED)
        .alphanumeric(FIRST_NAME_NOT_ALPHANUMERIC)
        .escape()
        .text();
    let family_name = v
        .field("family_name", form.first("family_name"))
        .trim()
        .required(FAMILY_NAME_REQUIRED)
        .alphanumeric(FAMILY_NAME_NOT_ALPHANUMERIC)
        .escape()
        .text();
    let date_of_birth = v
        .field("date_of_birth", form.first("date_of_birth"))
        .trim()
        .optional_date(DATE_OF_BIRTH_INVALID);
    let date_of_death = v
        .field("date_of_death", form.first("date_of_death"))
        .trim()
        .optional_date(DATE_OF_DEATH_INVALID);

    let draft = AuthorDraft {
        first_name,
        family_name,
        date_of_birth,
        date_of_death,
    };
    v.finish(draft, |d| {
        Some(AuthorInput {
            first_name: d.first_name.clone(),
            family_name: d.family_name.clone(),
            date_of_birth: d.date_of_birth,
            date_of_death: d.date_of_death,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn accepts_names_and_dates() {
        let input = validate_author(&FormData::from_pairs([
            ("first_name", "Kentaro"),
            ("family_name", "Miura"),
            ("date_of_birth", "1966-07-11"),
            ("date_of_death", "2021-05-06"),
        ]))
        .unwrap();
        assert_eq!(input.family_name, "Miura");
        assert_eq!(input.date_of_birth, NaiveDate::from_ymd_opt(1966, 7, 11));
        assert_eq!(input.date_of_death, NaiveDate::from_ymd_opt(2021, 5, 6));
    }

    #[test]
    fn blank_dates_are_not_provided() {
        let input = validate_author(&FormData::from_pairs([
            ("first_name", "Naoki"),
            ("family_name", "Urasawa"),
            ("date_of_birth", ""),
        ]))
        .unwrap();
        assert_eq!(input.date_of_birth, None);
        assert_eq!(input.date_of_death, None);
    }

    #[test]
    fn empty_names_report_required_only() {
        let rejected = validate_author(&FormData::default()).unwrap_err();
        assert_eq!(
            rejected.messages(),
            vec![FIRST_NAME_REQUIRED, FAMILY_NAME_REQUIRED]
        );
    }

    #[test]
    fn names_must_be_alphanumeric() {
        let rejected = validate_author(&FormData::from_pairs([
            ("first_name", "Hiro-hiko"),
            ("family_name", "Araki"),
            ("date_of_death", "not a date"),
        ]))
        .unwrap_err();
        assert_eq!(
            rejected.messages(),
            vec![FIRST_NAME_NOT_ALPHANUMERIC, DATE_OF_DEATH_INVALID]
        );
        assert_eq!(rejected.draft.family_name, "Araki");
    }
}
