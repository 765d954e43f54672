//! Birthday entry model and DTOs.

use birthday_core::birthday::{validate_birthday_field, MAX_NAME_LENGTH};
use birthday_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `birthdays` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Birthday {
    pub id: DbId,
    pub first_name: String,
    /// Empty string when the person has no recorded last name.
    pub last_name: String,
    pub birthday: NaiveDate,
    /// Path relative to the media root, e.g. `birthdays_images/<uuid>.png`.
    pub photo: Option<String>,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Row for the administrative listing: entry plus the author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BirthdayAdminRow {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub author: Option<String>,
}

/// DTO for creating a new entry. The author is taken from the session.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBirthday {
    #[validate(length(
        min = 1,
        max = MAX_NAME_LENGTH,
        message = "First name must be 1-20 characters"
    ))]
    pub first_name: String,
    #[validate(length(
        max = MAX_NAME_LENGTH,
        message = "Last name must be at most 20 characters"
    ))]
    pub last_name: Option<String>,
    #[validate(custom(function = "validate_birthday_field"))]
    pub birthday: NaiveDate,
    /// Existing tag ids to attach.
    pub tag_ids: Option<Vec<DbId>>,
}

impl CreateBirthday {
    /// Strip surrounding whitespace from the names. Length rules apply to
    /// the trimmed values, so call this before `validate`.
    pub fn trimmed(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.map(|name| name.trim().to_string()),
            ..self
        }
    }
}

/// DTO for updating an entry. All fields are optional; `tag_ids` replaces
/// the whole tag set when present.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBirthday {
    #[validate(length(
        min = 1,
        max = MAX_NAME_LENGTH,
        message = "First name must be 1-20 characters"
    ))]
    pub first_name: Option<String>,
    #[validate(length(
        max = MAX_NAME_LENGTH,
        message = "Last name must be at most 20 characters"
    ))]
    pub last_name: Option<String>,
    #[validate(custom(function = "validate_birthday_field"))]
    pub birthday: Option<NaiveDate>,
    pub tag_ids: Option<Vec<DbId>>,
}

impl UpdateBirthday {
    /// Same as [`CreateBirthday::trimmed`] for the fields that are present.
    pub fn trimmed(self) -> Self {
        Self {
            first_name: self.first_name.map(|name| name.trim().to_string()),
            last_name: self.last_name.map(|name| name.trim().to_string()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn create(first_name: &str, birthday: NaiveDate) -> CreateBirthday {
        CreateBirthday {
            first_name: first_name.to_string(),
            last_name: None,
            birthday,
            tag_ids: None,
        }
    }

    #[test]
    fn valid_create_passes() {
        let input = create("Anna", NaiveDate::from_ymd_opt(1995, 4, 2).unwrap());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn empty_first_name_fails() {
        let input = create("", NaiveDate::from_ymd_opt(1995, 4, 2).unwrap());
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn whitespace_first_name_fails_after_trimming() {
        let input = create("   ", NaiveDate::from_ymd_opt(1995, 4, 2).unwrap()).trimmed();
        assert_eq!(input.first_name, "");
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn padding_does_not_count_towards_name_length() {
        let padded = format!("  {}  ", "a".repeat(20));
        let mut input = create(&padded, NaiveDate::from_ymd_opt(1995, 4, 2).unwrap());
        input.last_name = Some(format!(" {} ", "b".repeat(20)));
        assert!(input.validate().is_err());

        let input = input.trimmed();
        assert_eq!(input.first_name.len(), 20);
        assert_eq!(input.last_name.as_deref().map(str::len), Some(20));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn long_last_name_fails() {
        let mut input = create("Anna", NaiveDate::from_ymd_opt(1995, 4, 2).unwrap());
        input.last_name = Some("x".repeat(21));
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn future_birthday_fails() {
        let input = create("Anna", Utc::now().date_naive() + Duration::days(3));
        let errors = input.validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert_eq!(field_errors["birthday"][0].code, "birthday_in_future");
    }

    #[test]
    fn update_checks_only_present_fields() {
        let empty = UpdateBirthday {
            first_name: None,
            last_name: None,
            birthday: None,
            tag_ids: None,
        };
        assert!(empty.validate().is_ok());

        let ancient = UpdateBirthday {
            birthday: NaiveDate::from_ymd_opt(1700, 1, 1),
            ..empty
        };
        assert!(ancient.validate().is_err());
    }

    #[test]
    fn update_trims_present_names_only() {
        let input = UpdateBirthday {
            first_name: Some("  ".into()),
            last_name: None,
            birthday: None,
            tag_ids: None,
        }
        .trimmed();
        assert_eq!(input.first_name.as_deref(), Some(""));
        assert!(input.last_name.is_none());
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }
}
