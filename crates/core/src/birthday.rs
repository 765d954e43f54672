//! Birthday entry field rules and ownership checks.

use std::borrow::Cow;

use chrono::NaiveDate;
use validator::ValidationError;

use crate::age::check_birth_date;
use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of `first_name` and `last_name`, in characters.
pub const MAX_NAME_LENGTH: u64 = 20;

/// Maximum length of a tag label, in characters.
pub const MAX_TAG_LENGTH: u64 = 20;

/// `validator` adapter for birth date fields, checked against today's UTC date.
pub fn validate_birthday_field(date: &NaiveDate) -> Result<(), ValidationError> {
    let today = chrono::Utc::now().date_naive();
    match check_birth_date(*date, today) {
        None => Ok(()),
        Some(violation) => {
            let mut err = ValidationError::new(violation.code());
            err.message = Some(Cow::Owned(violation.message()));
            Err(err)
        }
    }
}

/// Normalize an optional last name: trimmed, empty when absent.
pub fn normalize_last_name(last_name: Option<&str>) -> String {
    last_name.map(str::trim).unwrap_or_default().to_string()
}

/// Whether `user_id` is the recorded author of an entry.
pub fn is_author(author_id: Option<DbId>, user_id: DbId) -> bool {
    author_id == Some(user_id)
}

/// Only the author may change or remove an entry. Entries without an author
/// are read-only for everyone.
pub fn ensure_author(author_id: Option<DbId>, user_id: DbId) -> Result<(), CoreError> {
    if is_author(author_id, user_id) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Only the author can modify this birthday".into(),
        ))
    }
}
