//! Explicit field validation. Each function returns a tagged result so
//! callers surface the exact message for the failing field before any
//! store call is made.

use std::str::FromStr;

use crate::errors::{StudioError, StudioResult};
use crate::models::fitness_class::ClassType;

/// A `class_id` must be present and non-zero.
pub fn require_class_id(class_id: Option<i64>) -> StudioResult<i64> {
    match class_id {
        Some(id) if id != 0 => Ok(id),
        _ => Err(StudioError::Validation("class_id is required.".to_string())),
    }
}

/// Rejects missing or blank string fields with a `<field> cannot be blank.`
/// message.
pub fn require_non_blank<'a>(value: Option<&'a str>, field: &str) -> StudioResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(StudioError::Validation(format!("{field} cannot be blank."))),
    }
}

/// Syntactic email check: one `@`, non-empty local part, and a domain
/// containing a dot. Deliberately loose; the store's unique constraint is
/// what enforces identity.
pub fn validate_email(email: &str) -> StudioResult<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(StudioError::Validation(
            "client_email must be a valid email address.".to_string(),
        ))
    }
}

/// Parses a `class_name` into one of the offered class types.
pub fn parse_class_type(class_name: Option<&str>) -> StudioResult<ClassType> {
    let name = class_name.ok_or_else(|| {
        StudioError::Validation("class_name must be one of Yoga, Zumba, HIIT.".to_string())
    })?;
    ClassType::from_str(name)
}

/// Slot counts start non-negative; they are only ever decremented from there.
pub fn require_available_slots(available_slots: Option<i32>) -> StudioResult<i32> {
    match available_slots {
        Some(slots) if slots >= 0 => Ok(slots),
        _ => Err(StudioError::Validation(
            "available_slots must be a non-negative integer.".to_string(),
        )),
    }
}
