//! Shared field checks.
//!
//! Bounds here match what the API enforces server-side; running them
//! locally keeps a bad value from ever producing a request.

use plural_error::{ValidationError, ValidationErrorKind};

/// Check a string's character count against inclusive bounds.
pub(crate) fn length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual < min || actual > max {
        return Err(ValidationError::new(ValidationErrorKind::Length {
            field: field.to_string(),
            min,
            max,
            actual,
        }));
    }
    Ok(())
}

/// Check a collection's size against an inclusive cap.
pub(crate) fn max_entries<T>(
    field: &str,
    entries: &[T],
    max: usize,
) -> Result<(), ValidationError> {
    if entries.len() > max {
        return Err(ValidationError::new(ValidationErrorKind::TooManyEntries {
            field: field.to_string(),
            max,
            actual: entries.len(),
        }));
    }
    Ok(())
}

/// Check a numeric value against inclusive bounds.
pub(crate) fn range(field: &str, value: i64, min: i64, max: i64) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::new(ValidationErrorKind::Range {
            field: field.to_string(),
            min,
            max,
            actual: value,
        }));
    }
    Ok(())
}
