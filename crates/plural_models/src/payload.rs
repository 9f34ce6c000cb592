//! Minimal PATCH bodies from tri-state fields.

use plural_core::Patch;
use plural_error::JsonError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Insert a tri-state field into a body map.
///
/// Omitted fields stay absent, cleared fields land as `null`, present
/// values serialize as themselves. The resulting body carries exactly the
/// caller's instructions and nothing else.
pub(crate) fn put<T: Serialize>(
    body: &mut Map<String, Value>,
    key: &str,
    field: &Patch<T>,
) -> Result<(), JsonError> {
    match field {
        Patch::Omitted => {}
        Patch::Null => {
            body.insert(key.to_string(), Value::Null);
        }
        Patch::Present(value) => {
            let value =
                serde_json::to_value(value).map_err(|e| JsonError::new(e.to_string()))?;
            body.insert(key.to_string(), value);
        }
    }
    Ok(())
}
