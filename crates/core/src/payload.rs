//! Helpers for the dynamic JSON payloads the entity services accept.
//!
//! Payload keys are entity-prefixed wire names, so request bodies arrive as
//! plain JSON objects rather than typed DTOs. These helpers are the
//! whitelist/typing boundary: unknown keys, wrong value types, and missing
//! required fields are all rejected here before any record is touched.

use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::types::DbId;

/// A request body: JSON object with dynamic, descriptor-driven keys.
pub type FieldMap = serde_json::Map<String, Value>;

/// Reject any key in `data` that is not in `allowed`.
///
/// This replaces the original reflective "does a setter exist" probe with a
/// static allow-list; the explicit setter dispatch lives in the service.
pub fn ensure_known_fields(data: &FieldMap, allowed: &[&str]) -> DomainResult<()> {
    for key in data.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(DomainError::InvalidField { field: key.clone() });
        }
    }
    Ok(())
}

/// Read an optional string field. JSON `null` counts as absent; any other
/// non-string value is a type error.
pub fn opt_str<'a>(data: &'a FieldMap, field: &'static str) -> DomainResult<Option<&'a str>> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(DomainError::InvalidFormat(format!(
            "{field} must be a string"
        ))),
    }
}

/// Read a required string field.
pub fn require_str<'a>(data: &'a FieldMap, field: &'static str) -> DomainResult<&'a str> {
    opt_str(data, field)?.ok_or(DomainError::MissingField { field })
}

/// Parse an id-valued field. Absent or `null` is a missing field; anything
/// that is not a JSON integer is a type error.
pub fn parse_id(field: &'static str, value: Option<&Value>) -> DomainResult<DbId> {
    match value {
        None | Some(Value::Null) => Err(DomainError::MissingField { field }),
        Some(Value::Number(n)) => n.as_i64().ok_or(DomainError::InvalidType { field }),
        Some(_) => Err(DomainError::InvalidType { field }),
    }
}

/// Read a required boolean field.
pub fn require_bool(data: &FieldMap, field: &'static str) -> DomainResult<bool> {
    match data.get(field) {
        None | Some(Value::Null) => Err(DomainError::MissingField { field }),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(DomainError::InvalidType { field }),
    }
}

/// Conditional field update: no-op when `field` is absent from `data`,
/// otherwise run `validate` on the new value and hand it back for the
/// caller's explicit setter.
///
/// Used for the natural-key and translation-name fields that need
/// format + uniqueness re-validation on every update.
pub fn update_if_present<'a, F>(
    data: &'a FieldMap,
    field: &'static str,
    validate: F,
) -> DomainResult<Option<&'a str>>
where
    F: FnOnce(&str) -> DomainResult<()>,
{
    match opt_str(data, field)? {
        None => Ok(None),
        Some(value) => {
            validate(value)?;
            Ok(Some(value))
        }
    }
}
