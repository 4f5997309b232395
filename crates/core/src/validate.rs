//! Character-class and length validation for the directory's string fields.
//!
//! Each rule mirrors the constraint on the corresponding wire field:
//! identity slugs, translation names/descriptions, and the employee profile
//! fields. Empty required values surface as `MissingField` so a blank
//! identity reads as "required" rather than "badly formatted".

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DomainError, DomainResult};

static IDENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 _/-]+$").expect("valid regex"));

static PROFILE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 ._-]+$").expect("valid regex"));

static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@:/._-]+$").expect("valid regex"));

/// Maximum length of a localized name.
pub const NAME_MAX: usize = 50;

/// Maximum length of a localized description.
pub const DESCRIPTION_MAX: usize = 500;

/// Maximum length of a social-media handle.
pub const HANDLE_MAX: usize = 100;

/// Validate a slug-like natural key (`CategoryLink`, `RoleStatusCode`, ...).
///
/// All-digit values are allowed here; only translation names reject them.
pub fn identity(field: &'static str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::MissingField { field });
    }
    if !IDENTITY_RE.is_match(value) {
        return Err(DomainError::InvalidFormat(format!(
            "{field} may only contain letters, digits, underscores and dashes"
        )));
    }
    Ok(())
}

/// Validate a localized name: 1-50 chars of letters/digits/space/_/-//,
/// and not composed of digits alone.
pub fn translation_name(field: &'static str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::MissingField { field });
    }
    if value.len() > NAME_MAX {
        return Err(DomainError::InvalidFormat(format!(
            "{field} must be at most {NAME_MAX} characters"
        )));
    }
    if !NAME_RE.is_match(value) {
        return Err(DomainError::InvalidFormat(format!(
            "{field} contains unsupported characters"
        )));
    }
    if value.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidFormat(format!(
            "{field} cannot consist of digits only"
        )));
    }
    Ok(())
}

/// Validate an optional localized description (<= 500 chars).
pub fn description(field: &'static str, value: &str) -> DomainResult<()> {
    if value.len() > DESCRIPTION_MAX {
        return Err(DomainError::InvalidFormat(format!(
            "{field} must be at most {DESCRIPTION_MAX} characters"
        )));
    }
    Ok(())
}

/// Validate an employee display name (same length rule as translation
/// names, slightly wider character class).
pub fn profile_name(field: &'static str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::MissingField { field });
    }
    if value.len() > NAME_MAX {
        return Err(DomainError::InvalidFormat(format!(
            "{field} must be at most {NAME_MAX} characters"
        )));
    }
    if !PROFILE_NAME_RE.is_match(value) {
        return Err(DomainError::InvalidFormat(format!(
            "{field} contains unsupported characters"
        )));
    }
    if value.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidFormat(format!(
            "{field} cannot consist of digits only"
        )));
    }
    Ok(())
}

/// Validate a social-media handle or profile URL fragment.
pub fn social_handle(field: &'static str, value: &str) -> DomainResult<()> {
    if value.len() > HANDLE_MAX {
        return Err(DomainError::InvalidFormat(format!(
            "{field} must be at most {HANDLE_MAX} characters"
        )));
    }
    if !value.is_empty() && !HANDLE_RE.is_match(value) {
        return Err(DomainError::InvalidFormat(format!(
            "{field} contains unsupported characters"
        )));
    }
    Ok(())
}
