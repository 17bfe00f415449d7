//! Contact field validation rules.
//!
//! The single source of truth for what counts as a valid contact. The API
//! handlers and the client both call these functions, so the two surfaces
//! cannot drift apart.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// Regex pattern for email addresses: a non-space local part, `@`, and a
/// non-space domain containing at least one dot.
pub const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

/// Regex pattern for phone numbers: exactly 10 ASCII digits.
///
/// `[0-9]` rather than `\d`, which would also match non-ASCII digits.
pub const PHONE_PATTERN: &str = r"^[0-9]{10}$";

/// Compiled email regex. Compiled once, reused forever.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Compiled phone regex. Compiled once, reused forever.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a contact name: must be non-empty.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate an email address against [`EMAIL_PATTERN`].
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !EMAIL_RE.is_match(email) {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )));
    }
    Ok(())
}

/// Validate a phone number against [`PHONE_PATTERN`].
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if !PHONE_RE.is_match(phone) {
        return Err(CoreError::Validation(format!(
            "Phone number must be exactly 10 digits (got '{phone}')"
        )));
    }
    Ok(())
}

/// Validate all contact fields, in order: name, then email, then phone.
///
/// The first failing rule is reported; later fields are not inspected.
pub fn validate_contact_fields(name: &str, email: &str, phone: &str) -> Result<(), CoreError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_phone(phone)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
