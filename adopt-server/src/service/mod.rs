//! Service Module
//!
//! Business logic layer for the API.
//! Services validate payloads, call repositories and turn absent records
//! into `NotFound` errors.

pub mod pet;
pub mod shelter;
pub mod user;

// Re-export for convenience
pub use pet as pet_service;
pub use shelter as shelter_service;
pub use user as user_service;

// =============================================================================
// Shared Validation
// =============================================================================

const MAX_NAME_LENGTH: usize = 255;

/// Reject blank values for fields that identify or classify a record
fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", field));
    }
    Ok(())
}

fn validate_name(value: &str) -> Result<(), String> {
    require_text("name", value)?;

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "name is too long (max {} characters)",
            MAX_NAME_LENGTH
        ));
    }

    Ok(())
}

fn validate_email(value: &str) -> Result<(), String> {
    require_text("email", value)?;

    if !value.contains('@') {
        return Err(format!("email '{}' is not a valid address", value));
    }

    Ok(())
}

/// Run `check` only when the patch carries the field
fn validate_present(
    value: Option<&String>,
    check: impl Fn(&str) -> Result<(), String>,
) -> Result<(), String> {
    value.map_or(Ok(()), |v| check(v.as_str()))
}
