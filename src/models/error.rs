//! Validation errors raised while building or editing entities.

use thiserror::Error;

/// Errors that can occur when validating entity input.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ModelError {
    /// A required text field was missing or blank.
    #[error("{0} is required")]
    Required(&'static str),
    /// The email address does not look like `local@domain`.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    /// The player or guest is not on this tournament's roster.
    #[error("Not on the roster: {0}")]
    NotOnRoster(uuid::Uuid),
    /// A group holds more members than its capacity allows.
    #[error("Too many people: {members} in a group of {capacity}")]
    OverCapacity { members: usize, capacity: usize },
}

/// Trim `value` and reject it if nothing is left.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ModelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Blank optional text collapses to `None`.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
