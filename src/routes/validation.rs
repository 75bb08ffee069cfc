use crate::constants::ERR_INVALID_EMAIL;
use crate::error::{AppError, Result};

/// Trimmed value of a required text field
pub fn require_text(value: &str, missing: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        tracing::warn!("Rejected form submission: {}", missing);
        return Err(AppError::InvalidInput(missing.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Trimmed value of a required email field
///
/// Only checks for an `@`; deliverability is not verified.
pub fn require_email(value: &str, missing: &str) -> Result<String> {
    let email = require_text(value, missing)?;
    if !email.contains('@') {
        tracing::warn!("Rejected form submission: invalid email");
        return Err(AppError::InvalidInput(ERR_INVALID_EMAIL.to_string()));
    }
    Ok(email)
}

/// Checkbox fields are only sent when ticked
pub fn checkbox(value: &Option<String>) -> bool {
    value.is_some()
}
