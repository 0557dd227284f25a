//! Field checks shared by the form commands

use crate::error::{PlatformError, Result};

/// Trimmed value of a required text field
pub fn require<'a>(field: &'static str, value: &'a str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlatformError::validation(field, message));
    }
    Ok(trimmed)
}

/// Loose address check: something before the `@`, a dotted domain after it
pub fn is_valid_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Trimmed value of a required e-mail field
pub fn require_email<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = require(field, value, "E-mail é obrigatório")?;
    if !is_valid_email(trimmed) {
        return Err(PlatformError::validation(field, "E-mail inválido"));
    }
    Ok(trimmed)
}
