//! Validation guards for inbound position data.
//!
//! Guards run before any storage call. Each check reports the first
//! offending field so clients get one actionable message at a time.

use thiserror::Error;

/// Maximum title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Result type for validation guards.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a position payload or list request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("budget must be greater than 0")]
    NonPositiveBudget,

    #[error("page size must be between 1 and {max}")]
    InvalidPageSize { max: u32 },

    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
}

/// Require a non-blank string of at most `max` characters.
///
/// Returns the value unchanged; surrounding whitespace is preserved.
pub fn require_text(
    field: &'static str,
    value: Option<&str>,
    max: Option<usize>,
) -> ValidationResult<String> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    if let Some(max) = max {
        if value.chars().count() > max {
            return Err(ValidationError::TooLong { field, max });
        }
    }
    Ok(value.to_string())
}
