//! Shared validation for user-submitted facts and topic keys.
//!
//! Fact-text validation belongs to the caller (the store never re-validates),
//! so every front end goes through this one validator to keep the bounds from
//! diverging. Topic normalization lives here too because the catalog, the
//! preference store, and the content source all need the same rule.

use thiserror::Error;

/// Minimum fact length in characters.
pub const MIN_FACT_CHARS: usize = 10;

/// Maximum fact length in characters.
pub const MAX_FACT_CHARS: usize = 500;

/// Error type for fact-text validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Fact text too short: {chars} characters (minimum is 10)")]
    TooShort { chars: usize },
    #[error("Fact text too long: {chars} characters (maximum is 500)")]
    TooLong { chars: usize },
}

/// Check user-submitted fact text against the length bounds.
///
/// Bounds are counted in characters, not bytes, since the content is
/// mostly Cyrillic.
pub fn fact_text(text: &str) -> Result<(), ValidationError> {
    let chars = text.chars().count();
    if chars < MIN_FACT_CHARS {
        return Err(ValidationError::TooShort { chars });
    }
    if chars > MAX_FACT_CHARS {
        return Err(ValidationError::TooLong { chars });
    }
    Ok(())
}

/// Normalize a topic name for storage and lookup.
///
/// Topic keys are compared case-insensitively; the stored form is always
/// the Unicode lower-cased one.
pub fn normalize_topic(topic: &str) -> String {
    topic.trim().to_lowercase()
}
