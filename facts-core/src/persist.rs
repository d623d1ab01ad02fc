//! Whole-file JSON persistence for the catalog and preference stores.
//!
//! Both stores keep their durable state as a single pretty-printed JSON
//! document that is rewritten wholesale on every mutation, so the file on
//! disk is always a complete, directly loadable snapshot. Writes are plain
//! synchronous `std::fs` calls; the stores hold their lock across the write.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Save a value to a JSON file, replacing any previous content.
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), PersistError> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

/// Load a value from a JSON file.
///
/// A missing file is not an error: it returns `Ok(None)` so callers can
/// distinguish "first boot" from a genuinely unreadable file.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Option<T>, PersistError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    Ok(Some(value))
}
