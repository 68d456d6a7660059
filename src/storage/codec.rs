//! Text encoding of stored values
//!
//! Values are stored as pretty-printed JSON with two-space indentation.

use crate::storage::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Text used when a key unexpectedly reads back empty.
pub const EMPTY_MAPPING: &str = "{}";

pub fn encode<T: Serialize>(value: &T) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode text stored under `key`.
pub fn decode<T: DeserializeOwned>(key: &str, text: &str) -> Result<T, StorageError> {
    serde_json::from_str(text).map_err(|source| StorageError::MalformedStoredValue {
        key: key.to_string(),
        source,
    })
}
