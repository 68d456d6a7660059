//! Durable key-value storage
//!
//! This module defines the backend seam persisted stores write through, its
//! error type, and the concrete backends.

pub mod codec;
pub mod file;
pub mod memory;
pub mod settings;
#[cfg(feature = "web")]
pub mod web;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;
#[cfg(feature = "web")]
pub use web::LocalStorage;

/// Errors raised by storage backends and persisted stores.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed stored value for key '{key}': {source}")]
    MalformedStoredValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    NoDataDir,
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Synchronous string-to-text storage that survives restarts.
///
/// Every `set_item` is a single unconditional overwrite.
pub trait KeyValueStorage {
    /// Whether the backend can be used in the current execution context.
    fn is_available(&self) -> bool;

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Application data directory
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("org", "localstore", "localstore")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
