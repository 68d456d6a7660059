//! File-backed storage
//!
//! Stores each key as its own JSON file inside a directory, by default the
//! application data directory.

use crate::storage::{get_data_dir, KeyValueStorage, StorageError};
use std::fmt::Write;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key-value backend persisting one file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Backend rooted at `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backend rooted at `<data dir>/store`.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(get_data_dir()?.join("store")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", encode_key(key)))
    }
}

/// Map a storage key onto a file name, one-to-one.
///
/// Lowercase ASCII letters, digits, `-` and `_` are kept; every other byte is
/// written as `%XX`. Escaping uppercase keeps distinct keys apart on
/// case-insensitive filesystems. The empty key maps to `%`.
fn encode_key(key: &str) -> String {
    if key.is_empty() {
        return "%".to_string();
    }

    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if matches!(byte, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_') {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}

impl KeyValueStorage for FileStorage {
    fn is_available(&self) -> bool {
        match fs::create_dir_all(&self.dir) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Storage directory {} unusable: {}", self.dir.display(), e);
                false
            }
        }
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        tracing::debug!("Wrote key '{}' to {}", key, self.dir.display());
        Ok(())
    }
}
