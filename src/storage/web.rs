//! Browser `localStorage` backend

use crate::storage::{KeyValueStorage, StorageError};

/// Key-value backend over `window.localStorage`.
///
/// Unavailable when there is no window, e.g. during server-side rendering.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Backend("localStorage is not available".to_string()))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for LocalStorage {
    fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::store::{create, Availability};
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let storage = LocalStorage::new();
        assert!(storage.is_available());

        storage.set_item("localstore-test", "[1, 2]").unwrap();
        assert_eq!(
            storage.get_item("localstore-test").unwrap().as_deref(),
            Some("[1, 2]")
        );
    }

    #[wasm_bindgen_test]
    fn test_persisted_store_over_local_storage() {
        let backend: Rc<dyn KeyValueStorage> = Rc::new(LocalStorage::new());
        let Availability::Available(store) = create(backend.clone(), "localstore-prefs", 0u32)
            .unwrap()
        else {
            panic!("localStorage should be available in a browser");
        };

        store.set(7).unwrap();

        assert_eq!(backend.get_item("localstore-prefs").unwrap().as_deref(), Some("7"));
    }
}
