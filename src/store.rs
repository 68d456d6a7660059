//! Persisted reactive values
//!
//! A [`PersistedStore`] binds a storage key to a [`KeyValueStorage`] backend and
//! exposes a [`Writable`] whose explicit writes are mirrored to the backend.
//!
//! ```rust,ignore
//! let backend: Rc<dyn KeyValueStorage> = Rc::new(FileStorage::open_default()?);
//! if let Availability::Available(prefs) = create(backend, "prefs", PlaybackPrefs::default())? {
//!     prefs.set(PlaybackPrefs { autoplay: true })?;
//! }
//! ```

use crate::reactive::{Unsubscriber, Writable};
use crate::storage::codec::{decode, encode, EMPTY_MAPPING};
use crate::storage::{KeyValueStorage, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// Identifier of one persisted setting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StorageKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for StorageKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of construction in an environment that may lack storage.
#[derive(Debug)]
pub enum Availability<S> {
    Available(S),
    /// Storage is not usable here; the feature is disabled.
    Unavailable,
}

impl<S> Availability<S> {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn into_option(self) -> Option<S> {
        match self {
            Self::Available(store) => Some(store),
            Self::Unavailable => None,
        }
    }
}

/// Reactive value mirrored to durable storage under one key.
pub struct PersistedStore<T> {
    key: StorageKey,
    backend: Rc<dyn KeyValueStorage>,
    value: Writable<T>,
}

impl<T> Clone for PersistedStore<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            backend: Rc::clone(&self.backend),
            value: self.value.clone(),
        }
    }
}

/// Two handles are equal when they share the same underlying value.
impl<T: Clone + 'static> PartialEq for PersistedStore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value.ptr_eq(&other.value)
    }
}

impl<T> fmt::Debug for PersistedStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Create a store for `key`, materializing `initial_value` if the key is absent.
///
/// Returns [`Availability::Unavailable`] without touching the backend when the
/// backend reports itself unusable. Stored text that does not decode is an
/// error; it is neither replaced nor recovered from.
pub fn create<T>(
    backend: Rc<dyn KeyValueStorage>,
    key: impl Into<StorageKey>,
    initial_value: T,
) -> Result<Availability<PersistedStore<T>>, StorageError>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    if !backend.is_available() {
        return Ok(Availability::Unavailable);
    }

    let key = key.into();

    if backend.get_item(key.as_str())?.is_none() {
        tracing::info!("Key '{}' not found, writing default value", key);
        backend.set_item(key.as_str(), &encode(&initial_value)?)?;
    }

    let text = backend
        .get_item(key.as_str())?
        .unwrap_or_else(|| EMPTY_MAPPING.to_string());
    let saved: T = decode(key.as_str(), &text)?;

    tracing::debug!("Loaded key '{}' from storage", key);
    Ok(Availability::Available(PersistedStore {
        key,
        backend,
        value: Writable::new(saved),
    }))
}

impl<T> PersistedStore<T>
where
    T: Serialize + Clone + 'static,
{
    pub fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Current in-memory value.
    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Unsubscriber {
        self.value.subscribe(observer)
    }

    /// Write `value` to storage, then publish it to subscribers.
    ///
    /// Nothing is published if encoding or the write fails.
    pub fn set(&self, value: T) -> Result<(), StorageError> {
        self.backend.set_item(self.key.as_str(), &encode(&value)?)?;
        tracing::debug!("Persisted key '{}'", self.key);
        self.value.set(value);
        Ok(())
    }

    /// Mutate the in-memory value only.
    ///
    /// Storage is not written; the change is lost on restart unless a later
    /// `set` or [`update_persisted`](Self::update_persisted) persists it.
    pub fn update(&self, mutator: impl FnOnce(&mut T)) {
        self.value.update(mutator);
    }

    /// Mutate a copy of the current value and persist it through [`set`](Self::set).
    pub fn update_persisted(&self, mutator: impl FnOnce(&mut T)) -> Result<(), StorageError> {
        let mut next = self.value.get();
        mutator(&mut next);
        self.set(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde::Deserialize;
    use serde_json::{json, Value};
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        autoplay: bool,
    }

    /// Memory backend that counts calls and can report itself unavailable.
    #[derive(Default)]
    struct RecordingStorage {
        inner: MemoryStorage,
        unavailable: bool,
        reads: Cell<usize>,
        writes: Cell<usize>,
    }

    impl KeyValueStorage for RecordingStorage {
        fn is_available(&self) -> bool {
            !self.unavailable
        }

        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.reads.set(self.reads.get() + 1);
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            self.inner.set_item(key, value)
        }
    }

    fn stored(backend: &dyn KeyValueStorage, key: &str) -> Value {
        let text = backend.get_item(key).unwrap().expect("key present");
        serde_json::from_str(&text).unwrap()
    }

    fn available<T>(availability: Availability<PersistedStore<T>>) -> PersistedStore<T> {
        availability.into_option().expect("store should be available")
    }

    #[test]
    fn test_default_is_materialized() {
        let backend = Rc::new(MemoryStorage::new());
        let initial = json!({ "filterKeyword": "", "onlyVideos": false, "tags": [1, 2] });

        let store = available(create(backend.clone(), "filter-options", initial.clone()).unwrap());

        assert_eq!(stored(&*backend, "filter-options"), initial);
        assert_eq!(store.get(), initial);
    }

    #[test]
    fn test_existing_value_is_not_overwritten() {
        let backend = Rc::new(RecordingStorage::default());
        backend.inner.set_item("history", "[\"a\",\"b\"]").unwrap();

        let store = available(create(backend.clone(), "history", json!([])).unwrap());

        assert_eq!(store.get(), json!(["a", "b"]));
        assert_eq!(backend.writes.get(), 0);
        assert_eq!(
            backend.inner.get_item("history").unwrap().as_deref(),
            Some("[\"a\",\"b\"]")
        );
    }

    #[test]
    fn test_last_set_wins_in_storage() {
        let backend = Rc::new(MemoryStorage::new());
        let store = available(create(backend.clone(), "counter", 0u32).unwrap());

        for value in [1, 7, 3, 42] {
            store.set(value).unwrap();
        }

        assert_eq!(stored(&*backend, "counter"), json!(42));
        assert_eq!(store.get(), 42);
    }

    #[test]
    fn test_storage_written_before_observers_run() {
        let backend = Rc::new(MemoryStorage::new());
        let store = available(create(backend.clone(), "prefs", Prefs { autoplay: false }).unwrap());

        let observed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed);
        let probe = backend.clone();
        let _handle = store.subscribe(move |value: &Prefs| {
            let on_disk = probe.get_item("prefs").unwrap().unwrap();
            let on_disk: Prefs = serde_json::from_str(&on_disk).unwrap();
            sink.borrow_mut().push((value.clone(), on_disk));
        });

        store.set(Prefs { autoplay: true }).unwrap();

        let observed = observed.borrow();
        assert_eq!(observed.len(), 2);
        let (value, on_disk) = &observed[1];
        assert!(value.autoplay);
        assert_eq!(value, on_disk);
    }

    #[test]
    fn test_unavailable_backend_is_untouched() {
        let backend = Rc::new(RecordingStorage {
            unavailable: true,
            ..Default::default()
        });

        let result = create(backend.clone(), "prefs", Prefs { autoplay: false }).unwrap();

        assert!(!result.is_available());
        assert_eq!(backend.reads.get(), 0);
        assert_eq!(backend.writes.get(), 0);
    }

    #[test]
    fn test_prefs_scenario() {
        let backend = Rc::new(MemoryStorage::new());

        let initial = json!({ "autoplay": false });
        let prefs = available(create(backend.clone(), "prefs", initial).unwrap());
        assert_eq!(
            backend.get_item("prefs").unwrap().as_deref(),
            Some("{\n  \"autoplay\": false\n}")
        );
        assert_eq!(prefs.get(), json!({ "autoplay": false }));

        prefs.set(json!({ "autoplay": true })).unwrap();
        assert_eq!(
            backend.get_item("prefs").unwrap().as_deref(),
            Some("{\n  \"autoplay\": true\n}")
        );
        assert_eq!(prefs.get(), json!({ "autoplay": true }));
    }

    #[test]
    fn test_update_is_memory_only() {
        let backend = Rc::new(MemoryStorage::new());
        let store = available(create(backend.clone(), "history", Vec::<String>::new()).unwrap());

        store.update(|items| items.push("clip-1".to_string()));

        assert_eq!(store.get(), vec!["clip-1".to_string()]);
        assert_eq!(stored(&*backend, "history"), json!([]));
    }

    #[test]
    fn test_update_persisted_writes_through() {
        let backend = Rc::new(MemoryStorage::new());
        let store = available(create(backend.clone(), "history", Vec::<String>::new()).unwrap());

        store
            .update_persisted(|items| items.push("clip-1".to_string()))
            .unwrap();

        assert_eq!(stored(&*backend, "history"), json!(["clip-1"]));
        assert_eq!(store.get(), vec!["clip-1".to_string()]);
    }

    #[test]
    fn test_malformed_value_fails_construction() {
        let backend = Rc::new(MemoryStorage::new());
        backend.set_item("prefs", "{ autoplay: yes").unwrap();

        let error = create(backend.clone(), "prefs", Prefs { autoplay: false }).unwrap_err();

        assert!(matches!(
            error,
            StorageError::MalformedStoredValue { ref key, .. } if key == "prefs"
        ));
        assert_eq!(
            backend.get_item("prefs").unwrap().as_deref(),
            Some("{ autoplay: yes")
        );
    }

    #[test]
    fn test_unsubscribed_observer_sees_no_more_values() {
        let backend = Rc::new(MemoryStorage::new());
        let store = available(create(backend, "count", 0i64).unwrap());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let handle = store.subscribe(move |value: &i64| sink.borrow_mut().push(*value));
        store.set(1).unwrap();
        handle.unsubscribe();
        store.set(2).unwrap();

        assert_eq!(*seen.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_key_is_kept() {
        let backend = Rc::new(MemoryStorage::new());
        let store = available(create(backend, String::from("prefs"), true).unwrap());
        assert_eq!(store.key().as_str(), "prefs");
        assert_eq!(store.key().to_string(), "prefs");
    }
}
