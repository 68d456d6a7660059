//! Store-to-signal bridge

use crate::store::PersistedStore;
use dioxus::prelude::*;
use serde::Serialize;

/// Mirror a persisted store into a Dioxus signal for the lifetime of the component.
pub fn use_persisted<T>(store: &PersistedStore<T>) -> Signal<T>
where
    T: Serialize + Clone + PartialEq + 'static,
{
    let signal = use_signal(|| store.get());

    let handle = use_hook(|| {
        store.subscribe(move |value: &T| {
            if *signal.peek() != *value {
                let mut target = signal;
                target.set(value.clone());
            }
        })
    });
    use_drop(move || handle.unsubscribe());

    signal
}

/// Apply `mutator` and persist, logging failures.
pub fn save<T>(store: &PersistedStore<T>, mutator: impl FnOnce(&mut T))
where
    T: Serialize + Clone + 'static,
{
    if let Err(error) = store.update_persisted(mutator) {
        tracing::error!("Failed to save '{}': {}", store.key(), error);
    }
}
