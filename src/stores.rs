//! Application preference stores
//!
//! The three persisted values the media viewer keeps: list filters, viewing
//! history and playback preferences. They are created together against one
//! backend and handed around as an owned [`AppStores`].

use crate::storage::{KeyValueStorage, StorageError};
use crate::store::{create, Availability, PersistedStore};
use crate::types::config::{AppConfig, FilterOptions, MediaHistory, PlaybackPrefs};
use std::rc::Rc;

pub const FILTER_OPTIONS_KEY: &str = "filter-options";
pub const PREFS_KEY: &str = "prefs";

/// Handles to every persisted preference.
#[derive(Clone, Debug, PartialEq)]
pub struct AppStores {
    pub filter_options: PersistedStore<FilterOptions>,
    pub media_history: PersistedStore<MediaHistory>,
    pub prefs: PersistedStore<PlaybackPrefs>,
}

impl AppStores {
    /// Create all stores, or `Unavailable` if the backend cannot be used.
    pub fn create(
        backend: Rc<dyn KeyValueStorage>,
        config: &AppConfig,
    ) -> Result<Availability<Self>, StorageError> {
        let Availability::Available(filter_options) =
            create(Rc::clone(&backend), FILTER_OPTIONS_KEY, FilterOptions::default())?
        else {
            tracing::info!("Storage unavailable, preference stores disabled");
            return Ok(Availability::Unavailable);
        };

        let Availability::Available(media_history) = create(
            Rc::clone(&backend),
            config.history_key.as_str(),
            MediaHistory::new(),
        )?
        else {
            return Ok(Availability::Unavailable);
        };

        let Availability::Available(prefs) = create(backend, PREFS_KEY, PlaybackPrefs::default())?
        else {
            return Ok(Availability::Unavailable);
        };

        Ok(Availability::Available(Self {
            filter_options,
            media_history,
            prefs,
        }))
    }
}
