//! Root Dioxus application component
//!
//! Opens the preference stores once and shares their handles through context.

use crate::storage::settings::load_config;
#[cfg(not(feature = "web"))]
use crate::storage::FileStorage;
#[cfg(feature = "web")]
use crate::storage::LocalStorage;
use crate::storage::{KeyValueStorage, StorageError};
use crate::store::Availability;
use crate::stores::AppStores;
use crate::types::config::AppConfig;
use crate::ui::Layout;
use dioxus::prelude::*;
use std::rc::Rc;

/// Whether persisted preferences could be opened
#[derive(Clone, PartialEq, Debug)]
pub enum StoreStatus {
    Ready(AppStores),
    /// No usable storage in this environment
    Disabled,
    /// Stored preferences could not be read
    Failed(String),
}

/// Application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub stores: StoreStatus,
}

impl AppState {
    pub fn new() -> Self {
        let config = load_config();
        let stores = match open_stores(&config) {
            Ok(Availability::Available(stores)) => StoreStatus::Ready(stores),
            Ok(Availability::Unavailable) | Err(StorageError::NoDataDir) => {
                tracing::warn!("Persistent storage unavailable, preferences disabled");
                StoreStatus::Disabled
            }
            Err(e) => {
                tracing::error!("Failed to open preference stores: {}", e);
                StoreStatus::Failed(e.to_string())
            }
        };

        tracing::info!("AppState initialized");
        Self { config, stores }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn open_stores(config: &AppConfig) -> Result<Availability<AppStores>, StorageError> {
    AppStores::create(open_backend(config)?, config)
}

#[cfg(not(feature = "web"))]
fn open_backend(config: &AppConfig) -> Result<Rc<dyn KeyValueStorage>, StorageError> {
    let backend = match config.storage_dir.as_deref() {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::open_default()?,
    };
    tracing::info!("Using preference storage at {}", backend.dir().display());
    Ok(Rc::new(backend))
}

/// Browser builds keep preferences in `localStorage`; `storage_dir` is ignored.
#[cfg(feature = "web")]
fn open_backend(_config: &AppConfig) -> Result<Rc<dyn KeyValueStorage>, StorageError> {
    tracing::info!("Using browser localStorage for preferences");
    Ok(Rc::new(LocalStorage::new()))
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
