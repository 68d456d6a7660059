//! Configuration types
//!
//! Application configuration and the persisted preference values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Storage key used for the viewing history when none is configured.
pub const DEFAULT_HISTORY_KEY: &str = "jfr2025-media-history";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding persisted stores (defaults to `<data dir>/store`)
    #[serde(default)]
    pub storage_dir: Option<String>,
    /// Storage key of the media viewing history
    #[serde(default = "default_history_key")]
    pub history_key: String,
}

fn default_history_key() -> String {
    DEFAULT_HISTORY_KEY.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            history_key: default_history_key(),
        }
    }
}

impl AppConfig {
    /// Normalize blank values back to their defaults.
    pub fn validate(&mut self) {
        if self.history_key.trim().is_empty() {
            self.history_key = default_history_key();
        }

        if self
            .storage_dir
            .as_deref()
            .is_some_and(|dir| dir.trim().is_empty())
        {
            self.storage_dir = None;
        }
    }
}

/// Filter and sort options of the media list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Free-text keyword
    pub filter_keyword: String,
    pub sort_alphabetically: bool,
    /// Hide everything that is not a video
    pub only_videos: bool,
    /// Date filter as `YYYY-MM-DD`, empty when unset
    pub selected_date: String,
}

impl FilterOptions {
    /// The date filter, if one is set and well-formed.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        let raw = self.selected_date.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

/// Playback preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackPrefs {
    pub autoplay: bool,
}

/// One viewed media item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub media_id: String,
    #[serde(default)]
    pub title: String,
    pub viewed_at: DateTime<Utc>,
}

/// Viewing history, most recent first
pub type MediaHistory = Vec<HistoryEntry>;

/// Record a view, moving an already-viewed item to the front.
pub fn record_view(history: &mut MediaHistory, entry: HistoryEntry) {
    history.retain(|existing| existing.media_id != entry.media_id);
    history.insert(0, entry);
}
