use crate::store::PersistedStore;
use crate::types::config::PlaybackPrefs;
use crate::ui::bridge::use_persisted;
use crate::ui::filters::ToggleRow;
use dioxus::prelude::*;

#[component]
pub fn PlaybackSettings(store: PersistedStore<PlaybackPrefs>) -> Element {
    let prefs = use_persisted(&store);
    let autoplay = prefs.read().autoplay;

    rsx! {
        div {
            class: "p-5 rounded-2xl glass-md",

            h3 {
                class: "text-base font-semibold mb-5 text-[var(--text-primary)]",
                "Playback"
            }

            ToggleRow {
                label: "Autoplay next item",
                active: autoplay,
                onclick: move |_| {
                    if let Err(error) = store.set(PlaybackPrefs { autoplay: !autoplay }) {
                        tracing::error!("Failed to save playback preferences: {}", error);
                    }
                },
            }
        }
    }
}
