//! UI components
//!
//! Dioxus views over the persisted preference stores.

#![allow(non_snake_case)]

pub mod bridge;
pub mod filters;
pub mod history;
pub mod playback;

use crate::app::{AppState, StoreStatus};
use crate::ui::filters::FilterBar;
use crate::ui::history::HistoryList;
use crate::ui::playback::PlaybackSettings;
use dioxus::prelude::*;

pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();

    rsx! {
        div {
            class: "flex flex-col h-full min-h-0",

            div {
                class: "flex-1 overflow-y-auto p-6 scrollbar-thin",
                match app_state.stores {
                    StoreStatus::Ready(stores) => rsx! {
                        div {
                            class: "space-y-6 max-w-3xl mx-auto pb-8",
                            FilterBar { store: stores.filter_options.clone() }
                            PlaybackSettings { store: stores.prefs.clone() }
                            HistoryList { store: stores.media_history.clone() }
                        }
                    },
                    StoreStatus::Disabled => rsx! {
                        Notice { message: "Preferences are not saved in this environment." }
                    },
                    StoreStatus::Failed(error) => rsx! {
                        Notice { message: "Saved preferences could not be read: {error}" }
                    },
                }
            }
        }
    }
}

#[component]
fn Notice(message: String) -> Element {
    rsx! {
        div {
            class: "p-5 rounded-2xl glass-md text-sm text-[var(--text-secondary)]",
            "{message}"
        }
    }
}
