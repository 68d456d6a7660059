use crate::store::PersistedStore;
use crate::types::config::MediaHistory;
use crate::ui::bridge::use_persisted;
use dioxus::prelude::*;

#[component]
pub fn HistoryList(store: PersistedStore<MediaHistory>) -> Element {
    let history = use_persisted(&store);
    let rows: Vec<(String, String, String)> = history
        .read()
        .iter()
        .map(|entry| {
            let label = if entry.title.is_empty() {
                entry.media_id.clone()
            } else {
                entry.title.clone()
            };
            let viewed = entry.viewed_at.format("%Y-%m-%d %H:%M").to_string();
            (entry.media_id.clone(), label, viewed)
        })
        .collect();

    rsx! {
        div {
            class: "p-5 rounded-2xl glass-md",

            div {
                class: "flex items-center justify-between mb-4",
                h3 {
                    class: "text-base font-semibold text-[var(--text-primary)]",
                    "Recently viewed"
                }
                if !rows.is_empty() {
                    button {
                        class: "text-xs text-[var(--text-tertiary)] hover:text-[var(--text-secondary)]",
                        onclick: move |_| {
                            if let Err(error) = store.set(MediaHistory::new()) {
                                tracing::error!("Failed to clear history: {}", error);
                            }
                        },
                        "Clear"
                    }
                }
            }

            if rows.is_empty() {
                div { class: "text-sm text-[var(--text-tertiary)]", "Nothing viewed yet" }
            }

            for (media_id, label, viewed) in rows {
                div {
                    key: "{media_id}",
                    class: "flex items-center justify-between py-2 border-b border-[var(--border-subtle)]",
                    span {
                        class: "text-sm text-[var(--text-primary)]",
                        "{label}"
                    }
                    span {
                        class: "text-xs text-[var(--text-tertiary)]",
                        "{viewed}"
                    }
                }
            }
        }
    }
}
