use crate::store::PersistedStore;
use crate::types::config::FilterOptions;
use crate::ui::bridge::{save, use_persisted};
use dioxus::prelude::*;

#[component]
pub fn FilterBar(store: PersistedStore<FilterOptions>) -> Element {
    let options = use_persisted(&store);
    let current = options.read().clone();
    let has_valid_date = current.selected_date.is_empty() || current.selected_date().is_some();

    let keyword_store = store.clone();
    let sort_store = store.clone();
    let videos_store = store.clone();
    let date_store = store.clone();

    rsx! {
        div {
            class: "p-5 rounded-2xl glass-md space-y-4",

            h3 {
                class: "text-base font-semibold text-[var(--text-primary)]",
                "Filters"
            }

            input {
                r#type: "search",
                class: "w-full px-3 py-2 rounded-lg bg-white/[0.02] border border-[var(--border-subtle)]",
                placeholder: "Filter by keyword",
                value: "{current.filter_keyword}",
                oninput: move |evt: FormEvent| {
                    let keyword = evt.value();
                    save(&keyword_store, |options| options.filter_keyword = keyword);
                },
            }

            div {
                class: "flex items-center gap-3",
                ToggleRow {
                    label: "Sort alphabetically",
                    active: current.sort_alphabetically,
                    onclick: move |_| {
                        save(&sort_store, |options| {
                            options.sort_alphabetically = !options.sort_alphabetically;
                        });
                    },
                }
                ToggleRow {
                    label: "Only videos",
                    active: current.only_videos,
                    onclick: move |_| {
                        save(&videos_store, |options| options.only_videos = !options.only_videos);
                    },
                }
            }

            div {
                input {
                    r#type: "date",
                    class: "px-3 py-2 rounded-lg bg-white/[0.02] border border-[var(--border-subtle)]",
                    value: "{current.selected_date}",
                    oninput: move |evt: FormEvent| {
                        let date = evt.value();
                        save(&date_store, |options| options.selected_date = date);
                    },
                }
                if !has_valid_date {
                    div {
                        class: "text-xs text-[var(--text-tertiary)] mt-1",
                        "Date is ignored until it reads YYYY-MM-DD"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ToggleRow(label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between gap-3",
            div { class: "text-sm font-medium text-[var(--text-primary)]", "{label}" }
            button {
                onclick: onclick,
                class: if active { "toggle-switch active" } else { "toggle-switch" },
                div { class: "toggle-switch-knob" }
            }
        }
    }
}
