use dioxus::prelude::*;

use crate::client::model::{feed::FeedFilter, sort::SortOption};

#[component]
pub fn SortBy(mut filter: Signal<FeedFilter>) -> Element {
    let current = filter.read().sort;

    rsx! {
        label {
            class: "flex items-center gap-2",
            span { class: "text-sm opacity-70", "Sort by" }
            select {
                class: "select select-sm",
                value: "{current.value()}",
                onchange: move |evt| {
                    if let Some(sort) = SortOption::from_value(&evt.value()) {
                        filter.write().sort = sort;
                    }
                },
                for option in SortOption::ALL {
                    option {
                        key: "{option.value()}",
                        value: "{option.value()}",
                        selected: option == current,
                        "{option.label()}"
                    }
                }
            }
        }
    }
}
