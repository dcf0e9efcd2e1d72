use dioxus::prelude::*;

use crate::{
    client::model::{
        category::{category_colour, category_names},
        feed::FeedFilter,
    },
    model::category::CategoryDto,
};

/// Sidebar of category buttons. "All" clears the category.
#[component]
pub fn CategoryFilter(categories: Vec<CategoryDto>, mut filter: Signal<FeedFilter>) -> Element {
    let selected = filter.read().category.clone();

    let buttons: Vec<(String, String, bool)> = category_names(&categories)
        .into_iter()
        .map(|name| {
            let colour = category_colour(&categories, &name);
            let active = selected.as_deref() == Some(name.as_str());
            (name, colour, active)
        })
        .collect();

    rsx! {
        aside {
            ul {
                class: "flex flex-col gap-2",
                li {
                    button {
                        class: if selected.is_none() { "btn btn-primary w-full" } else { "btn btn-outline w-full" },
                        onclick: move |_| filter.write().category = None,
                        "All"
                    }
                }
                for (name, colour, active) in buttons {
                    li {
                        key: "{name}",
                        button {
                            class: if active { "btn w-full text-white uppercase outline outline-2" } else { "btn w-full text-white uppercase" },
                            style: "background-color: {colour}",
                            onclick: {
                                let name = name.clone();
                                move |_| filter.write().category = FeedFilter::category_from_value(&name)
                            },
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
