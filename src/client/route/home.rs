use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlus, Icon};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::ErrorPage, CategoryFilter, FactFormModal, FactItem, Page, SortBy,
        },
        constant::SITE_NAME,
        model::{
            error::ApiError,
            feed::{Feed, FeedFilter},
        },
    },
    model::{category::CategoryDto, fact::FactDto},
};

#[cfg(feature = "web")]
use crate::client::api::{category::get_categories, fact::get_feed_page};

#[component]
pub fn Home() -> Element {
    let mut categories = use_signal(Vec::<CategoryDto>::new);
    let filter = use_signal(FeedFilter::default);
    let mut feed = use_signal(Feed::default);
    let mut requested_page = use_signal(|| 1u64);
    let mut is_loading = use_signal(|| true);
    let mut error = use_signal(|| None::<ApiError>);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<FactDto>);

    #[cfg(feature = "web")]
    let categories_future = use_resource(|| async move { get_categories().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = categories_future.read_unchecked().as_ref() {
            match result {
                Ok(list) => categories.set(list.clone()),
                // Colours fall back to the defaults.
                Err(err) => tracing::warn!("Failed to fetch categories: {}", err),
            }
        }
    });

    // Changing the filter or the sort order starts the feed over.
    use_effect(move || {
        let _ = filter();
        feed.set(Feed::default());
        requested_page.set(1);
        is_loading.set(true);
    });

    #[cfg(feature = "web")]
    let feed_future = use_resource(move || async move {
        let filter = filter();
        let page = requested_page();
        let result = get_feed_page(&filter, page).await;
        (filter, page, result)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some((fetched_for, page, result)) = feed_future.read_unchecked().as_ref() {
            // A slow answer for a previous filter or page must not leak into the feed.
            if *fetched_for != *filter.peek() || *page != *requested_page.peek() {
                return;
            }
            match result {
                Ok(facts) => {
                    feed.write().merge_page(*page, facts.clone());
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch facts: {}", err);
                    error.set(Some(err.clone()));
                }
            }
            is_loading.set(false);
        }
    });

    let load_more = move |_| {
        let next = feed.read().next_page();
        is_loading.set(true);
        requested_page.set(next);
    };

    let current_feed = feed.read().clone();
    let category_list = categories();

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                div {
                    class: "flex flex-wrap items-center justify-between gap-4",
                    h1 { class: "text-2xl font-bold", "Today I learned" }
                    div {
                        class: "flex items-center gap-4",
                        SortBy { filter }
                        button {
                            class: "btn btn-primary flex gap-2 items-center",
                            onclick: move |_| {
                                editing.set(None);
                                show_form.set(true);
                            },
                            Icon { width: 16, height: 16, icon: FaPlus }
                            "Share a fact"
                        }
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-[14rem_1fr] gap-6",
                    CategoryFilter { categories: category_list.clone(), filter }
                    main {
                        if let Some(err) = error() {
                            ErrorPage { status: err.status, message: err.message }
                        } else if current_feed.facts.is_empty() && !is_loading() {
                            p {
                                class: "text-center opacity-60 py-8",
                                "No facts for this category yet. Create the first one!"
                            }
                        } else {
                            ul {
                                class: "flex flex-col gap-4",
                                for fact in current_feed.facts.iter().cloned() {
                                    FactItem {
                                        key: "{fact.id}",
                                        fact,
                                        categories: category_list.clone(),
                                        on_change: move |updated: FactDto| feed.write().replace(updated),
                                    }
                                }
                            }
                        }
                        if is_loading() {
                            div {
                                class: "flex justify-center py-6",
                                span { class: "loading loading-spinner loading-lg" }
                            }
                        } else if current_feed.has_more && error().is_none() {
                            div {
                                class: "flex justify-center py-6",
                                button {
                                    class: "btn btn-outline",
                                    onclick: load_more,
                                    "Load more"
                                }
                            }
                        }
                    }
                }
            }
        }
        FactFormModal {
            show: show_form,
            editing,
            categories: category_list,
            on_saved: move |fact: FactDto| feed.write().prepend(fact),
        }
    }
}
