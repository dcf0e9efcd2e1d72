use dioxus::prelude::*;

use crate::{
    client::{component::VoteButtons, model::category::category_colour},
    model::{category::CategoryDto, fact::FactDto},
};

/// One fact with its source, category tag and vote buttons.
///
/// `on_edit` and `on_delete` add owner actions when given.
#[component]
pub fn FactItem(
    fact: FactDto,
    categories: Vec<CategoryDto>,
    on_change: EventHandler<FactDto>,
    on_edit: Option<EventHandler<FactDto>>,
    on_delete: Option<EventHandler<FactDto>>,
) -> Element {
    let colour = category_colour(&categories, &fact.category);
    let author = fact.user.as_ref().map(|u| u.username.clone());
    let disputed = fact.votes_false > fact.votes_interesting + fact.votes_mind_blowing;

    let edit_fact = fact.clone();
    let delete_fact = fact.clone();

    rsx! {
        li {
            class: "card bg-base-200",
            div {
                class: "card-body gap-3",
                p {
                    class: "text-lg",
                    if disputed {
                        span { class: "badge badge-error mr-2", "[⛔️ DISPUTED]" }
                    }
                    "{fact.text} "
                    a {
                        class: "link link-hover opacity-70",
                        href: "{fact.source}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "(Source)"
                    }
                }
                div {
                    class: "flex flex-wrap items-center justify-between gap-2",
                    div {
                        class: "flex items-center gap-2",
                        span {
                            class: "badge text-white uppercase",
                            style: "background-color: {colour}",
                            "{fact.category}"
                        }
                        if let Some(author) = author {
                            span { class: "text-sm opacity-60", "by {author}" }
                        }
                    }
                    div {
                        class: "flex items-center gap-2",
                        VoteButtons {
                            fact: fact.clone(),
                            on_voted: move |updated| on_change.call(updated),
                        }
                        if let Some(on_edit) = on_edit {
                            button {
                                class: "btn btn-sm btn-outline",
                                onclick: move |_| on_edit.call(edit_fact.clone()),
                                "Edit"
                            }
                        }
                        if let Some(on_delete) = on_delete {
                            button {
                                class: "btn btn-sm btn-error btn-outline",
                                onclick: move |_| on_delete.call(delete_fact.clone()),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
