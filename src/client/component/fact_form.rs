use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Modal,
        model::{category::category_names, fact_form::FactForm},
    },
    model::{category::CategoryDto, fact::FactDto},
};

#[cfg(feature = "web")]
use crate::client::api::fact::{create_fact, update_fact};

/// Modal to share a new fact, or to edit `editing` when it is set.
#[component]
pub fn FactFormModal(
    mut show: Signal<bool>,
    editing: Signal<Option<FactDto>>,
    categories: Vec<CategoryDto>,
    on_saved: EventHandler<FactDto>,
) -> Element {
    let mut form = use_signal(FactForm::default);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            let initial = editing
                .read()
                .as_ref()
                .map(FactForm::from_fact)
                .unwrap_or_default();
            form.set(initial);
            error_message.set(None);
            should_submit.set(false);
        }
    });

    #[cfg(feature = "web")]
    let submit_future = use_resource(move || async move {
        if !should_submit() {
            return None;
        }

        let form = form.peek().clone();
        let editing_id = editing.peek().as_ref().map(|f| f.id);

        Some(match editing_id {
            Some(id) => update_fact(id, &form.to_update_dto()).await,
            None => create_fact(&form.to_create_dto()).await,
        })
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = submit_future.read_unchecked().as_ref() {
            match result {
                Ok(fact) => {
                    on_saved.call(fact.clone());
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to save fact: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if let Some(problem) = form.read().error() {
            error_message.set(Some(problem.to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let is_editing = editing.read().is_some();
    let remaining = form.read().remaining_chars();
    let current = form.read().clone();
    let names = category_names(&categories);

    rsx! {
        Modal {
            show,
            title: if is_editing { "Edit fact".to_string() } else { "Share a fact".to_string() },
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control w-full",
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Share a fact with the world...",
                        disabled: is_submitting,
                        value: "{current.text}",
                        oninput: move |evt| form.write().text = evt.value(),
                    }
                    span {
                        class: if remaining < 0 { "text-sm text-error" } else { "text-sm opacity-60" },
                        "{remaining}"
                    }
                }
                input {
                    r#type: "text",
                    class: "input input-bordered w-full",
                    placeholder: "Trustworthy source...",
                    disabled: is_submitting,
                    value: "{current.source}",
                    oninput: move |evt| form.write().source = evt.value(),
                }
                select {
                    class: "select select-bordered w-full",
                    disabled: is_submitting,
                    value: "{current.category}",
                    onchange: move |evt| form.write().category = evt.value(),
                    option { value: "", selected: current.category.is_empty(), "Choose category:" }
                    for name in names {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: name == current.category,
                            "{name}"
                        }
                    }
                }
                if let Some(message) = error_message() {
                    div { class: "alert alert-error", "{message}" }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting,
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting,
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Saving..."
                        } else if is_editing {
                            "Save"
                        } else {
                            "Post"
                        }
                    }
                }
            }
        }
    }
}
