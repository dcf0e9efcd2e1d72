use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, FactFormModal, FactItem, Page,
        },
        constant::SITE_NAME,
        model::{auth::UserState, cache::Cache},
        router::Route,
    },
    model::{
        category::CategoryDto,
        fact::FactDto,
        user::{UpdateMeDto, UpdatePasswordDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    category::get_categories,
    fact::{delete_fact, get_my_facts, get_voted_facts},
    user::{delete_me, update_me, update_password},
};

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    MyFacts,
    Voted,
    Settings,
}

#[component]
pub fn Profile() -> Element {
    let mut categories = use_signal(Vec::<CategoryDto>::new);
    let mut tab = use_signal(|| ProfileTab::MyFacts);

    #[cfg(feature = "web")]
    let categories_future = use_resource(|| async move { get_categories().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Ok(list)) = categories_future.read_unchecked().as_ref() {
            categories.set(list.clone());
        }
    });

    let tab_class = move |t: ProfileTab| if tab() == t { "tab tab-active" } else { "tab" };

    rsx! {
        Title { "Profile | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-4xl flex flex-col gap-6",
                div {
                    role: "tablist",
                    class: "tabs tabs-border",
                    a { role: "tab", class: tab_class(ProfileTab::MyFacts), onclick: move |_| tab.set(ProfileTab::MyFacts), "My facts" }
                    a { role: "tab", class: tab_class(ProfileTab::Voted), onclick: move |_| tab.set(ProfileTab::Voted), "Voted facts" }
                    a { role: "tab", class: tab_class(ProfileTab::Settings), onclick: move |_| tab.set(ProfileTab::Settings), "Settings" }
                }
                match tab() {
                    ProfileTab::MyFacts => rsx! { MyFacts { categories: categories() } },
                    ProfileTab::Voted => rsx! { VotedFacts { categories: categories() } },
                    ProfileTab::Settings => rsx! { AccountSettings {} },
                }
            }
        }
    }
}

#[component]
fn MyFacts(categories: Vec<CategoryDto>) -> Element {
    let mut facts = use_signal(Cache::<Vec<FactDto>>::default);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<FactDto>);
    let mut show_delete_modal = use_signal(|| false);
    let mut fact_to_delete = use_signal(|| None::<FactDto>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_my_facts().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch own facts: {}", err);
            }
            facts.set(Cache::from_result(result.clone()));
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let id = fact_to_delete.peek().as_ref().map(|f| f.id)?;
        Some((id, delete_fact(id).await))
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some((id, result))) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(()) => {
                    if let Some(list) = facts.write().data_mut() {
                        list.retain(|f| f.id != *id);
                    }
                    show_delete_modal.set(false);
                }
                Err(err) => tracing::error!("Failed to delete fact {}: {}", id, err),
            }
            is_deleting.set(false);
        }
    });

    let replace = move |updated: FactDto| {
        if let Some(list) = facts.write().data_mut() {
            if let Some(slot) = list.iter_mut().find(|f| f.id == updated.id) {
                *slot = updated;
            }
        }
    };

    let delete_text = fact_to_delete()
        .map(|f| f.text)
        .unwrap_or_default();

    rsx! {
        if let Some(err) = facts.read().error().cloned() {
            ErrorPage { status: err.status, message: err.message }
        } else if let Some(list) = facts.read().data().cloned() {
            if list.is_empty() {
                p { class: "text-center opacity-60 py-8", "You haven't shared any facts yet." }
            } else {
                ul {
                    class: "flex flex-col gap-4",
                    for fact in list {
                        FactItem {
                            key: "{fact.id}",
                            fact,
                            categories: categories.clone(),
                            on_change: replace,
                            on_edit: move |fact: FactDto| {
                                editing.set(Some(fact));
                                show_form.set(true);
                            },
                            on_delete: move |fact: FactDto| {
                                fact_to_delete.set(Some(fact));
                                show_delete_modal.set(true);
                            },
                        }
                    }
                }
            }
        } else {
            LoadingPage {}
        }
        FactFormModal {
            show: show_form,
            editing,
            categories: categories.clone(),
            on_saved: replace,
        }
        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete fact".to_string(),
            message: rsx!(p { "Delete \"{delete_text}\"? Its votes are removed too." }),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| is_deleting.set(true),
        }
    }
}

#[component]
fn VotedFacts(categories: Vec<CategoryDto>) -> Element {
    let mut facts = use_signal(Cache::<Vec<FactDto>>::default);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_voted_facts().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch voted facts: {}", err);
            }
            facts.set(Cache::from_result(result.clone()));
        }
    });

    rsx! {
        if let Some(err) = facts.read().error().cloned() {
            ErrorPage { status: err.status, message: err.message }
        } else if let Some(list) = facts.read().data().cloned() {
            if list.is_empty() {
                p { class: "text-center opacity-60 py-8", "You haven't voted on any facts yet." }
            } else {
                ul {
                    class: "flex flex-col gap-4",
                    for fact in list {
                        FactItem {
                            key: "{fact.id}",
                            fact,
                            categories: categories.clone(),
                            on_change: move |updated: FactDto| {
                                if let Some(list) = facts.write().data_mut() {
                                    match updated.user_vote {
                                        Some(_) => {
                                            if let Some(slot) = list.iter_mut().find(|f| f.id == updated.id) {
                                                *slot = updated;
                                            }
                                        }
                                        // Retracted, so it no longer belongs here.
                                        None => list.retain(|f| f.id != updated.id),
                                    }
                                }
                            },
                        }
                    }
                }
            }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn AccountSettings() -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-6",
            ProfileForm {}
            PasswordForm {}
            DeleteAccount {}
        }
    }
}

#[component]
fn ProfileForm() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let mut form = use_signal(|| {
        let state = user_state.peek();
        let user = state.user.as_ref();
        UpdateMeDto {
            username: user.map(|u| u.username.clone()),
            email: user.map(|u| u.email.clone()),
            avatar_url: user.and_then(|u| u.avatar_url.clone()),
            ..Default::default()
        }
    });
    let mut should_submit = use_signal(|| false);
    let mut message = use_signal(|| None::<Result<String, String>>);

    #[cfg(feature = "web")]
    let submit_future = use_resource(move || async move {
        if should_submit() {
            let payload = form.peek().clone();
            Some(update_me(&payload).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = submit_future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    user_state.set(UserState::logged_in(user.clone()));
                    message.set(Some(Ok("Profile updated".to_string())));
                }
                Err(err) => message.set(Some(Err(err.message.clone()))),
            }
            should_submit.set(false);
        }
    });

    let current = form.read().clone();
    let is_submitting = should_submit();

    rsx! {
        div {
            class: "card bg-base-200",
            form {
                class: "card-body gap-4",
                onsubmit: move |evt: Event<FormData>| {
                    evt.prevent_default();
                    message.set(None);
                    should_submit.set(true);
                },
                h2 { class: "card-title", "Your account" }
                input {
                    r#type: "text",
                    class: "input input-bordered w-full",
                    placeholder: "Username",
                    disabled: is_submitting,
                    value: current.username.clone().unwrap_or_default(),
                    oninput: move |evt| form.write().username = Some(evt.value()),
                }
                input {
                    r#type: "email",
                    class: "input input-bordered w-full",
                    placeholder: "Email",
                    disabled: is_submitting,
                    value: current.email.clone().unwrap_or_default(),
                    oninput: move |evt| form.write().email = Some(evt.value()),
                }
                input {
                    r#type: "url",
                    class: "input input-bordered w-full",
                    placeholder: "Avatar URL",
                    disabled: is_submitting,
                    value: current.avatar_url.clone().unwrap_or_default(),
                    // An empty field clears the avatar.
                    oninput: move |evt| form.write().avatar_url = Some(evt.value()),
                }
                StatusMessage { message: message() }
                button {
                    r#type: "submit",
                    class: "btn btn-primary self-end",
                    disabled: is_submitting,
                    "Save settings"
                }
            }
        }
    }
}

#[component]
fn PasswordForm() -> Element {
    let mut form = use_signal(UpdatePasswordDto::default);
    let mut should_submit = use_signal(|| false);
    let mut message = use_signal(|| None::<Result<String, String>>);

    #[cfg(feature = "web")]
    let submit_future = use_resource(move || async move {
        if should_submit() {
            let payload = form.peek().clone();
            Some(update_password(&payload).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = submit_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    form.set(UpdatePasswordDto::default());
                    message.set(Some(Ok("Password changed".to_string())));
                }
                Err(err) => message.set(Some(Err(err.message.clone()))),
            }
            should_submit.set(false);
        }
    });

    let current = form.read().clone();
    let is_submitting = should_submit();

    rsx! {
        div {
            class: "card bg-base-200",
            form {
                class: "card-body gap-4",
                onsubmit: move |evt: Event<FormData>| {
                    evt.prevent_default();
                    if form.read().password != form.read().password_confirm {
                        message.set(Some(Err("Passwords are not the same!".to_string())));
                        return;
                    }
                    message.set(None);
                    should_submit.set(true);
                },
                h2 { class: "card-title", "Change password" }
                input {
                    r#type: "password",
                    class: "input input-bordered w-full",
                    placeholder: "Current password",
                    disabled: is_submitting,
                    value: "{current.password_current}",
                    oninput: move |evt| form.write().password_current = evt.value(),
                }
                input {
                    r#type: "password",
                    class: "input input-bordered w-full",
                    placeholder: "New password",
                    disabled: is_submitting,
                    value: "{current.password}",
                    oninput: move |evt| form.write().password = evt.value(),
                }
                input {
                    r#type: "password",
                    class: "input input-bordered w-full",
                    placeholder: "Confirm new password",
                    disabled: is_submitting,
                    value: "{current.password_confirm}",
                    oninput: move |evt| form.write().password_confirm = evt.value(),
                }
                StatusMessage { message: message() }
                button {
                    r#type: "submit",
                    class: "btn btn-primary self-end",
                    disabled: is_submitting,
                    "Change password"
                }
            }
        }
    }
}

#[component]
fn DeleteAccount() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();
    let mut show_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            Some(delete_me().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(()) => {
                    show_modal.set(false);
                    user_state.set(UserState::logged_out());
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("Failed to delete account: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            is_deleting.set(false);
        }
    });

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "Delete account" }
                p { class: "opacity-70", "Your account is deactivated and you are logged out." }
                if let Some(message) = error_message() {
                    div { class: "alert alert-error", "{message}" }
                }
                button {
                    class: "btn btn-error btn-outline self-end",
                    onclick: move |_| show_modal.set(true),
                    "Delete account"
                }
            }
        }
        ConfirmationModal {
            show: show_modal,
            title: "Delete account".to_string(),
            message: rsx!(p { "Are you sure? You will not be able to log in again." }),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| is_deleting.set(true),
        }
    }
}

#[component]
fn StatusMessage(message: Option<Result<String, String>>) -> Element {
    rsx! {
        match message {
            Some(Ok(text)) => rsx! { div { class: "alert alert-success", "{text}" } },
            Some(Err(text)) => rsx! { div { class: "alert alert-error", "{text}" } },
            None => rsx! {},
        }
    }
}
