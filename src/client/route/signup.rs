use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{page::LoadingPage, Page},
        constant::SITE_NAME,
        model::auth::UserState,
        router::Route,
    },
    model::user::SignupDto,
};

#[cfg(feature = "web")]
use crate::client::api::auth::signup;

/// Checks that can be made before asking the server. Uniqueness and password
/// length are left to the server.
fn signup_error(form: &SignupDto) -> Option<&'static str> {
    if form.username.trim().is_empty() || form.email.trim().is_empty() {
        return Some("Please provide a username and an email");
    }
    if form.password.is_empty() {
        return Some("Please provide a password");
    }
    if form.password != form.password_confirm {
        return Some("Passwords are not the same!");
    }
    None
}

#[component]
pub fn Signup() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let mut form = use_signal(SignupDto::default);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(move || {
        if user_state.read().is_logged_in() {
            nav.push(Route::Home {});
        }
    });

    #[cfg(feature = "web")]
    let signup_future = use_resource(move || async move {
        if should_submit() {
            let payload = form.peek().clone();
            Some(signup(&payload).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = signup_future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    tracing::info!("Signed up as {}", user.username);
                    user_state.set(UserState::logged_in(user.clone()));
                }
                Err(err) => {
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if let Some(problem) = signup_error(&form.read()) {
            error_message.set(Some(problem.to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let state = user_state.read().clone();
    let is_submitting = should_submit();
    let current = form.read().clone();

    rsx! {
        Title { "Sign up | {SITE_NAME}" }
        if !state.fetched || state.is_logged_in() {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                div {
                    class: "card bg-base-200 w-full max-w-sm",
                    form {
                        class: "card-body gap-4",
                        onsubmit: on_submit,
                        h2 { class: "card-title text-2xl", "Create your account" }
                        input {
                            r#type: "text",
                            class: "input input-bordered w-full",
                            placeholder: "Username",
                            disabled: is_submitting,
                            value: "{current.username}",
                            oninput: move |evt| form.write().username = evt.value(),
                        }
                        input {
                            r#type: "email",
                            class: "input input-bordered w-full",
                            placeholder: "Email",
                            disabled: is_submitting,
                            value: "{current.email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                        input {
                            r#type: "password",
                            class: "input input-bordered w-full",
                            placeholder: "Password",
                            disabled: is_submitting,
                            value: "{current.password}",
                            oninput: move |evt| form.write().password = evt.value(),
                        }
                        input {
                            r#type: "password",
                            class: "input input-bordered w-full",
                            placeholder: "Confirm password",
                            disabled: is_submitting,
                            value: "{current.password_confirm}",
                            oninput: move |evt| form.write().password_confirm = evt.value(),
                        }
                        if let Some(message) = error_message() {
                            div { class: "alert alert-error", "{message}" }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting,
                            if is_submitting {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Signing up..."
                            } else {
                                "Sign up"
                            }
                        }
                        p {
                            class: "text-sm text-center",
                            "Already have an account? "
                            Link { to: Route::Login {}, class: "link", "Log in" }
                        }
                    }
                }
            }
        }
    }
}
