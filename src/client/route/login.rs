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
    model::user::LoginDto,
};

#[cfg(feature = "web")]
use crate::client::api::auth::login;

#[component]
pub fn Login() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let mut form = use_signal(LoginDto::default);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Logged-in users have nothing to do here
    use_effect(move || {
        if user_state.read().is_logged_in() {
            nav.push(Route::Home {});
        }
    });

    #[cfg(feature = "web")]
    let login_future = use_resource(move || async move {
        if should_submit() {
            let payload = form.peek().clone();
            Some(login(&payload).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = login_future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    tracing::info!("Logged in as {}", user.username);
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

        let current = form.read().clone();
        if current.email.trim().is_empty() || current.password.is_empty() {
            error_message.set(Some("Please provide email and password!".to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let state = user_state.read().clone();
    let is_submitting = should_submit();

    rsx! {
        Title { "Login | {SITE_NAME}" }
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
                        h2 { class: "card-title text-2xl", "Log in to {SITE_NAME}" }
                        input {
                            r#type: "email",
                            class: "input input-bordered w-full",
                            placeholder: "Email",
                            disabled: is_submitting,
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                        input {
                            r#type: "password",
                            class: "input input-bordered w-full",
                            placeholder: "Password",
                            disabled: is_submitting,
                            value: "{form.read().password}",
                            oninput: move |evt| form.write().password = evt.value(),
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
                                "Logging in..."
                            } else {
                                "Log in"
                            }
                        }
                        p {
                            class: "text-sm text-center",
                            "No account yet? "
                            Link { to: Route::Signup {}, class: "link", "Sign up" }
                        }
                    }
                }
            }
        }
    }
}
