use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaLightbulb, FaRightFromBracket, FaUser},
    Icon,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{constant::SITE_NAME, model::auth::UserState, router::Route};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;

#[component]
pub fn Header() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let mut should_logout = use_signal(|| false);
    let nav = navigator();

    #[cfg(feature = "web")]
    let logout_future = use_resource(move || async move {
        if should_logout() {
            Some(logout().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = logout_future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to log out: {}", err);
            }
            // The session is gone or unusable either way.
            user_state.set(UserState::logged_out());
            should_logout.set(false);
            nav.push(Route::Login {});
        }
    });

    let state = user_state.read().clone();
    let username = state.user.as_ref().map(|u| u.username.clone());

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon { width: 28, height: 28, icon: FaLightbulb }
                    p {
                        class: "md:text-2xl font-bold uppercase tracking-wide",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if state.fetched {
                if let Some(username) = username {
                    Link {
                        to: Route::Profile {},
                        class: "btn btn-ghost flex gap-2 items-center",
                        Icon { width: 16, height: 16, icon: FaUser }
                        "{username}"
                    }
                    button {
                        class: "btn btn-outline flex gap-2 items-center",
                        disabled: should_logout(),
                        onclick: move |_| should_logout.set(true),
                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                        "Logout"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-outline",
                        "Login"
                    }
                    Link {
                        to: Route::Signup {},
                        class: "btn btn-primary",
                        "Sign up"
                    }
                }
            }
        }
    })
}
