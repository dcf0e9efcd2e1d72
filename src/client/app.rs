use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{constant::SITE_NAME, model::auth::UserState, router::Route};

#[cfg(feature = "web")]
use crate::client::api::user::get_me;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Fetch user on first load
    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_me().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(Some(user)) => user_state.set(UserState::logged_in(user.clone())),
                Ok(None) => user_state.set(UserState::logged_out()),
                Err(err) => {
                    tracing::error!("Failed to fetch user: {}", err);
                    user_state.set(UserState::logged_out());
                }
            }
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Share interesting facts and vote on the ones you find mind-blowing or false"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
