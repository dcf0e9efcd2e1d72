use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Header},
    model::auth::UserState,
    router::Route,
};

/// Layout for pages that need a logged-in user. Redirects to the login page
/// once the user fetch has completed without a user.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let fetch_completed = user_state.read().fetched;
    let user_logged_in = user_state.read().is_logged_in();

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        Header {}
        if !fetch_completed {
            LoadingPage {}
        } else if user_logged_in {
            Outlet::<Route> {}
        }
    }
}
