use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{Home, Login, NotFound, Profile, Signup};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login")]
    Login {},

    #[route("/signup")]
    Signup {},
    #[end_layout]

    #[layout(RequiresLoggedIn)]
    #[route("/")]
    Home {},

    #[route("/profile")]
    Profile {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
