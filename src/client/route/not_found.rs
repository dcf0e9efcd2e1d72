use dioxus::prelude::*;

use crate::client::component::{page::ErrorPage, Header};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Header {}
        ErrorPage { status: 404, message: format!("Can't find /{} on this site", path) }
    }
}
