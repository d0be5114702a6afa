use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "Page not found: /{path}" }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to Home" }
        }
    }
}
