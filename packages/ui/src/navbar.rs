use dioxus::prelude::*;

use crate::icons::FaPersonHiking;
use crate::{Icon, UI_CSS};

/// Top bar with the brand link on the left and `children` as the menu.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        nav {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: "/",
                Icon { icon: FaPersonHiking, width: 22, height: 22 }
                span { "Hike&Book" }
            }
            div {
                class: "navbar-menu",
                {children}
            }
        }
    }
}
