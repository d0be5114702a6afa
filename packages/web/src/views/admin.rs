use dioxus::prelude::*;
use ui::icons::{FaPlus, FaRoute};
use ui::{use_auth, Icon};

use super::Protected;
use crate::Route;

#[component]
pub fn Admin() -> Element {
    rsx! {
        Protected { requires_admin: true, Dashboard {} }
    }
}

#[component]
fn Dashboard() -> Element {
    let auth = use_auth();
    let name = auth()
        .user()
        .map(|user| user.display_name())
        .unwrap_or_default();

    rsx! {
        div {
            class: "admin-container",
            h1 { "Admin Dashboard" }
            p { "Signed in as {name}" }
            div {
                class: "admin-actions",
                Link {
                    class: "admin-card",
                    to: Route::CreateTrail {},
                    Icon { icon: FaPlus, width: 24, height: 24 }
                    h3 { "Create Trail" }
                    p { "Add a new trail with its available dates." }
                }
                Link {
                    class: "admin-card",
                    to: Route::Trails {},
                    Icon { icon: FaRoute, width: 24, height: 24 }
                    h3 { "Browse Trails" }
                    p { "Review the trails hikers can book." }
                }
            }
        }
    }
}
