//! Route guard wrapper for views that need a signed-in user.

use dioxus::prelude::*;
use ui::{use_auth, GuardDecision};

use crate::Route;

/// Renders `children` only when the guard allows it, redirecting otherwise.
#[component]
pub fn Protected(#[props(default)] requires_admin: bool, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || match auth.read().guard(requires_admin) {
        GuardDecision::RedirectToLogin => {
            nav.replace(Route::login_then(""));
        }
        GuardDecision::RedirectToHome => {
            nav.replace(Route::Home {});
        }
        GuardDecision::Pending | GuardDecision::Render => {}
    });

    let decision = auth.read().guard(requires_admin);
    match decision {
        GuardDecision::Render => children,
        GuardDecision::Pending => rsx! {
            div { class: "loading", "Loading..." }
        },
        GuardDecision::RedirectToLogin | GuardDecision::RedirectToHome => rsx! {},
    }
}
