use dioxus::prelude::*;

use ui::{AuthProvider, Footer, LogoutButton, Navbar, use_auth};
use views::{
    Admin, CreateTrail, Home, Login, NotFound, Profile, Register, TrailDetail, Trails,
    UserBookings,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login?:redirect")]
        Login { redirect: String },
        #[route("/register")]
        Register {},
        #[route("/trails")]
        Trails {},
        #[route("/trails/:id")]
        TrailDetail { id: i64 },
        #[route("/profile")]
        Profile {},
        #[route("/create-trail")]
        CreateTrail {},
        #[route("/my-bookings")]
        UserBookings {},
        #[route("/admin")]
        Admin {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Login page that returns to `path` afterwards.
    fn login_then(path: impl Into<String>) -> Self {
        Route::Login {
            redirect: path.into(),
        }
    }

    /// Where a successful login lands. Only paths that parse as one of our
    /// routes are followed; anything else goes home.
    fn after_login(redirect: &str) -> Self {
        if redirect.is_empty() {
            return Route::Home {};
        }
        redirect.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring login redirect {:?}", redirect);
            Route::Home {}
        })
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt::init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar, routed page, footer.
#[component]
fn Shell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    rsx! {
        div {
            class: "app",
            Navbar {
                Link { class: "nav-link", to: Route::Home {}, "Home" }
                Link { class: "nav-link", to: Route::Trails {}, "Trails" }
                if state.is_authenticated() {
                    Link { class: "nav-link", to: Route::UserBookings {}, "My Bookings" }
                    if state.is_admin() {
                        Link { class: "nav-link", to: Route::Admin {}, "Admin" }
                        Link { class: "nav-link", to: Route::CreateTrail {}, "Create Trail" }
                    }
                    Link { class: "nav-link", to: Route::Profile {}, "Profile" }
                    LogoutButton {
                        class: "nav-link btn-logout",
                        on_logout: move |_| {
                            nav.push(Route::login_then(""));
                        },
                    }
                } else if !state.loading() {
                    Link { class: "nav-link", to: Route::login_then(""), "Login" }
                    Link { class: "nav-link", to: Route::Register {}, "Register" }
                }
            }
            main {
                class: "main-content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_login_follows_internal_routes() {
        assert_eq!(Route::after_login(""), Route::Home {});
        assert_eq!(Route::after_login("/trails/7"), Route::TrailDetail { id: 7 });
        assert_eq!(Route::after_login("/my-bookings"), Route::UserBookings {});
    }

    #[test]
    fn test_after_login_never_leaves_the_app() {
        let target = Route::after_login("https://elsewhere.example/phish");
        assert!(matches!(target, Route::Home {} | Route::NotFound { .. }));
        assert_eq!(target.to_string().chars().next(), Some('/'));
    }
}
