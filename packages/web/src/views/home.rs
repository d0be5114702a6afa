use dioxus::prelude::*;
use ui::icons::{FaCalendarCheck, FaMapLocationDot, FaUserGroup};
use ui::trails::load_featured;
use ui::{use_session, Icon, TrailCard};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let featured = use_resource(move || {
        let session = session.clone();
        async move { load_featured(session.api()).await }
    });
    let highlights = featured.read().clone();

    rsx! {
        div {
            class: "home-container",

            section {
                class: "hero-section",
                h1 { "Discover Your Next Adventure" }
                p { "Explore amazing hiking trails and book guided tours with experienced local guides." }
                Link { class: "cta-button", to: Route::Trails {}, "Explore Trails" }
            }

            section {
                class: "featured-trails",
                div {
                    class: "section-header",
                    h2 { "Featured Trails" }
                    Link { class: "view-all", to: Route::Trails {}, "View All" }
                }
                match highlights {
                    None => rsx! { div { class: "loading", "Loading featured trails..." } },
                    Some(trails) => rsx! {
                        div {
                            class: "trails-grid",
                            for trail in trails {
                                TrailCard { key: "{trail.id}", trail: trail.clone() }
                            }
                        }
                    },
                }
            }

            section {
                class: "why-choose-us",
                h2 { "Why Choose Hike&Book?" }
                div {
                    class: "features-grid",
                    div {
                        class: "feature-card",
                        Icon { icon: FaMapLocationDot, width: 32, height: 32 }
                        h3 { "Curated Trails" }
                        p { "Discover carefully selected trails that offer the best hiking experiences." }
                    }
                    div {
                        class: "feature-card",
                        Icon { icon: FaUserGroup, width: 32, height: 32 }
                        h3 { "Expert Guides" }
                        p { "Connect with experienced local guides who know the trails inside out." }
                    }
                    div {
                        class: "feature-card",
                        Icon { icon: FaCalendarCheck, width: 32, height: 32 }
                        h3 { "Easy Booking" }
                        p { "Book your hiking tours with just a few clicks, no hassle." }
                    }
                }
            }

            section {
                class: "cta-section",
                h2 { "Ready to hit the trails?" }
                p { "Join Hike&Book today and start your next adventure!" }
                Link { class: "cta-button", to: Route::Register {}, "Sign Up Now" }
            }
        }
    }
}
