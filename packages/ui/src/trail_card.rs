//! Summary card used by the trail list and the home page highlights.

use api::Trail;
use dioxus::prelude::*;

use crate::booking::{format_price, trail_path};
use crate::icons::{FaClock, FaLocationDot, FaRoute};
use crate::Icon;

const SUMMARY_CHARS: usize = 100;

#[component]
pub fn TrailCard(trail: Trail) -> Element {
    let difficulty_class = format!(
        "difficulty difficulty-{}",
        trail.difficulty.as_str().to_lowercase()
    );
    let summary = trail.summary(SUMMARY_CHARS);
    let price = format_price(trail.price);
    let image = trail.image().to_string();
    let label = trail.difficulty.label();

    rsx! {
        article {
            class: "trail-card",
            img { class: "trail-card-image", src: "{image}", alt: "{trail.name}" }
            div {
                class: "trail-card-body",
                div {
                    class: "trail-card-header",
                    h3 { "{trail.name}" }
                    span { class: "{difficulty_class}", "{label}" }
                }
                p {
                    class: "trail-card-meta",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    " {trail.location}"
                }
                p { class: "trail-card-summary", "{summary}" }
                div {
                    class: "trail-card-stats",
                    span { Icon { icon: FaRoute, width: 12, height: 12 } " {trail.length} km" }
                    span { Icon { icon: FaClock, width: 12, height: 12 } " {trail.duration} h" }
                    span { class: "price", "{price}" }
                }
                Link {
                    class: "btn btn-primary",
                    to: trail_path(trail.id),
                    "View Details"
                }
            }
        }
    }
}
