use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaFacebook, FaInstagram, FaTwitter};

use crate::icons::FaPersonHiking;
use crate::time::today;
use crate::Icon;

#[component]
pub fn Footer() -> Element {
    let year = today().year();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-logo",
                Icon { icon: FaPersonHiking, width: 24, height: 24 }
                h2 { "Hike&Book" }
            }
            div {
                class: "footer-content",
                section {
                    class: "footer-section",
                    h3 { "About Us" }
                    p {
                        "Hike&Book is a platform designed for hiking enthusiasts to discover "
                        "and book incredible trails around the world."
                    }
                }
                section {
                    class: "footer-section",
                    h3 { "Quick Links" }
                    ul {
                        li { Link { to: "/", "Home" } }
                        li { Link { to: "/trails", "Trails" } }
                        li { Link { to: "/login", "Login" } }
                        li { Link { to: "/register", "Register" } }
                    }
                }
                section {
                    class: "footer-section",
                    h3 { "Contact Us" }
                    p { "Email: info@hikebook.com" }
                    p { "Phone: +381 11 123 456" }
                    div {
                        class: "social-icons",
                        a { class: "social-icon", href: "#", Icon { icon: FaFacebook, width: 18, height: 18 } }
                        a { class: "social-icon", href: "#", Icon { icon: FaTwitter, width: 18, height: 18 } }
                        a { class: "social-icon", href: "#", Icon { icon: FaInstagram, width: 18, height: 18 } }
                    }
                }
            }
            div {
                class: "footer-bottom",
                p { "© {year} Hike&Book. All rights reserved." }
            }
        }
    }
}
