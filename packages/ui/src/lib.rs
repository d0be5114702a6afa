//! # UI crate: shared state and components for the Hike&Book client
//!
//! View-independent logic lives in plain modules that take a [`Session`] and
//! an [`AuthSink`], so it runs (and is tested) without a Dioxus runtime. The
//! Dioxus layer on top is [`AuthProvider`] plus a handful of components the
//! pages share.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | Token lifecycle and the [`AuthState`] machine |
//! | [`guard`] | Access decision for protected routes |
//! | [`booking`] | Booking form state and submission |
//! | [`bookings`] | The user's bookings list and cancellation |
//! | [`trail_form`] | Admin trail creation form |
//! | [`trails`] | Trail list, detail and highlights loading |
//! | [`profile`] | Profile form |
//! | [`debounce`] / [`notice`] | Filter debounce and self-clearing notices |

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod booking;
pub mod bookings;
pub mod debounce;
pub mod guard;
pub mod notice;
pub mod profile;
pub mod session;
pub mod time;
pub mod trail_form;
pub mod trails;

pub use booking::{date_label, format_price, trail_path, BookingDraft, BookingOutcome};
pub use bookings::{BookingsBoard, CancelOutcome};
pub use debounce::Debouncer;
pub use guard::GuardDecision;
pub use notice::Flash;
pub use profile::ProfileDraft;
pub use session::{AuthSink, AuthState, Session, SessionPhase};
pub use trail_form::{CreationGate, TrailDraft};

pub mod views;
pub use views::{ConfirmDialog, ModalOverlay};

pub const UI_CSS: Asset = asset!("/src/views/views.css");

mod auth;
pub use auth::{
    make_session, use_auth, use_config, use_session, AppSession, AuthProvider, LogoutButton,
    PlatformStore,
};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod trail_card;
pub use trail_card::TrailCard;

#[cfg(test)]
mod testing;
