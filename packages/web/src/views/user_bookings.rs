//! The signed-in user's bookings, with cancellation.

use api::{Booking, BookingId};
use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::bookings::{cancel_booking, is_cancellable, load_bookings, CANCEL_CONFIRMATION};
use ui::icons::{FaCalendar, FaTrash, FaUserGroup};
use ui::notice::expire_after;
use ui::time::today;
use ui::{
    date_label, format_price, trail_path, use_auth, use_config, use_session, BookingsBoard,
    ConfirmDialog, Icon,
};

use super::Protected;
use crate::Route;

#[component]
pub fn UserBookings() -> Element {
    rsx! {
        Protected { BookingsList {} }
    }
}

#[component]
fn BookingsList() -> Element {
    let auth = use_auth();
    let session = use_session();
    let clear_after = use_config().notice_clear_delay();
    let mut board = use_signal(|| Option::<BookingsBoard>::None);
    let mut pending = use_signal(|| Option::<BookingId>::None);

    let loader = session.clone();
    let _ = use_resource(move || {
        let session = loader.clone();
        async move {
            let mut auth = auth;
            let loaded = load_bookings(&session, &mut auth).await;
            board.set(Some(BookingsBoard::loaded(loaded)));
        }
    });

    let respond = use_callback(move |confirmed: bool| {
        let Some(id) = pending() else {
            return;
        };
        pending.set(None);
        let session = session.clone();
        spawn(async move {
            let mut auth = auth;
            let outcome = cancel_booking(&session, &mut auth, id, confirmed).await;
            let ticket = board
                .write()
                .as_mut()
                .and_then(|board| board.apply(id, &outcome));
            if let Some(ticket) = ticket {
                expire_after(clear_after, ticket, move |ticket| {
                    board
                        .write()
                        .as_mut()
                        .is_some_and(|board| board.clear_notice(ticket))
                })
                .await;
            }
        });
    });

    let Some(current) = board() else {
        return rsx! { div { class: "loading", "Loading your bookings..." } };
    };
    let today = today();

    rsx! {
        div {
            class: "user-bookings-container",
            h1 { "My Bookings" }

            if let Some(error) = current.error.clone() {
                div { class: "error-message", "{error}" }
            }
            if let Some(notice) = current.notice.message() {
                div { class: "success-message", "{notice}" }
            }

            if current.bookings.is_empty() {
                div {
                    class: "no-bookings",
                    p { "You don't have any bookings yet." }
                    Link { class: "btn btn-primary", to: Route::Trails {}, "Explore Trails" }
                }
            } else {
                div {
                    class: "bookings-list",
                    for booking in current.bookings.iter().cloned() {
                        BookingRow {
                            key: "{booking.id}",
                            booking: booking.clone(),
                            today: today,
                            on_cancel: move |id| pending.set(Some(id)),
                        }
                    }
                }
            }

            if pending().is_some() {
                ConfirmDialog {
                    message: CANCEL_CONFIRMATION.to_string(),
                    on_confirm: move |_| respond.call(true),
                    on_cancel: move |_| respond.call(false),
                }
            }
        }
    }
}

#[component]
fn BookingRow(booking: Booking, today: NaiveDate, on_cancel: EventHandler<BookingId>) -> Element {
    let id = booking.id;
    let image = booking.trail.image().to_string();
    let when = date_label(booking.date);
    let party = booking.party_label();
    let total = format_price(booking.total_price);

    rsx! {
        div {
            class: "booking-card",
            img { class: "booking-image", src: "{image}", alt: "{booking.trail.name}" }
            div {
                class: "booking-info",
                h3 { "{booking.trail.name}" }
                p { class: "booking-location", "{booking.trail.location}" }
                div {
                    class: "booking-details",
                    span { Icon { icon: FaCalendar, width: 14, height: 14 } " {when}" }
                    span { Icon { icon: FaUserGroup, width: 14, height: 14 } " {party}" }
                    span { "{total}" }
                }
                div {
                    class: "booking-actions",
                    Link {
                        class: "btn btn-secondary",
                        to: trail_path(booking.trail.id),
                        "View Trail"
                    }
                    if is_cancellable(&booking, today) {
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| on_cancel.call(id),
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            " Cancel Booking"
                        }
                    } else {
                        span { class: "completed-badge", "Completed" }
                    }
                }
            }
        }
    }
}
