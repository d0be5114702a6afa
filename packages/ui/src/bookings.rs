//! # My bookings
//!
//! [`BookingsBoard`] is the state behind the bookings page: the loaded list,
//! the load error and a [`Flash`] notice for cancellation results.
//! [`cancel_booking`] performs the `DELETE` once the user has confirmed.
//!
//! Cancelling only removes a booking from the list after the API accepted
//! it. A booking dated before today is completed and offers no cancel
//! action.

use api::{Booking, BookingId, HikeApi};
use chrono::NaiveDate;
use store::TokenStore;

use crate::notice::Flash;
use crate::session::{AuthSink, Session};

pub const CANCEL_CONFIRMATION: &str = "Are you sure you want to cancel this booking?";
pub const CANCEL_SUCCESS: &str = "Booking cancelled successfully.";
pub const CANCEL_FAILED: &str = "Failed to cancel booking. Please try again.";
pub const BOOKINGS_LOAD_FAILED: &str = "Failed to load your bookings. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    /// The user dismissed the confirmation; nothing was sent.
    Declined,
    Cancelled,
    Failed(String),
}

/// Cancel `id` if the user `confirmed`.
pub async fn cancel_booking<S: TokenStore, A: HikeApi>(
    session: &Session<S, A>,
    auth: &mut impl AuthSink,
    id: BookingId,
    confirmed: bool,
) -> CancelOutcome {
    if !confirmed {
        return CancelOutcome::Declined;
    }
    let Some(token) = session.token() else {
        session.expire(auth);
        return CancelOutcome::Failed(CANCEL_FAILED.to_string());
    };

    let result = session.api().cancel_booking(&token, id).await;
    match session.observe(result, auth) {
        Ok(()) => {
            tracing::info!("Cancelled booking {}", id);
            CancelOutcome::Cancelled
        }
        Err(e) => {
            tracing::warn!("Cancelling booking {} failed: {}", id, e);
            CancelOutcome::Failed(e.user_message(CANCEL_FAILED))
        }
    }
}

/// Load the signed-in user's bookings.
pub async fn load_bookings<S: TokenStore, A: HikeApi>(
    session: &Session<S, A>,
    auth: &mut impl AuthSink,
) -> Result<Vec<Booking>, String> {
    let Some(token) = session.token() else {
        return Err(BOOKINGS_LOAD_FAILED.to_string());
    };
    let result = session.api().user_bookings(&token).await;
    session.observe(result, auth).map_err(|e| {
        tracing::error!("Failed to load bookings: {}", e);
        BOOKINGS_LOAD_FAILED.to_string()
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingsBoard {
    pub bookings: Vec<Booking>,
    pub notice: Flash,
    pub error: Option<String>,
}

impl BookingsBoard {
    pub fn loaded(result: Result<Vec<Booking>, String>) -> Self {
        match result {
            Ok(bookings) => Self {
                bookings,
                ..Self::default()
            },
            Err(error) => Self {
                error: Some(error),
                ..Self::default()
            },
        }
    }

    /// Fold a cancellation result into the board.
    ///
    /// Returns the notice ticket to clear later, if a success notice was
    /// shown.
    pub fn apply(&mut self, id: BookingId, outcome: &CancelOutcome) -> Option<u64> {
        match outcome {
            CancelOutcome::Declined => None,
            CancelOutcome::Cancelled => {
                self.bookings.retain(|b| b.id != id);
                self.error = None;
                Some(self.notice.show(CANCEL_SUCCESS))
            }
            CancelOutcome::Failed(message) => {
                self.notice.dismiss();
                self.error = Some(message.clone());
                None
            }
        }
    }

    pub fn clear_notice(&mut self, ticket: u64) -> bool {
        self.notice.clear(ticket)
    }
}

/// Completed bookings (dated before today) cannot be cancelled.
pub fn is_cancellable(booking: &Booking, today: NaiveDate) -> bool {
    !booking.is_completed(today)
}
