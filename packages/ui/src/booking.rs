//! # Booking form and submission
//!
//! [`BookingDraft`] is the trail page's form state: the selected date and the
//! party size. Party size input is clamped to at least one as it is typed, so
//! nothing below one can reach the API.
//!
//! [`submit_booking`] runs the whole submission: it sends anonymous visitors
//! to the login page (remembering the trail), validates the draft against the
//! dates fetched for the trail, posts the booking and re-fetches availability
//! because the booked date may now be full. The API decides availability and
//! price; the estimate from [`BookingDraft::estimated_total`] is display only.

use api::{Booking, HikeApi, NewBooking, TrailId};
use chrono::NaiveDate;
use store::TokenStore;
use thiserror::Error;

use crate::session::{AuthSink, Session};

pub const BOOKING_SUCCESS: &str = "Booking successful! Check your bookings for details.";
pub const BOOKING_FAILED: &str = "Failed to book the trail. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Please select a date")]
    NoDateSelected,
    #[error("The selected date is no longer available")]
    DateUnavailable,
}

/// Parse party-size input, clamping anything below one (or unparsable) to one.
///
/// Only the leading integer counts, so `"3 people"` is 3 and `"2.5"` is 2.
pub fn parse_party_size(input: &str) -> u32 {
    let trimmed = input.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..digits_end]
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 1)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(1)
}

/// Price as shown next to trails and totals, e.g. `"45.00 EUR"`.
pub fn format_price(amount: f64) -> String {
    format!("{amount:.2} EUR")
}

/// Long form of a bookable date, e.g. `"Monday, November 2, 2026"`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Path of a trail's detail page.
pub fn trail_path(id: TrailId) -> String {
    format!("/trails/{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub date: Option<NaiveDate>,
    people: u32,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            date: None,
            people: 1,
        }
    }
}

impl BookingDraft {
    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn set_people_input(&mut self, input: &str) {
        self.people = parse_party_size(input);
    }

    pub fn increment(&mut self) {
        self.people = self.people.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.people = self.people.saturating_sub(1).max(1);
    }

    /// Select a date from the `<select>` value; the empty option clears it.
    pub fn select_date(&mut self, value: &str) {
        self.date = value.parse().ok();
    }

    /// Unauthoritative `price × people` shown next to the form.
    pub fn estimated_total(&self, price: f64) -> f64 {
        price * f64::from(self.people)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the request, checking the date against `available`.
    pub fn prepare(
        &self,
        trail_id: TrailId,
        available: &[NaiveDate],
    ) -> Result<NewBooking, BookingError> {
        let date = self.date.ok_or(BookingError::NoDateSelected)?;
        if !available.contains(&date) {
            return Err(BookingError::DateUnavailable);
        }
        Ok(NewBooking {
            trail_id,
            date,
            number_of_people: self.people.max(1),
        })
    }
}

/// Result of a booking attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// No session: go to login, then come back to `return_to`.
    LoginRequired { return_to: String },
    Booked {
        booking: Booking,
        /// Fresh availability, or `None` if the re-fetch failed.
        available_dates: Option<Vec<NaiveDate>>,
    },
    /// Nothing changed; show the message.
    Failed(String),
}

pub async fn submit_booking<S: TokenStore, A: HikeApi>(
    session: &Session<S, A>,
    auth: &mut impl AuthSink,
    trail_id: TrailId,
    draft: &BookingDraft,
    available: &[NaiveDate],
) -> BookingOutcome {
    let token = match (auth.snapshot().is_authenticated(), session.token()) {
        (true, Some(token)) => token,
        _ => {
            return BookingOutcome::LoginRequired {
                return_to: trail_path(trail_id),
            }
        }
    };

    let request = match draft.prepare(trail_id, available) {
        Ok(request) => request,
        Err(e) => return BookingOutcome::Failed(e.to_string()),
    };

    let result = session.api().create_booking(&token, &request).await;
    let booking = match session.observe(result, auth) {
        Ok(booking) => booking,
        Err(e) => {
            tracing::warn!("Booking trail {} failed: {}", trail_id, e);
            return BookingOutcome::Failed(e.user_message(BOOKING_FAILED));
        }
    };
    tracing::info!("Booked trail {} on {}", trail_id, booking.date);

    let available_dates = match session.api().available_dates(trail_id).await {
        Ok(dates) => Some(dates),
        Err(e) => {
            tracing::warn!("Failed to refresh dates for trail {}: {}", trail_id, e);
            None
        }
    };

    BookingOutcome::Booked {
        booking,
        available_dates,
    }
}

#[cfg(test)]
mod tests {
    use api::ApiError;
    use store::MemoryTokenStore;

    use super::*;
    use crate::session::{AuthState, SessionPhase, SESSION_EXPIRED};
    use crate::testing::{booking, date, hiker, FakeApi};

    fn signed_in() -> AuthState {
        AuthState {
            phase: SessionPhase::Authenticated(hiker()),
            error: None,
        }
    }

    #[test]
    fn test_party_size_clamps_to_one() {
        assert_eq!(parse_party_size("0"), 1);
        assert_eq!(parse_party_size("-4"), 1);
        assert_eq!(parse_party_size(""), 1);
        assert_eq!(parse_party_size("abc"), 1);
        assert_eq!(parse_party_size("3"), 3);
        assert_eq!(parse_party_size(" 2.5 "), 2);
        assert_eq!(parse_party_size("+6"), 6);
    }

    #[test]
    fn test_steppers_never_go_below_one() {
        let mut draft = BookingDraft::default();
        draft.decrement();
        assert_eq!(draft.people(), 1);
        draft.increment();
        draft.increment();
        assert_eq!(draft.people(), 3);
        assert_eq!(draft.estimated_total(25.0), 75.0);
        assert_eq!(format_price(draft.estimated_total(12.5)), "37.50 EUR");
    }

    #[test]
    fn test_select_date_from_form_value() {
        let mut draft = BookingDraft::default();
        draft.select_date("2026-11-02");
        assert_eq!(draft.date, Some(date("2026-11-02")));
        draft.select_date("");
        assert_eq!(draft.date, None);
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label(date("2026-11-02")), "Monday, November 2, 2026");
    }

    #[test]
    fn test_prepare_requires_an_available_date() {
        let available = [date("2026-11-02")];
        let mut draft = BookingDraft::default();
        assert_eq!(draft.prepare(3, &available), Err(BookingError::NoDateSelected));

        draft.select_date("2026-11-03");
        assert_eq!(draft.prepare(3, &available), Err(BookingError::DateUnavailable));
    }

    #[tokio::test]
    async fn test_zero_people_is_sent_as_one() {
        let api = FakeApi::default();
        api.script(|s| {
            s.create_booking = Some(Ok(booking(9, "2026-11-02")));
            s.available_dates.push_back(Ok(vec![date("2026-11-09")]));
        });
        let session = Session::new(MemoryTokenStore::with_token("tok"), api.clone());
        let mut auth = signed_in();

        let mut draft = BookingDraft::default();
        draft.set_people_input("0");
        draft.select_date("2026-11-02");
        let outcome =
            submit_booking(&session, &mut auth, 3, &draft, &[date("2026-11-02")]).await;

        assert_eq!(
            api.sent_bookings(),
            vec![NewBooking {
                trail_id: 3,
                date: date("2026-11-02"),
                number_of_people: 1,
            }]
        );
        assert_eq!(
            outcome,
            BookingOutcome::Booked {
                booking: booking(9, "2026-11-02"),
                available_dates: Some(vec![date("2026-11-09")]),
            }
        );
        assert_eq!(
            api.calls(),
            vec!["create_booking:tok", "available_dates:3"]
        );
    }

    #[tokio::test]
    async fn test_anonymous_visitor_is_sent_to_login() {
        let api = FakeApi::default();
        let session = Session::new(MemoryTokenStore::new(), api.clone());
        let mut auth = AuthState {
            phase: SessionPhase::Anonymous,
            error: None,
        };

        let mut draft = BookingDraft::default();
        draft.select_date("2026-11-02");
        let outcome =
            submit_booking(&session, &mut auth, 7, &draft, &[date("2026-11-02")]).await;

        assert_eq!(
            outcome,
            BookingOutcome::LoginRequired {
                return_to: "/trails/7".to_string()
            }
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_date_sends_nothing() {
        let api = FakeApi::default();
        let session = Session::new(MemoryTokenStore::with_token("tok"), api.clone());
        let mut auth = signed_in();

        let outcome =
            submit_booking(&session, &mut auth, 3, &BookingDraft::default(), &[]).await;

        assert_eq!(outcome, BookingOutcome::Failed("Please select a date".into()));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_shows_server_message() {
        let api = FakeApi::default();
        api.script(|s| {
            s.create_booking = Some(Err(ApiError::from_status(
                409,
                Some("Not enough places left".into()),
            )))
        });
        let session = Session::new(MemoryTokenStore::with_token("tok"), api.clone());
        let mut auth = signed_in();
        let mut draft = BookingDraft::default();
        draft.select_date("2026-11-02");

        let outcome =
            submit_booking(&session, &mut auth, 3, &draft, &[date("2026-11-02")]).await;

        assert_eq!(outcome, BookingOutcome::Failed("Not enough places left".into()));
        assert_eq!(api.calls(), vec!["create_booking:tok"]);
        assert!(auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_expired_token_logs_out() {
        let api = FakeApi::default();
        api.script(|s| s.create_booking = Some(Err(ApiError::from_status(401, None))));
        let store = MemoryTokenStore::with_token("old");
        let session = Session::new(store.clone(), api);
        let mut auth = signed_in();
        let mut draft = BookingDraft::default();
        draft.select_date("2026-11-02");

        let outcome =
            submit_booking(&session, &mut auth, 3, &draft, &[date("2026-11-02")]).await;

        assert_eq!(outcome, BookingOutcome::Failed(BOOKING_FAILED.into()));
        assert!(!auth.is_authenticated());
        assert_eq!(auth.error.as_deref(), Some(SESSION_EXPIRED));
        assert!(store.load().is_none());
    }
}
