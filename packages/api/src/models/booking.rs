//! # Booking model
//!
//! A [`Booking`] embeds the booked [`Trail`] so the bookings page can render it
//! without another request. `total_price` is whatever the API recorded; the
//! client-side estimate shown before booking carries no authority.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::trail::{Trail, TrailId};

/// Identifier the API assigns to a booking.
pub type BookingId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub trail: Trail,
    pub date: NaiveDate,
    pub number_of_people: u32,
    pub total_price: f64,
}

impl Booking {
    /// A booking dated strictly before `today` is completed.
    pub fn is_completed(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// "1 person" / "3 people".
    pub fn party_label(&self) -> String {
        match self.number_of_people {
            1 => "1 person".to_string(),
            n => format!("{n} people"),
        }
    }
}

/// Payload for `POST /api/bookings`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub trail_id: TrailId,
    pub date: NaiveDate,
    pub number_of_people: u32,
}
