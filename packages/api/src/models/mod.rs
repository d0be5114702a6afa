//! Data models exchanged with the Hike&Book API.

mod booking;
mod trail;
mod user;

pub use booking::{Booking, BookingId, NewBooking};
pub use trail::{Difficulty, NewTrail, Trail, TrailId, UnknownDifficulty, DEFAULT_TRAIL_IMAGE};
pub use user::{CurrentUser, LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest, ADMIN_ROLE};
