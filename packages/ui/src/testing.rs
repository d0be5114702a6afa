//! Scripted [`HikeApi`] used by the unit tests in this crate.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use api::*;
use chrono::NaiveDate;
use tokio::sync::Notify;

/// Canned responses, consumed in order. Anything not scripted fails with a
/// network error so a test notices unexpected calls.
#[derive(Default)]
pub struct Script {
    pub current_user: VecDeque<Result<CurrentUser, ApiError>>,
    pub login: Option<Result<LoginResponse, ApiError>>,
    pub register: Option<Result<serde_json::Value, ApiError>>,
    pub update_profile: Option<Result<(), ApiError>>,
    pub list_trails: VecDeque<Result<Vec<Trail>, ApiError>>,
    pub featured_trails: Option<Result<Vec<Trail>, ApiError>>,
    pub trail: Option<Result<Trail, ApiError>>,
    pub available_dates: VecDeque<Result<Vec<NaiveDate>, ApiError>>,
    pub create_trail: Option<Result<Trail, ApiError>>,
    pub create_booking: Option<Result<Booking, ApiError>>,
    pub user_bookings: Option<Result<Vec<Booking>, ApiError>>,
    pub cancel_booking: Option<Result<(), ApiError>>,
}

#[derive(Default)]
struct Recorded {
    calls: Vec<String>,
    bookings: Vec<NewBooking>,
    trails: Vec<NewTrail>,
    profiles: Vec<ProfileUpdate>,
    filters: Vec<TrailFilter>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    script: Rc<RefCell<Script>>,
    recorded: Rc<RefCell<Recorded>>,
    current_user_gate: Rc<RefCell<Option<Rc<Notify>>>>,
    login_gate: Rc<RefCell<Option<Rc<Notify>>>>,
}

fn unscripted<T>(call: &str) -> Result<T, ApiError> {
    Err(ApiError::Network(format!("unscripted call: {call}")))
}

impl FakeApi {
    pub fn script(&self, f: impl FnOnce(&mut Script)) {
        f(&mut self.script.borrow_mut())
    }

    /// Make `current_user` wait until the returned gate is notified.
    pub fn hold_current_user(&self) -> Rc<Notify> {
        let gate = Rc::new(Notify::new());
        *self.current_user_gate.borrow_mut() = Some(gate.clone());
        gate
    }

    /// Make `login` wait until the returned gate is notified.
    pub fn hold_login(&self) -> Rc<Notify> {
        let gate = Rc::new(Notify::new());
        *self.login_gate.borrow_mut() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<String> {
        self.recorded.borrow().calls.clone()
    }

    pub fn sent_bookings(&self) -> Vec<NewBooking> {
        self.recorded.borrow().bookings.clone()
    }

    pub fn sent_trails(&self) -> Vec<NewTrail> {
        self.recorded.borrow().trails.clone()
    }

    pub fn sent_profiles(&self) -> Vec<ProfileUpdate> {
        self.recorded.borrow().profiles.clone()
    }

    pub fn sent_filters(&self) -> Vec<TrailFilter> {
        self.recorded.borrow().filters.clone()
    }

    fn record(&self, call: String) {
        self.recorded.borrow_mut().calls.push(call);
    }
}

impl HikeApi for FakeApi {
    async fn current_user(&self, token: &str) -> Result<CurrentUser, ApiError> {
        self.record(format!("current_user:{token}"));
        let gate = self.current_user_gate.borrow().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let next = self.script.borrow_mut().current_user.pop_front();
        next.unwrap_or_else(|| unscripted("current_user"))
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(format!("login:{}", credentials.email));
        let gate = self.login_gate.borrow().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let next = self.script.borrow_mut().login.take();
        next.unwrap_or_else(|| unscripted("login"))
    }

    async fn register(&self, account: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
        self.record(format!("register:{}", account.email));
        let next = self.script.borrow_mut().register.take();
        next.unwrap_or_else(|| unscripted("register"))
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.record(format!("update_profile:{token}"));
        self.recorded.borrow_mut().profiles.push(update.clone());
        let next = self.script.borrow_mut().update_profile.take();
        next.unwrap_or_else(|| unscripted("update_profile"))
    }

    async fn list_trails(&self, filter: &TrailFilter) -> Result<Vec<Trail>, ApiError> {
        self.record("list_trails".to_string());
        self.recorded.borrow_mut().filters.push(filter.clone());
        let next = self.script.borrow_mut().list_trails.pop_front();
        next.unwrap_or_else(|| unscripted("list_trails"))
    }

    async fn featured_trails(&self) -> Result<Vec<Trail>, ApiError> {
        self.record("featured_trails".to_string());
        let next = self.script.borrow_mut().featured_trails.take();
        next.unwrap_or_else(|| unscripted("featured_trails"))
    }

    async fn trail(&self, id: TrailId) -> Result<Trail, ApiError> {
        self.record(format!("trail:{id}"));
        let next = self.script.borrow_mut().trail.take();
        next.unwrap_or_else(|| unscripted("trail"))
    }

    async fn available_dates(&self, id: TrailId) -> Result<Vec<NaiveDate>, ApiError> {
        self.record(format!("available_dates:{id}"));
        let next = self.script.borrow_mut().available_dates.pop_front();
        next.unwrap_or_else(|| unscripted("available_dates"))
    }

    async fn create_trail(&self, token: &str, trail: &NewTrail) -> Result<Trail, ApiError> {
        self.record(format!("create_trail:{token}"));
        self.recorded.borrow_mut().trails.push(trail.clone());
        let next = self.script.borrow_mut().create_trail.take();
        next.unwrap_or_else(|| unscripted("create_trail"))
    }

    async fn create_booking(&self, token: &str, booking: &NewBooking) -> Result<Booking, ApiError> {
        self.record(format!("create_booking:{token}"));
        self.recorded.borrow_mut().bookings.push(booking.clone());
        let next = self.script.borrow_mut().create_booking.take();
        next.unwrap_or_else(|| unscripted("create_booking"))
    }

    async fn user_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        self.record(format!("user_bookings:{token}"));
        let next = self.script.borrow_mut().user_bookings.take();
        next.unwrap_or_else(|| unscripted("user_bookings"))
    }

    async fn cancel_booking(&self, token: &str, id: BookingId) -> Result<(), ApiError> {
        self.record(format!("cancel_booking:{token}:{id}"));
        let next = self.script.borrow_mut().cancel_booking.take();
        next.unwrap_or_else(|| unscripted("cancel_booking"))
    }
}

pub fn hiker() -> CurrentUser {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "email": "hiker@example.com",
        "firstName": "Hana",
        "lastName": "Novak",
        "roles": ["ROLE_USER"]
    }))
    .unwrap()
}

pub fn admin() -> CurrentUser {
    serde_json::from_value(serde_json::json!({
        "id": 2,
        "email": "admin@example.com",
        "firstName": "Ada",
        "lastName": "Min",
        "roles": ["ROLE_USER", "ROLE_ADMIN"]
    }))
    .unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

pub fn trail(id: TrailId, price: f64) -> Trail {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("Trail {id}"),
        "description": "A walk in the hills",
        "location": "Alps",
        "length": 12.0,
        "duration": 4.0,
        "difficulty": "MODERATE",
        "features": "views, huts",
        "price": price,
        "imageUrl": null,
        "availableDates": []
    }))
    .unwrap()
}

pub fn booking(id: BookingId, on: &str) -> Booking {
    Booking {
        id,
        trail: trail(3, 25.0),
        date: date(on),
        number_of_people: 2,
        total_price: 50.0,
    }
}
