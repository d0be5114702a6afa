//! # API client: the front-end's only external interface
//!
//! [`HikeApi`] is an async interface with one method per REST endpoint the
//! front-end consumes. [`HttpApi`] implements it over `reqwest`, which runs on
//! both native targets and `wasm32` (where it delegates to `fetch`). Tests
//! substitute a scripted implementation.
//!
//! | Method | Endpoint | Auth |
//! |--------|----------|------|
//! | [`current_user`](HikeApi::current_user) | `GET /api/users/current` | bearer |
//! | [`login`](HikeApi::login) | `POST /api/auth/login` | none |
//! | [`register`](HikeApi::register) | `POST /api/auth/register` | none |
//! | [`update_profile`](HikeApi::update_profile) | `PUT /api/users/profile` | bearer |
//! | [`list_trails`](HikeApi::list_trails) | `GET /api/trails` | none |
//! | [`featured_trails`](HikeApi::featured_trails) | `GET /api/trails/featured` | none |
//! | [`trail`](HikeApi::trail) | `GET /api/trails/:id` | none |
//! | [`available_dates`](HikeApi::available_dates) | `GET /api/trails/:id/available-dates` | none |
//! | [`create_trail`](HikeApi::create_trail) | `POST /api/trails` | bearer (admin) |
//! | [`create_booking`](HikeApi::create_booking) | `POST /api/bookings` | bearer |
//! | [`user_bookings`](HikeApi::user_bookings) | `GET /api/bookings/user` | bearer |
//! | [`cancel_booking`](HikeApi::cancel_booking) | `DELETE /api/bookings/:id` | bearer |
//!
//! ## Error mapping
//!
//! Transport failures become [`ApiError::Network`]; non-2xx responses are
//! classified by status via [`ApiError::from_status`], carrying the `message`
//! field of the JSON error body when present.

use std::future::Future;

use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ErrorBody};
use crate::filter::TrailFilter;
use crate::models::*;

/// Async interface to the Hike&Book REST API.
pub trait HikeApi {
    fn current_user(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<CurrentUser, ApiError>>;
    fn login(
        &self,
        credentials: &LoginRequest,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;
    fn register(
        &self,
        account: &RegisterRequest,
    ) -> impl Future<Output = Result<serde_json::Value, ApiError>>;
    fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn list_trails(
        &self,
        filter: &TrailFilter,
    ) -> impl Future<Output = Result<Vec<Trail>, ApiError>>;
    fn featured_trails(&self) -> impl Future<Output = Result<Vec<Trail>, ApiError>>;
    fn trail(&self, id: TrailId) -> impl Future<Output = Result<Trail, ApiError>>;
    fn available_dates(
        &self,
        id: TrailId,
    ) -> impl Future<Output = Result<Vec<NaiveDate>, ApiError>>;
    fn create_trail(
        &self,
        token: &str,
        trail: &NewTrail,
    ) -> impl Future<Output = Result<Trail, ApiError>>;
    fn create_booking(
        &self,
        token: &str,
        booking: &NewBooking,
    ) -> impl Future<Output = Result<Booking, ApiError>>;
    fn user_bookings(&self, token: &str) -> impl Future<Output = Result<Vec<Booking>, ApiError>>;
    fn cancel_booking(
        &self,
        token: &str,
        id: BookingId,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

/// `reqwest`-backed [`HikeApi`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send and decode a JSON body.
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::checked(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and return the raw JSON payload; an empty body becomes `Null`.
    async fn fetch_value(&self, request: RequestBuilder) -> Result<serde_json::Value, ApiError> {
        let text = Self::checked(request).await?.text().await?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and discard the body.
    async fn execute(&self, request: RequestBuilder) -> Result<(), ApiError> {
        Self::checked(request).await.map(|_| ())
    }

    async fn checked(request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        tracing::debug!("API responded {} {:?}", status, body.message);
        Err(ApiError::from_status(status.as_u16(), body.message))
    }
}

impl HikeApi for HttpApi {
    async fn current_user(&self, token: &str) -> Result<CurrentUser, ApiError> {
        self.fetch(self.client.get(self.url("/api/users/current")).bearer_auth(token))
            .await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.fetch(self.client.post(self.url("/api/auth/login")).json(credentials))
            .await
    }

    async fn register(&self, account: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(self.client.post(self.url("/api/auth/register")).json(account))
            .await
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.execute(
            self.client
                .put(self.url("/api/users/profile"))
                .bearer_auth(token)
                .json(update),
        )
        .await
    }

    async fn list_trails(&self, filter: &TrailFilter) -> Result<Vec<Trail>, ApiError> {
        self.fetch(
            self.client
                .get(self.url("/api/trails"))
                .query(&filter.query_pairs()),
        )
        .await
    }

    async fn featured_trails(&self) -> Result<Vec<Trail>, ApiError> {
        self.fetch(self.client.get(self.url("/api/trails/featured")))
            .await
    }

    async fn trail(&self, id: TrailId) -> Result<Trail, ApiError> {
        self.fetch(self.client.get(self.url(&format!("/api/trails/{id}"))))
            .await
    }

    async fn available_dates(&self, id: TrailId) -> Result<Vec<NaiveDate>, ApiError> {
        self.fetch(
            self.client
                .get(self.url(&format!("/api/trails/{id}/available-dates"))),
        )
        .await
    }

    async fn create_trail(&self, token: &str, trail: &NewTrail) -> Result<Trail, ApiError> {
        self.fetch(
            self.client
                .post(self.url("/api/trails"))
                .bearer_auth(token)
                .json(trail),
        )
        .await
    }

    async fn create_booking(&self, token: &str, booking: &NewBooking) -> Result<Booking, ApiError> {
        self.fetch(
            self.client
                .post(self.url("/api/bookings"))
                .bearer_auth(token)
                .json(booking),
        )
        .await
    }

    async fn user_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        self.fetch(
            self.client
                .get(self.url("/api/bookings/user"))
                .bearer_auth(token),
        )
        .await
    }

    async fn cancel_booking(&self, token: &str, id: BookingId) -> Result<(), ApiError> {
        self.execute(
            self.client
                .delete(self.url(&format!("/api/bookings/{id}")))
                .bearer_auth(token),
        )
        .await
    }
}
