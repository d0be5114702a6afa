//! # API crate: typed access to the Hike&Book REST API
//!
//! Everything the front-end knows about the remote service lives here: the
//! wire models, the error taxonomy, the client configuration and the
//! [`HikeApi`] trait with its `reqwest` implementation. The API owns all
//! business rules (availability, pricing, authorization); this crate only
//! describes how to talk to it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HikeApi`] trait and the [`HttpApi`] implementation |
//! | [`config`] | Build-time client configuration ([`HikeBookConfig`]) |
//! | [`error`] | [`ApiError`]: network, unauthorized, rejected, server, decode |
//! | [`filter`] | [`TrailFilter`] and its query-string form |
//! | [`models`] | Users, trails, bookings and request payloads |

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;

pub use client::{HikeApi, HttpApi};
pub use config::{ConfigError, HikeBookConfig};
pub use error::ApiError;
pub use filter::TrailFilter;
pub use models::*;
