//! # Session: owner of the token lifecycle
//!
//! [`Session`] bundles the persistent [`TokenStore`] with the [`HikeApi`] client
//! and drives the authentication state machine:
//!
//! ```text
//! Uninitialized ──initialize──▶ Restoring ──user fetched──▶ Authenticated
//!       │                           │                           │
//!       └──no stored token──▶ Anonymous ◀──fetch failed──┘      │
//!                                   ▲                           │
//!                                   └────logout / expire────────┘
//! ```
//!
//! The session never holds the state itself. Every transition is written
//! through an [`AuthSink`], which is a Dioxus `Signal<AuthState>` in the app
//! and a plain [`AuthState`] in tests.
//!
//! ## Ordering
//!
//! Each flow (restore, login, refresh) takes a ticket from the session epoch;
//! logout and expiry advance the epoch too. A flow only writes its result if
//! its ticket is still the latest one, so a slow restore can neither overwrite
//! a newer login nor bring back a session the user already left.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use api::{ApiError, CurrentUser, HikeApi, LoginRequest, LoginResponse, RegisterRequest};
use store::TokenStore;

pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Restoring,
    Authenticated(CurrentUser),
    Anonymous,
}

/// Authentication state shared with every view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub phase: SessionPhase,
    /// Last authentication error, shown on the login and register views.
    pub error: Option<String>,
}

impl AuthState {
    pub fn user(&self) -> Option<&CurrentUser> {
        match &self.phase {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True until the stored session has been resolved one way or the other.
    pub fn loading(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Uninitialized | SessionPhase::Restoring
        )
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(CurrentUser::is_admin)
    }
}

/// Destination for session state transitions.
pub trait AuthSink {
    /// Current state, read without subscribing to changes.
    fn snapshot(&self) -> AuthState;
    fn update(&mut self, f: impl FnOnce(&mut AuthState));
}

impl AuthSink for AuthState {
    fn snapshot(&self) -> AuthState {
        self.clone()
    }

    fn update(&mut self, f: impl FnOnce(&mut AuthState)) {
        f(self)
    }
}

/// Token store and API client behind the authentication state machine.
#[derive(Clone, Debug)]
pub struct Session<S, A> {
    store: S,
    api: A,
    epoch: Arc<AtomicU64>,
}

impl<S: TokenStore, A: HikeApi> Session<S, A> {
    pub fn new(store: S, api: A) -> Self {
        Self {
            store,
            api,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    fn begin(&self) -> u64 {
        self.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.epoch.load(Ordering::SeqCst) == ticket
    }

    /// Resolve the stored token, if there is one.
    ///
    /// Does nothing once the session has left `Uninitialized`.
    pub async fn initialize(&self, auth: &mut impl AuthSink) {
        if auth.snapshot().phase != SessionPhase::Uninitialized {
            return;
        }

        let Some(token) = self.store.load() else {
            tracing::info!("No stored session");
            auth.update(|state| state.phase = SessionPhase::Anonymous);
            return;
        };

        let ticket = self.begin();
        auth.update(|state| state.phase = SessionPhase::Restoring);
        if let Err(e) = self.resolve_user(&token, ticket, auth).await {
            tracing::info!("Stored session rejected: {}", e);
        }
    }

    /// Fetch the user behind `token` and settle the session on the result.
    ///
    /// Any failure clears the stored token and marks the session expired.
    async fn resolve_user(
        &self,
        token: &str,
        ticket: u64,
        auth: &mut impl AuthSink,
    ) -> Result<(), ApiError> {
        let result = self.api.current_user(token).await;
        if !self.is_current(ticket) {
            tracing::debug!("Discarding superseded session result");
            return result.map(|_| ());
        }

        match result {
            Ok(user) => {
                tracing::info!("Session authenticated for {}", user.email);
                auth.update(|state| state.phase = SessionPhase::Authenticated(user));
                Ok(())
            }
            Err(e) => {
                self.store.clear();
                auth.update(|state| {
                    state.phase = SessionPhase::Anonymous;
                    state.error = Some(SESSION_EXPIRED.to_string());
                });
                Err(e)
            }
        }
    }

    /// Exchange credentials for a token, persist it and load the user.
    ///
    /// Returns the server's login payload, or `None` if a logout or another
    /// login overtook this one, in which case nothing was signed in. On
    /// failure the error message is recorded in the auth state and the error
    /// is returned to the caller.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        auth: &mut impl AuthSink,
    ) -> Result<Option<LoginResponse>, ApiError> {
        let ticket = self.begin();
        auth.update(|state| state.error = None);

        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = match self.api.login(&credentials).await {
            Ok(response) => response,
            Err(e) => {
                let message = e.user_message(LOGIN_FAILED);
                let current = self.is_current(ticket);
                auth.update(|state| {
                    state.error = Some(message);
                    if current && state.loading() {
                        state.phase = SessionPhase::Anonymous;
                    }
                });
                return Err(e);
            }
        };

        if !self.is_current(ticket) {
            tracing::warn!("Login superseded before the token was stored");
            return Ok(None);
        }

        self.store.save(&response.token);
        self.resolve_user(&response.token, ticket, auth).await?;
        Ok(self.is_current(ticket).then_some(response))
    }

    /// Create an account. Session state is left untouched apart from the
    /// error, which is reset when the attempt starts.
    pub async fn register(
        &self,
        account: &RegisterRequest,
        auth: &mut impl AuthSink,
    ) -> Result<serde_json::Value, ApiError> {
        auth.update(|state| state.error = None);
        match self.api.register(account).await {
            Ok(payload) => {
                tracing::info!("Registered account for {}", account.email);
                Ok(payload)
            }
            Err(e) => {
                let message = e.user_message(REGISTRATION_FAILED);
                auth.update(|state| state.error = Some(message));
                Err(e)
            }
        }
    }

    /// Drop the token and the user. No network call.
    pub fn logout(&self, auth: &mut impl AuthSink) {
        self.begin();
        self.store.clear();
        auth.update(|state| state.phase = SessionPhase::Anonymous);
        tracing::info!("Logged out");
    }

    /// Log out because the API rejected the token.
    pub fn expire(&self, auth: &mut impl AuthSink) {
        self.begin();
        self.store.clear();
        auth.update(|state| {
            state.phase = SessionPhase::Anonymous;
            state.error = Some(SESSION_EXPIRED.to_string());
        });
        tracing::info!("Session expired");
    }

    /// Pass `result` through, expiring the session if it is a 401.
    pub fn observe<T>(
        &self,
        result: Result<T, ApiError>,
        auth: &mut impl AuthSink,
    ) -> Result<T, ApiError> {
        if let Err(e) = &result {
            if e.is_unauthorized() {
                self.expire(auth);
            }
        }
        result
    }

    /// Re-fetch the current user, e.g. after a profile change.
    ///
    /// Only a 401 ends the session; other failures keep the existing user.
    pub async fn refresh_user(&self, auth: &mut impl AuthSink) -> Result<(), ApiError> {
        let Some(token) = self.store.load() else {
            return Ok(());
        };
        let ticket = self.begin();
        let result = self.api.current_user(&token).await;
        if !self.is_current(ticket) {
            return result.map(|_| ());
        }
        match self.observe(result, auth) {
            Ok(user) => {
                auth.update(|state| state.phase = SessionPhase::Authenticated(user));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to refresh current user: {}", e);
                Err(e)
            }
        }
    }

    pub fn clear_error(&self, auth: &mut impl AuthSink) {
        auth.update(|state| state.error = None);
    }

    /// Drop a login or register error left over from another form.
    ///
    /// The session-expired notice survives, since the login page is where
    /// an expiry sends the user.
    pub fn clear_form_error(&self, auth: &mut impl AuthSink) {
        if auth.snapshot().error.as_deref() == Some(SESSION_EXPIRED) {
            return;
        }
        self.clear_error(auth);
    }
}
