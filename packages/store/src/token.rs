//! # Session token persistence
//!
//! The [`TokenStore`] trait is the seam between the session state machine and
//! wherever the bearer token physically lives. Implementations live in sibling
//! modules ([`crate::memory`], [`crate::local`]).
//!
//! Stores are infallible from the caller's point of view: a storage backend that
//! cannot be read behaves as if no token were stored, and a failed write is
//! logged and dropped. The worst outcome is that the user has to log in again.

/// Key under which the session token is persisted.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Synchronous storage for the single session token.
pub trait TokenStore {
    /// Return the persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);

    /// Remove the persisted token.
    fn clear(&self);
}
