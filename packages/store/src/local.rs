//! # localStorage token store: browser-side persistence
//!
//! [`LocalTokenStore`] is the [`TokenStore`] implementation used on the **web
//! platform**. It keeps the session token in `window.localStorage` under
//! [`SESSION_TOKEN_KEY`], so a reload or a new tab resumes the session.
//!
//! The store is a zero-size handle that looks up `localStorage` on every call.
//! Storage can be unavailable (private browsing, disabled cookies); in that
//! case reads return `None` and writes are logged and skipped.

use crate::token::{TokenStore, SESSION_TOKEN_KEY};
use web_sys::Storage;

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        self.storage()?
            .get_item(SESSION_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable; session token not persisted");
            return;
        };
        if let Err(e) = storage.set_item(SESSION_TOKEN_KEY, token) {
            tracing::warn!("Failed to persist session token: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            if let Err(e) = storage.remove_item(SESSION_TOKEN_KEY) {
                tracing::warn!("Failed to remove session token: {:?}", e);
            }
        }
    }
}
