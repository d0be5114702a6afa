use std::sync::{Arc, Mutex, MutexGuard};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and native builds.
///
/// Clones share the same slot, so a clone handed to a session observes the
/// writes made through the original.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, token: &str) {
        *self.slot() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}
