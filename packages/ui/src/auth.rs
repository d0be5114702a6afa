//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the app's [`Session`], its configuration and the
//! `Signal<AuthState>` every view reads through [`use_auth`]. The signal is
//! the session's [`AuthSink`], so state transitions re-render subscribers.

use api::{HikeBookConfig, HttpApi};
use dioxus::prelude::*;

use crate::session::{AuthSink, AuthState, Session};

/// Where the session token lives on this platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalTokenStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryTokenStore;

/// The session type the app runs with.
pub type AppSession = Session<PlatformStore, HttpApi>;

pub fn make_session(config: &HikeBookConfig) -> AppSession {
    Session::new(PlatformStore::default(), HttpApi::new(&config.api.base_url))
}

impl AuthSink for Signal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.peek().clone()
    }

    fn update(&mut self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.write())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

pub fn use_config() -> HikeBookConfig {
    use_context::<HikeBookConfig>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context_provider(HikeBookConfig::load);
    let session = use_context_provider(|| {
        tracing::info!("Using API at {}", config.api.base_url);
        make_session(&config)
    });
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);

    // Resolve a stored token once on mount
    let _ = use_resource(move || {
        let session = session.clone();
        async move {
            let mut auth = auth_state;
            session.initialize(&mut auth).await;
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();
    let session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                session.logout(&mut auth_state);
                on_logout.call(());
            },
            "{label}"
        }
    }
}
