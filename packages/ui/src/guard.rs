//! Route guard for protected views.

use api::CurrentUser;

use crate::session::AuthState;

/// What a protected route should do on this render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet: show a placeholder, decide later.
    Pending,
    RedirectToLogin,
    RedirectToHome,
    Render,
}

/// Decide access from the auth inputs alone. Pure, so it is safe to run on
/// every render.
pub fn decide(loading: bool, user: Option<&CurrentUser>, requires_admin: bool) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }
    match user {
        None => GuardDecision::RedirectToLogin,
        Some(user) if requires_admin && !user.is_admin() => GuardDecision::RedirectToHome,
        Some(_) => GuardDecision::Render,
    }
}

impl AuthState {
    pub fn guard(&self, requires_admin: bool) -> GuardDecision {
        decide(self.loading(), self.user(), requires_admin)
    }
}
