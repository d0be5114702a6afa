//! Profile form: name changes and an optional password change.

use api::{CurrentUser, HikeApi, ProfileUpdate};
use store::TokenStore;
use thiserror::Error;

use crate::session::{AuthSink, Session};

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("New passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    /// Shown read-only.
    pub email: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl ProfileDraft {
    pub fn from_user(user: &CurrentUser) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            ..Self::default()
        }
    }

    /// Build the request. Password fields are sent only when both the
    /// current and the new password are filled in.
    pub fn to_update(&self) -> Result<ProfileUpdate, ProfileError> {
        if !self.new_password.is_empty() && self.new_password != self.confirm_password {
            return Err(ProfileError::PasswordMismatch);
        }

        let (current_password, new_password) =
            match (non_blank(&self.current_password), non_blank(&self.new_password)) {
                (Some(current), Some(new)) => (Some(current), Some(new)),
                _ => (None, None),
            };

        Ok(ProfileUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            current_password,
            new_password,
        })
    }

    pub fn clear_passwords(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }
}

/// Send the update and refresh the current user on success.
///
/// Returns the success notice or the error to show.
pub async fn update_profile<S: TokenStore, A: HikeApi>(
    session: &Session<S, A>,
    auth: &mut impl AuthSink,
    draft: &ProfileDraft,
) -> Result<&'static str, String> {
    let update = draft.to_update().map_err(|e| e.to_string())?;
    let Some(token) = session.token() else {
        session.expire(auth);
        return Err(PROFILE_UPDATE_FAILED.to_string());
    };

    let result = session.api().update_profile(&token, &update).await;
    if let Err(e) = session.observe(result, auth) {
        tracing::warn!("Profile update failed: {}", e);
        return Err(e.user_message(PROFILE_UPDATE_FAILED));
    }

    tracing::info!("Profile updated");
    if let Err(e) = session.refresh_user(auth).await {
        tracing::warn!("Profile saved but user refresh failed: {}", e);
    }
    Ok(PROFILE_UPDATED)
}

#[cfg(test)]
mod tests {
    use api::ApiError;
    use store::MemoryTokenStore;

    use super::*;
    use crate::session::{AuthState, SessionPhase};
    use crate::testing::{hiker, FakeApi};

    fn signed_in() -> AuthState {
        AuthState {
            phase: SessionPhase::Authenticated(hiker()),
            error: None,
        }
    }

    #[test]
    fn test_prefill_from_user() {
        let draft = ProfileDraft::from_user(&hiker());
        assert_eq!(draft.first_name, "Hana");
        assert_eq!(draft.email, "hiker@example.com");
        assert!(draft.new_password.is_empty());
    }

    #[test]
    fn test_passwords_sent_only_in_pairs() {
        let mut draft = ProfileDraft::from_user(&hiker());
        draft.new_password = "n3w".into();
        draft.confirm_password = "n3w".into();
        let update = draft.to_update().unwrap();
        assert_eq!(update.current_password, None);
        assert_eq!(update.new_password, None);

        draft.current_password = "old".into();
        let update = draft.to_update().unwrap();
        assert_eq!(update.current_password.as_deref(), Some("old"));
        assert_eq!(update.new_password.as_deref(), Some("n3w"));
    }

    #[tokio::test]
    async fn test_mismatched_passwords_send_nothing() {
        let api = FakeApi::default();
        let session = Session::new(MemoryTokenStore::with_token("tok"), api.clone());
        let mut auth = signed_in();
        let mut draft = ProfileDraft::from_user(&hiker());
        draft.current_password = "old".into();
        draft.new_password = "one".into();
        draft.confirm_password = "two".into();

        let result = update_profile(&session, &mut auth, &draft).await;

        assert_eq!(result, Err("New passwords do not match".to_string()));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_refreshes_user() {
        let api = FakeApi::default();
        let mut renamed = hiker();
        renamed.first_name = "Hanna".into();
        api.script(|s| {
            s.update_profile = Some(Ok(()));
            s.current_user.push_back(Ok(renamed.clone()));
        });
        let session = Session::new(MemoryTokenStore::with_token("tok"), api.clone());
        let mut auth = signed_in();
        let mut draft = ProfileDraft::from_user(&hiker());
        draft.first_name = "Hanna".into();

        let result = update_profile(&session, &mut auth, &draft).await;

        assert_eq!(result, Ok(PROFILE_UPDATED));
        assert_eq!(api.calls(), vec!["update_profile:tok", "current_user:tok"]);
        assert_eq!(api.sent_profiles()[0].first_name, "Hanna");
        assert_eq!(auth.user(), Some(&renamed));
    }

    #[tokio::test]
    async fn test_failure_uses_server_message() {
        let api = FakeApi::default();
        api.script(|s| {
            s.update_profile = Some(Err(ApiError::from_status(
                400,
                Some("Current password is incorrect".into()),
            )))
        });
        let session = Session::new(MemoryTokenStore::with_token("tok"), api.clone());
        let mut auth = signed_in();

        let result =
            update_profile(&session, &mut auth, &ProfileDraft::from_user(&hiker())).await;

        assert_eq!(result, Err("Current password is incorrect".to_string()));
        assert_eq!(api.calls(), vec!["update_profile:tok"]);
    }
}
