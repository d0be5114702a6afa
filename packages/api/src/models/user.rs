//! # User and authentication payloads
//!
//! ## [`CurrentUser`]
//!
//! The identity returned by `GET /api/users/current` for a bearer token. The
//! front-end never builds one itself: a `CurrentUser` only exists once the API
//! has confirmed the token. `roles` is a set of role markers such as
//! [`ADMIN_ROLE`]; the helper [`CurrentUser::is_admin`] checks for it.
//!
//! ## Request/response bodies
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`LoginRequest`] / [`LoginResponse`] | `POST /api/auth/login` |
//! | [`RegisterRequest`] | `POST /api/auth/register` |
//! | [`ProfileUpdate`] | `PUT /api/users/profile` |
//!
//! [`LoginResponse`] keeps every field besides `token` in `details`, so the
//! caller receives the server payload unchanged.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Role marker granting access to administrative views.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// The authenticated user behind a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

impl CurrentUser {
    /// Whether the user carries `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }

    /// Get display name, falling back to email if no name is set.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Name and optional password change for the current user.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_from_api_json() {
        let user: CurrentUser = serde_json::from_str(
            r#"{"id":7,"email":"ana@example.com","firstName":"Ana","lastName":"Kovač","roles":["ROLE_USER","ROLE_ADMIN"]}"#,
        )
        .unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.display_name(), "Ana Kovač");
        assert!(user.is_admin());
        assert!(user.has_role("ROLE_USER"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"id":1,"email":"x@example.com"}"#).unwrap();
        assert_eq!(user.display_name(), "x@example.com");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_login_response_keeps_extra_fields() {
        let raw = r#"{"token":"abc","type":"Bearer","email":"a@b.c"}"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.token, "abc");
        assert_eq!(response.details["type"], "Bearer");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::from_str::<serde_json::Value>(raw).unwrap()
        );
    }

    #[test]
    fn test_profile_update_omits_absent_passwords() {
        let update = ProfileUpdate {
            first_name: "Ana".into(),
            last_name: "K".into(),
            current_password: None,
            new_password: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"firstName": "Ana", "lastName": "K"}));
    }
}
