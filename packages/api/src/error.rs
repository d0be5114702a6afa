//! Error taxonomy for calls to the Hike&Book API.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP 401. The session token is missing, expired or revoked.
    #[error("Unauthorized")]
    Unauthorized { message: Option<String> },
    /// Any other 4xx, usually a validation failure.
    #[error("Request rejected ({status})")]
    Rejected { status: u16, message: Option<String> },
    /// 5xx.
    #[error("Server error ({status})")]
    Server { status: u16, message: Option<String> },
    /// A success response whose body did not match the expected model.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// JSON error body the API sends with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    /// Classify a non-success status code.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        match status {
            401 => ApiError::Unauthorized { message },
            400..=499 => ApiError::Rejected { status, message },
            _ => ApiError::Server { status, message },
        }
    }

    /// Message supplied by the server, if it sent one.
    ///
    /// 5xx bodies are never surfaced; they tend to carry stack traces.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Rejected { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Text to show the user: the server's message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(ApiError::from_status(401, None).is_unauthorized());
        assert_eq!(
            ApiError::from_status(409, Some("Date fully booked".into())),
            ApiError::Rejected {
                status: 409,
                message: Some("Date fully booked".into())
            }
        );
        assert!(matches!(
            ApiError::from_status(503, None),
            ApiError::Server { status: 503, .. }
        ));
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let rejected = ApiError::from_status(400, Some("Trail is closed".into()));
        assert_eq!(rejected.user_message("Failed."), "Trail is closed");

        let blank = ApiError::from_status(400, Some("  ".into()));
        assert_eq!(blank.user_message("Failed."), "Failed.");

        let server = ApiError::from_status(500, Some("NullPointerException".into()));
        assert_eq!(server.user_message("Failed."), "Failed.");

        let network = ApiError::Network("connection refused".into());
        assert_eq!(network.user_message("Failed."), "Failed.");
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"status":400}"#).unwrap();
        assert!(body.message.is_none());
    }
}
