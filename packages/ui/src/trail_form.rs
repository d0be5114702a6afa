//! # Trail creation form
//!
//! [`TrailDraft`] holds the create-trail form as typed text. Numbers and
//! dates are parsed only in [`TrailDraft::to_new_trail`], so a bad value is
//! reported inline and nothing is sent. Candidate dates are a list of rows;
//! the form always keeps at least one row and blank rows are dropped on
//! submit.
//!
//! [`creation_gate`] is the page's own admin check. An absent user is left
//! to the route guard.

use api::{CurrentUser, Difficulty, HikeApi, NewTrail, Trail};
use chrono::NaiveDate;
use store::TokenStore;
use thiserror::Error;

use crate::session::{AuthSink, Session};

pub const CREATE_TRAIL_FAILED: &str = "Failed to create trail. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrailDraftError {
    #[error("Trail name is required")]
    MissingName,
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrailDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub length: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub features: String,
    pub price: String,
    pub image_url: String,
    dates: Vec<String>,
}

impl Default for TrailDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            location: String::new(),
            length: String::new(),
            duration: String::new(),
            difficulty: Difficulty::default(),
            features: String::new(),
            price: String::new(),
            image_url: String::new(),
            dates: vec![String::new()],
        }
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, TrailDraftError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(TrailDraftError::InvalidNumber { field })
}

impl TrailDraft {
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn add_date(&mut self) {
        self.dates.push(String::new());
    }

    /// Remove row `index`. The last remaining row is never removed.
    pub fn remove_date(&mut self, index: usize) {
        if self.dates.len() > 1 && index < self.dates.len() {
            self.dates.remove(index);
        }
    }

    pub fn set_date(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.dates.get_mut(index) {
            *row = value.into();
        }
    }

    /// Set a text field by its form name.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "description" => self.description = value,
            "location" => self.location = value,
            "length" => self.length = value,
            "duration" => self.duration = value,
            "features" => self.features = value,
            "price" => self.price = value,
            "imageUrl" => self.image_url = value,
            "difficulty" => {
                if let Ok(difficulty) = value.parse() {
                    self.difficulty = difficulty;
                }
            }
            _ => tracing::warn!("Unknown trail field: {}", field),
        }
    }

    pub fn to_new_trail(&self) -> Result<NewTrail, TrailDraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TrailDraftError::MissingName);
        }

        let available_dates = self
            .dates
            .iter()
            .map(|row| row.trim())
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.parse::<NaiveDate>()
                    .map_err(|_| TrailDraftError::InvalidDate(row.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewTrail {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            length: parse_number("Length", &self.length)?,
            duration: parse_number("Duration", &self.duration)?,
            difficulty: self.difficulty,
            features: self.features.trim().to_string(),
            price: parse_number("Price", &self.price)?,
            image_url: self.image_url.trim().to_string(),
            available_dates,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationGate {
    Form,
    AccessDenied,
}

/// Signed-in non-admins get an access-denied notice instead of the form.
pub fn creation_gate(user: Option<&CurrentUser>) -> CreationGate {
    match user {
        Some(user) if !user.is_admin() => CreationGate::AccessDenied,
        _ => CreationGate::Form,
    }
}

/// Validate and post the draft. Returns the created trail or the message
/// to show above the form.
pub async fn submit_trail<S: TokenStore, A: HikeApi>(
    session: &Session<S, A>,
    auth: &mut impl AuthSink,
    draft: &TrailDraft,
) -> Result<Trail, String> {
    let trail = draft.to_new_trail().map_err(|e| e.to_string())?;
    let Some(token) = session.token() else {
        session.expire(auth);
        return Err(CREATE_TRAIL_FAILED.to_string());
    };

    let result = session.api().create_trail(&token, &trail).await;
    match session.observe(result, auth) {
        Ok(created) => {
            tracing::info!("Created trail {} ({})", created.id, created.name);
            Ok(created)
        }
        Err(e) => {
            tracing::warn!("Creating trail failed: {}", e);
            Err(e.user_message(CREATE_TRAIL_FAILED))
        }
    }
}
