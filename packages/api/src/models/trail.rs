//! # Trail model
//!
//! [`Trail`] mirrors the API's trail resource (camelCase JSON, ISO dates).
//! [`NewTrail`] is the admin creation payload; it has every field except the
//! server-assigned `id`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier the API assigns to a trail.
pub type TrailId = i64;

/// Image shown when a trail has no `imageUrl`.
pub const DEFAULT_TRAIL_IMAGE: &str = "/images/default-trail.jpg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    #[default]
    Moderate,
    Difficult,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Difficult,
        Difficulty::Expert,
    ];

    /// Wire value, e.g. `"EASY"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Moderate => "MODERATE",
            Difficulty::Difficult => "DIFFICULT",
            Difficulty::Expert => "EXPERT",
        }
    }

    /// Human label, e.g. `"Easy"`.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Difficult => "Difficult",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// A hiking trail as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    pub id: TrailId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Kilometres.
    pub length: f64,
    /// Hours.
    pub duration: f64,
    pub difficulty: Difficulty,
    /// Comma-delimited feature list.
    #[serde(default)]
    pub features: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub available_dates: Vec<NaiveDate>,
}

impl Trail {
    /// Features split on commas, trimmed, blanks dropped.
    pub fn feature_list(&self) -> Vec<&str> {
        self.features
            .as_deref()
            .map(|features| {
                features
                    .split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn image(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_TRAIL_IMAGE)
    }

    /// First `max_chars` characters of the description, for cards.
    pub fn summary(&self, max_chars: usize) -> String {
        let mut summary: String = self.description.chars().take(max_chars).collect();
        if self.description.chars().count() > max_chars {
            summary.push_str("...");
        }
        summary
    }
}

/// Payload for `POST /api/trails`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTrail {
    pub name: String,
    pub description: String,
    pub location: String,
    pub length: f64,
    pub duration: f64,
    pub difficulty: Difficulty,
    pub features: String,
    pub price: f64,
    pub image_url: String,
    pub available_dates: Vec<NaiveDate>,
}
