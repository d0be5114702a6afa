//! Trail listing filter criteria and their query-string form.

use serde::{Deserialize, Serialize};

/// Filter form state for `GET /api/trails`.
///
/// Every field holds raw form text. Blank fields are left out of the query
/// entirely rather than sent as empty parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailFilter {
    pub difficulty: String,
    pub location: String,
    pub min_length: String,
    pub max_length: String,
    pub search_term: String,
}

impl TrailFilter {
    /// Query parameters for the non-blank fields, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("difficulty", &self.difficulty),
            ("location", &self.location),
            ("minLength", &self.min_length),
            ("maxLength", &self.max_length),
            ("searchTerm", &self.search_term),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(name, value)| (name, value.trim().to_string()))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Set a field by its form name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "difficulty" => self.difficulty = value,
            "location" => self.location = value,
            "minLength" => self.min_length = value,
            "maxLength" => self.max_length = value,
            "searchTerm" => self.search_term = value,
            _ => tracing::warn!("Ignoring unknown filter field {field}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_difficulty_is_sent() {
        let filter = TrailFilter {
            difficulty: "EASY".into(),
            ..Default::default()
        };
        assert_eq!(filter.query_pairs(), vec![("difficulty", "EASY".to_string())]);
    }

    #[test]
    fn test_blank_fields_are_omitted() {
        let mut filter = TrailFilter::default();
        filter.set("location", "   ".into());
        filter.set("minLength", "5".into());
        filter.set("searchTerm", " lakes ".into());

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("minLength", "5".to_string()),
                ("searchTerm", "lakes".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut filter = TrailFilter {
            difficulty: "EXPERT".into(),
            location: "Alps".into(),
            min_length: "1".into(),
            max_length: "30".into(),
            search_term: "ridge".into(),
        };
        assert!(!filter.is_empty());

        filter.clear();
        assert_eq!(filter, TrailFilter::default());
        assert!(filter.is_empty());
    }
}
