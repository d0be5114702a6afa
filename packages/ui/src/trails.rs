//! Trail list and detail loading.

use api::{HikeApi, Trail, TrailFilter, TrailId};
use chrono::NaiveDate;

pub const TRAILS_LOAD_FAILED: &str = "Failed to load trails. Please try again later.";
pub const TRAIL_DETAIL_FAILED: &str = "Failed to load trail details. Please try again later.";

/// Fetch the trails matching `filter`. No caching; every call hits the API.
pub async fn load_trails(api: &impl HikeApi, filter: &TrailFilter) -> Result<Vec<Trail>, String> {
    api.list_trails(filter).await.map_err(|e| {
        tracing::error!("Failed to load trails: {}", e);
        TRAILS_LOAD_FAILED.to_string()
    })
}

/// A trail together with its bookable dates.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailDetail {
    pub trail: Trail,
    pub available_dates: Vec<NaiveDate>,
}

/// Fetch a trail and its available dates. Both must succeed.
pub async fn load_trail_detail(api: &impl HikeApi, id: TrailId) -> Result<TrailDetail, String> {
    let failed = |e: api::ApiError| {
        tracing::error!("Failed to load trail {}: {}", id, e);
        TRAIL_DETAIL_FAILED.to_string()
    };
    let trail = api.trail(id).await.map_err(failed)?;
    let available_dates = api.available_dates(id).await.map_err(failed)?;
    Ok(TrailDetail {
        trail,
        available_dates,
    })
}

/// Home page highlights. A failure is logged and shows as an empty list.
pub async fn load_featured(api: &impl HikeApi) -> Vec<Trail> {
    api.featured_trails().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to load featured trails: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use api::{ApiError, Difficulty};

    use super::*;
    use crate::testing::{date, trail, FakeApi};

    #[tokio::test]
    async fn test_filter_is_passed_through() {
        let api = FakeApi::default();
        api.script(|s| s.list_trails.push_back(Ok(vec![trail(1, 10.0)])));
        let filter = TrailFilter {
            difficulty: Difficulty::Easy.as_str().to_string(),
            ..TrailFilter::default()
        };

        let trails = load_trails(&api, &filter).await.unwrap();

        assert_eq!(trails.len(), 1);
        assert_eq!(api.sent_filters(), vec![filter]);
    }

    #[tokio::test]
    async fn test_list_failure_message() {
        let api = FakeApi::default();
        api.script(|s| {
            s.list_trails
                .push_back(Err(ApiError::Network("offline".into())))
        });

        let result = load_trails(&api, &TrailFilter::default()).await;

        assert_eq!(result, Err(TRAILS_LOAD_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_detail_needs_both_requests() {
        let api = FakeApi::default();
        api.script(|s| {
            s.trail = Some(Ok(trail(4, 30.0)));
            s.available_dates
                .push_back(Err(ApiError::from_status(500, None)));
        });

        let result = load_trail_detail(&api, 4).await;

        assert_eq!(result, Err(TRAIL_DETAIL_FAILED.to_string()));
        assert_eq!(api.calls(), vec!["trail:4", "available_dates:4"]);
    }

    #[tokio::test]
    async fn test_detail_loads() {
        let api = FakeApi::default();
        api.script(|s| {
            s.trail = Some(Ok(trail(4, 30.0)));
            s.available_dates.push_back(Ok(vec![date("2026-07-01")]));
        });

        let detail = load_trail_detail(&api, 4).await.unwrap();

        assert_eq!(detail.trail.id, 4);
        assert_eq!(detail.available_dates, vec![date("2026-07-01")]);
    }

    #[tokio::test]
    async fn test_featured_failure_is_empty() {
        let api = FakeApi::default();
        assert!(load_featured(&api).await.is_empty());
        assert_eq!(api.calls(), vec!["featured_trails"]);
    }
}
