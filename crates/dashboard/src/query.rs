use chrono::NaiveDate;
use model::filter::FilterCriteria;
use serde::Serialize;

/// Query parameters for `GET /api/trips`.
///
/// Unset criteria are left out of the query entirely. An empty `start=` would
/// read as a filter to the backend.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripsQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    pub per_page: i64,
}

pub fn build_query(criteria: &FilterCriteria) -> TripsQuery {
    TripsQuery {
        start: criteria.start_date,
        end: criteria.end_date,
        min_distance: criteria.min_distance_km,
        max_distance: criteria.max_distance_km,
        per_page: criteria.record_limit,
    }
}
