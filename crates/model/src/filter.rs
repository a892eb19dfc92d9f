use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECORD_LIMIT: i64 = 100;

/// The filter state as entered by the operator. Rebuilt on every apply.
///
/// No ordering or sign checks are made: a start date after the end date, a
/// negative distance or a record limit of zero is passed on to the backend
/// as is.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_distance_km: Option<f64>,
    pub max_distance_km: Option<f64>,
    /// `DEFAULT_RECORD_LIMIT` when nothing readable was entered
    pub record_limit: i64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            min_distance_km: None,
            max_distance_km: None,
            record_limit: DEFAULT_RECORD_LIMIT,
        }
    }
}
