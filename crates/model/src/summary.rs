use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// Aggregate figures for the whole dataset.
///
/// Averages are `None` when the backend did not report them. They are never
/// substituted with zero, unlike `total_trips`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_trips: u64,
    pub avg_distance_km: Option<f64>,
    pub avg_fare_per_km: Option<f64>,
}

impl ExampleData for SummaryStats {
    fn example_data() -> Self {
        Self {
            total_trips: 2,
            avg_distance_km: Some(5.5),
            avg_fare_per_km: Some(18.85),
        }
    }
}
