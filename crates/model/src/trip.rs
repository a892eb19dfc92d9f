use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// Trip identifiers arrive either as JSON numbers or as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TripId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<u64> for TripId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for TripId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A single trip, as used for one render pass.
///
/// Serializes in the backend's wire shape, so a `TripRecord` can stand in for
/// a raw trip entry.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TripRecord {
    #[serde(rename = "trip_id")]
    pub id: Option<TripId>,
    pub pickup_lat: Option<f64>,
    pub pickup_lon: Option<f64>,
    pub fare_amount: Option<f64>,
}

impl TripRecord {
    /// The pickup coordinate, if both latitude and longitude are known.
    pub fn pickup(&self) -> Option<(f64, f64)> {
        match (self.pickup_lat, self.pickup_lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

impl ExampleData for Vec<TripRecord> {
    fn example_data() -> Self {
        vec![
            TripRecord {
                id: Some(1u64.into()),
                pickup_lat: Some(40.713),
                pickup_lon: Some(-74.005),
                fare_amount: Some(15.2),
            },
            TripRecord {
                id: Some(2u64.into()),
                pickup_lat: Some(40.716),
                pickup_lon: Some(-74.002),
                fare_amount: Some(22.5),
            },
        ]
    }
}
