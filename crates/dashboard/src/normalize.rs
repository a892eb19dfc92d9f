//! Maps raw backend JSON onto the canonical records.
//!
//! Field names have changed over the backend's lifetime, so identifiers are
//! looked up by a list of candidates, first present wins. Missing counts
//! become zero, missing averages and fares stay absent.

use model::{
    summary::SummaryStats,
    trip::{TripId, TripRecord},
};
use serde_json::Value;
use utility::json::{as_lenient_u64, f64_field, first_present};

use crate::fetcher::RawTrip;

pub const TRIP_ID_FIELDS: &[&str] = &["id", "trip_id"];
pub const PICKUP_LAT_FIELDS: &[&str] = &["pickup_lat"];
pub const PICKUP_LON_FIELDS: &[&str] = &["pickup_lon"];
pub const FARE_FIELDS: &[&str] = &["fare_amount"];

pub const TOTAL_TRIPS_FIELDS: &[&str] = &["total_trips"];
pub const AVG_DISTANCE_FIELDS: &[&str] = &["avg_distance"];
pub const AVG_FARE_PER_KM_FIELDS: &[&str] = &["avg_fare_per_km"];

pub fn normalize_summary(raw: &Value) -> SummaryStats {
    SummaryStats {
        total_trips: first_present(raw, TOTAL_TRIPS_FIELDS)
            .and_then(as_lenient_u64)
            .unwrap_or(0),
        avg_distance_km: f64_field(raw, AVG_DISTANCE_FIELDS),
        avg_fare_per_km: f64_field(raw, AVG_FARE_PER_KM_FIELDS),
    }
}

pub fn normalize_trip(raw: &RawTrip) -> TripRecord {
    TripRecord {
        id: first_present(raw, TRIP_ID_FIELDS).and_then(trip_id),
        pickup_lat: f64_field(raw, PICKUP_LAT_FIELDS),
        pickup_lon: f64_field(raw, PICKUP_LON_FIELDS),
        fare_amount: f64_field(raw, FARE_FIELDS),
    }
}

pub fn normalize_trips(raw: &[RawTrip]) -> Vec<TripRecord> {
    raw.iter().map(normalize_trip).collect()
}

/// Extracts the trip entries from a `/api/trips` response body.
///
/// A body without a `results` array holds no trips.
pub fn trip_results(body: &Value) -> Vec<RawTrip> {
    match body.get("results") {
        Some(Value::Array(results)) => results.clone(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            log::warn!("ignoring trips response with non-list results: {other}");
            Vec::new()
        }
    }
}

fn trip_id(value: &Value) -> Option<TripId> {
    match value {
        Value::Number(number) => Some(TripId::Number(number.clone())),
        Value::String(text) => Some(TripId::Text(text.clone())),
        _ => None,
    }
}
