use async_trait::async_trait;
use model::{
    ranking::{FareRanking, RouteRanking},
    summary::SummaryStats,
    trip::TripRecord,
    ExampleData,
};

use crate::{query::TripsQuery, FetchError, FetchResult};

use super::{DataFetcher, RawTrip};

/// Serves the fixed placeholder dataset, for running without a backend.
///
/// Filters are not applied, only the record limit is honored. A limit of zero
/// or below serves no trips.
#[derive(Debug, Clone, Default)]
pub struct SampleFetcher;

#[async_trait]
impl DataFetcher for SampleFetcher {
    async fn fetch_summary(&self) -> FetchResult<SummaryStats> {
        Ok(SummaryStats::example_data())
    }

    async fn fetch_trips(&self, query: &TripsQuery) -> FetchResult<Vec<RawTrip>> {
        log::debug!("serving sample trips, ignoring {query:?}");
        Vec::<TripRecord>::example_data()
            .iter()
            .take(usize::try_from(query.per_page).unwrap_or(0))
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|why| FetchError::parse(why.to_string()))
    }

    async fn fetch_top_routes(&self) -> FetchResult<Vec<RouteRanking>> {
        Ok(Vec::<RouteRanking>::example_data())
    }

    async fn fetch_top_fares(&self) -> FetchResult<Vec<FareRanking>> {
        Ok(Vec::<FareRanking>::example_data())
    }
}
