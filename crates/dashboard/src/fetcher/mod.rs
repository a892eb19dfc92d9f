use async_trait::async_trait;
use model::{
    ranking::{FareRanking, RouteRanking},
    summary::SummaryStats,
};

use crate::{query::TripsQuery, FetchResult};

pub mod sample;

/// A trip entry as delivered by the backend, before normalization.
pub type RawTrip = serde_json::Value;

/// Source of dashboard data.
///
/// Every call is independent: one may fail while the others succeed, and no
/// call order is assumed.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    async fn fetch_summary(&self) -> FetchResult<SummaryStats>;

    async fn fetch_trips(&self, query: &TripsQuery) -> FetchResult<Vec<RawTrip>>;

    /// Most frequent routes. Sources without a ranking report none.
    async fn fetch_top_routes(&self) -> FetchResult<Vec<RouteRanking>> {
        Ok(Vec::new())
    }

    /// Most expensive trips. Sources without a ranking report none.
    async fn fetch_top_fares(&self) -> FetchResult<Vec<FareRanking>> {
        Ok(Vec::new())
    }
}
