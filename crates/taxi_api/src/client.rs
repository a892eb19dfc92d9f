use std::env;
use std::time::Duration;

use async_trait::async_trait;
use dashboard::{
    normalize::{normalize_summary, trip_results},
    query::TripsQuery,
    DataFetcher, FetchResult, RawTrip,
};
use model::summary::SummaryStats;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const SUMMARY_ENDPOINT: &str = "api/summary";
pub const TRIPS_ENDPOINT: &str = "api/trips";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for TaxiApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TaxiApiConfig {
    /// Reads `TAXI_API_BASE_URL` and `TAXI_API_TIMEOUT_SECS`, falling back to
    /// the defaults for anything unset or unreadable.
    pub fn env() -> Self {
        let base_url =
            env::var("TAXI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let timeout_secs = match env::var("TAXI_API_TIMEOUT_SECS") {
            Ok(value) => value.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "ignoring TAXI_API_TIMEOUT_SECS='{value}', using {DEFAULT_TIMEOUT_SECS}"
                );
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Self {
            base_url,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Client for the taxi trip backend.
pub struct TaxiApiClient {
    pub config: TaxiApiConfig,
    client: reqwest::Client,
}

impl TaxiApiClient {
    pub fn new(config: &TaxiApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Fetch a JSON document from an endpoint.
    pub async fn get(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        log::info!("Requesting Endpoint '{url}'.");
        self.send(self.client.get(&url), url).await
    }

    /// Fetch a JSON document from an endpoint, with query parameters.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &Q,
    ) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        log::info!("Requesting Endpoint '{url}'.");
        self.send(self.client.get(&url).query(query), url).await
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: String,
    ) -> Result<Value, ApiError> {
        /* perform get-request */
        let response = request
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|why| self.request_error(why, &url))?;

        /* parse response */
        let status = response.status();
        if status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|why| self.request_error(why, &url))?;
            Ok(serde_json::from_str(&text)?)
        } else {
            let text = response.text().await.ok().filter(|text| !text.is_empty());
            Err(ApiError::InvalidResponse {
                status_code: status,
                url,
                response: text,
            })
        }
    }

    fn request_error(&self, why: reqwest::Error, url: &str) -> ApiError {
        if why.is_timeout() {
            ApiError::Timeout {
                url: url.to_owned(),
                after: self.config.timeout(),
            }
        } else {
            why.into()
        }
    }
}

#[async_trait]
impl DataFetcher for TaxiApiClient {
    async fn fetch_summary(&self) -> FetchResult<SummaryStats> {
        let body = self.get(SUMMARY_ENDPOINT).await?;
        Ok(normalize_summary(&body))
    }

    async fn fetch_trips(&self, query: &TripsQuery) -> FetchResult<Vec<RawTrip>> {
        let body = self.get_with_query(TRIPS_ENDPOINT, query).await?;
        Ok(trip_results(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_tolerates_trailing_slash() {
        let config = TaxiApiConfig {
            base_url: "http://localhost:5000/".to_owned(),
            ..Default::default()
        };
        let client = TaxiApiClient::new(&config).unwrap();
        assert_eq!(client.url(TRIPS_ENDPOINT), "http://localhost:5000/api/trips");
    }
}
