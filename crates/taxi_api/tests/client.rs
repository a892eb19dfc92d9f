use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use dashboard::{query::build_query, DataFetcher, FetchError};
use model::filter::FilterCriteria;
use taxi_api::{TaxiApiClient, TaxiApiConfig};
use tokio::net::TcpListener;

type Canned = (StatusCode, &'static str);

/// Stand-in taxi backend answering `/api/summary` and `/api/trips` with canned
/// bodies. Records the query parameters of every trips request.
#[derive(Clone)]
struct Backend {
    summary: Canned,
    trips: Canned,
    trips_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl Backend {
    fn new() -> Self {
        Self {
            summary: (StatusCode::OK, r#"{"total_trips": 0}"#),
            trips: (StatusCode::OK, r#"{"results": []}"#),
            trips_queries: Arc::default(),
        }
    }

    fn summary(mut self, status: StatusCode, body: &'static str) -> Self {
        self.summary = (status, body);
        self
    }

    fn trips(mut self, status: StatusCode, body: &'static str) -> Self {
        self.trips = (status, body);
        self
    }

    fn trips_queries(&self) -> Vec<HashMap<String, String>> {
        self.trips_queries.lock().unwrap().clone()
    }

    /// Binds a free local port and returns a client pointed at it.
    async fn start(&self) -> TaxiApiClient {
        let routes = Router::new()
            .route("/api/summary", get(get_summary))
            .route("/api/trips", get(get_trips))
            .with_state(self.clone());
        serve(routes, 5).await
    }
}

async fn get_summary(State(backend): State<Backend>) -> impl IntoResponse {
    let (status, body) = backend.summary;
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

async fn get_trips(
    State(backend): State<Backend>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    backend.trips_queries.lock().unwrap().push(query);
    let (status, body) = backend.trips;
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

async fn serve(routes: Router, timeout_secs: u64) -> TaxiApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, routes.into_make_service())
            .await
            .unwrap();
    });

    let config = TaxiApiConfig {
        base_url: format!("http://{address}"),
        timeout_secs,
    };
    TaxiApiClient::new(&config).unwrap()
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[tokio::test]
async fn summary_is_normalized() {
    let backend = Backend::new().summary(StatusCode::OK, r#"{"total_trips": 42}"#);
    let client = backend.start().await;

    let summary = client.fetch_summary().await.unwrap();

    assert_eq!(summary.total_trips, 42);
    assert_eq!(summary.avg_distance_km, None);
    assert_eq!(summary.avg_fare_per_km, None);
}

#[tokio::test]
async fn trips_query_leaves_out_unset_filters() {
    let backend = Backend::new().trips(
        StatusCode::OK,
        r#"{"results": [{"id": 1, "pickup_lat": 40.71, "pickup_lon": -74.0, "fare_amount": 15.2}, {"id": 2, "fare_amount": 9}]}"#,
    );
    let client = backend.start().await;

    let trips = client
        .fetch_trips(&build_query(&FilterCriteria::default()))
        .await
        .unwrap();

    assert_eq!(trips.len(), 2);
    assert_eq!(backend.trips_queries(), vec![params(&[("per_page", "100")])]);
}

#[tokio::test]
async fn trips_query_carries_set_filters() {
    let backend = Backend::new();
    let client = backend.start().await;
    let criteria = FilterCriteria {
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
        min_distance_km: Some(1.5),
        record_limit: 25,
        ..Default::default()
    };

    let trips = client.fetch_trips(&build_query(&criteria)).await.unwrap();

    assert!(trips.is_empty());
    assert_eq!(
        backend.trips_queries(),
        vec![params(&[
            ("start", "2024-01-01"),
            ("end", "2024-01-31"),
            ("min_distance", "1.5"),
            ("per_page", "25"),
        ])]
    );
}

#[tokio::test]
async fn zero_record_limit_is_sent_as_entered() {
    let backend = Backend::new();
    let client = backend.start().await;
    let criteria = FilterCriteria {
        record_limit: 0,
        ..Default::default()
    };

    client.fetch_trips(&build_query(&criteria)).await.unwrap();

    assert_eq!(backend.trips_queries(), vec![params(&[("per_page", "0")])]);
}

#[tokio::test]
async fn missing_results_means_no_trips() {
    let backend = Backend::new().trips(StatusCode::OK, r#"{"page": 1}"#);
    let client = backend.start().await;

    let trips = client
        .fetch_trips(&build_query(&FilterCriteria::default()))
        .await
        .unwrap();

    assert!(trips.is_empty());
}

#[tokio::test]
async fn error_status_is_a_network_failure() {
    let backend =
        Backend::new().summary(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "db down"}"#);
    let client = backend.start().await;

    let error = client.fetch_summary().await.unwrap_err();

    match error {
        FetchError::Network {
            status_code,
            message,
        } => {
            assert_eq!(status_code, Some(500));
            assert!(message.contains("db down"), "{message}");
        }
        other => panic!("expected network failure, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_failure() {
    let backend = Backend::new().summary(StatusCode::OK, "<html>oops</html>");
    let client = backend.start().await;

    let error = client.fetch_summary().await.unwrap_err();

    assert!(matches!(error, FetchError::Parse { .. }), "{error:?}");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    // bind and drop to get a port nobody listens on
    let address = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap()
        .local_addr()
        .unwrap();
    let config = TaxiApiConfig {
        base_url: format!("http://{address}"),
        timeout_secs: 5,
    };
    let client = TaxiApiClient::new(&config).unwrap();

    let error = client.fetch_summary().await.unwrap_err();

    assert!(
        matches!(error, FetchError::Network { status_code: None, .. }),
        "{error:?}"
    );
}

#[tokio::test]
async fn stalled_backend_times_out() {
    let routes = Router::new().route(
        "/api/summary",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "{}"
        }),
    );
    let client = serve(routes, 1).await;

    let error = client.fetch_summary().await.unwrap_err();

    assert_eq!(
        error,
        FetchError::Timeout {
            after: Duration::from_secs(1)
        }
    );
}
