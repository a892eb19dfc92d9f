use std::error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dashboard::FetchError;

pub mod client;

pub use client::{TaxiApiClient, TaxiApiConfig};

#[derive(Debug, Clone)]
pub enum ApiError {
    RequestError(Arc<reqwest::Error>),
    JsonError(Arc<serde_json::Error>),
    InvalidResponse {
        status_code: reqwest::StatusCode,
        url: String,
        response: Option<String>,
    },
    Timeout {
        url: String,
        after: Duration,
    },
}

impl error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::RequestError(e) => write!(f, "HTTP request error: {}", e),
            ApiError::JsonError(e) => write!(f, "JSON parse error: {}", e),
            ApiError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid Response ({}) {}: {}", status_code, text, url)
                }
                None => write!(f, "Invalid Response ({}) {}", status_code, url),
            },
            ApiError::Timeout { url, after } => {
                write!(f, "No response within {} s: {}", after.as_secs_f32(), url)
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::RequestError(Arc::new(e))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::JsonError(Arc::new(e))
    }
}

impl From<ApiError> for FetchError {
    fn from(value: ApiError) -> Self {
        let message = value.to_string();
        match value {
            ApiError::RequestError(why) => FetchError::Network {
                status_code: why.status().map(|status| status.as_u16()),
                message,
            },
            ApiError::InvalidResponse { status_code, .. } => FetchError::Network {
                status_code: Some(status_code.as_u16()),
                message,
            },
            ApiError::JsonError(_) => FetchError::Parse { message },
            ApiError::Timeout { after, .. } => FetchError::Timeout { after },
        }
    }
}
