use std::error;
use std::fmt;
use std::time::Duration;

pub mod dashboard;
pub mod fetcher;
pub mod filter;
pub mod map;
pub mod memory;
pub mod normalize;
pub mod panels;
pub mod query;
pub mod surface;

pub use dashboard::{ApplyReport, Dashboard, DashboardConfig, DashboardState, PanelUpdate};
pub use fetcher::{sample::SampleFetcher, DataFetcher, RawTrip};

/// Why a single fetch did not produce data.
///
/// A fetch failure only ever affects the panels fed by that fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be completed or got a non-success status.
    Network {
        status_code: Option<u16>,
        message: String,
    },
    /// The response body was not well-formed JSON.
    Parse { message: String },
    /// No response within the configured time.
    Timeout { after: Duration },
}

impl FetchError {
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

impl error::Error for FetchError {}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Network {
                status_code: Some(status_code),
                message,
            } => write!(f, "network failure ({status_code}): {message}"),
            FetchError::Network {
                status_code: None,
                message,
            } => write!(f, "network failure: {message}"),
            FetchError::Parse { message } => write!(f, "parse failure: {message}"),
            FetchError::Timeout { after } => {
                write!(f, "no response after {} ms", after.as_millis())
            }
        }
    }
}

pub type FetchResult<O> = Result<O, FetchError>;
