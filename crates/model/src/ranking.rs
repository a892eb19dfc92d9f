use serde::{Deserialize, Serialize};

use crate::{trip::TripId, ExampleData};

// Rankings are kept in the order the source delivered them.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRanking {
    pub route: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRanking {
    pub trip_id: TripId,
    pub fare_amount: f64,
}

impl ExampleData for Vec<RouteRanking> {
    fn example_data() -> Self {
        vec![
            RouteRanking {
                route: "Downtown → Uptown".to_owned(),
                count: 120,
            },
            RouteRanking {
                route: "Midtown → Brooklyn".to_owned(),
                count: 95,
            },
        ]
    }
}

impl ExampleData for Vec<FareRanking> {
    fn example_data() -> Self {
        vec![
            FareRanking {
                trip_id: 999u64.into(),
                fare_amount: 75.0,
            },
            FareRanking {
                trip_id: 500u64.into(),
                fare_amount: 60.0,
            },
        ]
    }
}
