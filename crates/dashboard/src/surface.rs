//! Capabilities the pipeline needs from the page around it.
//!
//! The input fields, the display regions and the map are owned by whatever
//! hosts the dashboard. The pipeline only talks to them through these traits.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    StartDate,
    EndDate,
    MinDistance,
    MaxDistance,
    RecordLimit,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::StartDate,
        Field::EndDate,
        Field::MinDistance,
        Field::MaxDistance,
        Field::RecordLimit,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::StartDate => "filter-start-date",
            Self::EndDate => "filter-end-date",
            Self::MinDistance => "filter-min-km",
            Self::MaxDistance => "filter-max-km",
            Self::RecordLimit => "filter-record-limit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Named display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    TotalTrips,
    AvgDistance,
    AvgFare,
    TopRoutes,
    TopFares,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::TotalTrips,
        Region::AvgDistance,
        Region::AvgFare,
        Region::TopRoutes,
        Region::TopFares,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::TotalTrips => "total-trips",
            Self::AvgDistance => "avg-distance",
            Self::AvgFare => "avg-fare",
            Self::TopRoutes => "top-routes-list",
            Self::TopFares => "top-fares-list",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What a region shows. Always replaces the previous content as a whole.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    List(Vec<String>),
}

pub trait InputSurface {
    /// The raw value of a field, `None` if the field does not exist.
    fn read(&self, field: Field) -> Option<String>;
}

pub trait DisplaySurface {
    fn render(&mut self, region: Region, content: Content);
}

/// Opaque reference to a marker placed on a `DrawingSurface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    /// For surface implementations only.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Initial map position and background tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url: String,
    /// required by the tile service's terms of use
    pub attribution: String,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: (40.7128, -74.0060),
            zoom: 12,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_owned(),
            attribution: "&copy; OpenStreetMap contributors".to_owned(),
        }
    }
}

pub trait DrawingSurface {
    fn set_view(&mut self, view: &MapView);
    fn place_marker(&mut self, latitude: f64, longitude: f64, label: &str) -> MarkerHandle;
    fn remove_marker(&mut self, handle: MarkerHandle);
}
