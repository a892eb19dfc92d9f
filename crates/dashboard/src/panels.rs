use model::{
    ranking::{FareRanking, RouteRanking},
    summary::SummaryStats,
};
use utility::format::display_or_blank;

use crate::surface::{Content, DisplaySurface, Region};

/// Writes figures and rankings into their display regions.
///
/// Every call replaces the whole region. Lists are shown in the order given.
pub struct PanelRenderer<D: DisplaySurface> {
    display: D,
}

impl<D: DisplaySurface> PanelRenderer<D> {
    pub fn new(display: D) -> Self {
        Self { display }
    }

    pub fn render_summary(&mut self, stats: &SummaryStats) {
        self.display.render(
            Region::TotalTrips,
            Content::Text(stats.total_trips.to_string()),
        );
        self.display.render(
            Region::AvgDistance,
            Content::Text(format!("{} km", display_or_blank(stats.avg_distance_km))),
        );
        self.display.render(
            Region::AvgFare,
            Content::Text(format!("${}", display_or_blank(stats.avg_fare_per_km))),
        );
    }

    pub fn render_routes(&mut self, rankings: &[RouteRanking]) {
        let items = rankings
            .iter()
            .map(|ranking| format!("{} ({} trips)", ranking.route, ranking.count))
            .collect();
        self.display.render(Region::TopRoutes, Content::List(items));
    }

    pub fn render_fares(&mut self, rankings: &[FareRanking]) {
        let items = rankings
            .iter()
            .map(|ranking| format!("Trip {}: ${}", ranking.trip_id, ranking.fare_amount))
            .collect();
        self.display.render(Region::TopFares, Content::List(items));
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
