use model::trip::TripRecord;
use utility::format::display_or_blank;

use crate::surface::{DrawingSurface, MapView, MarkerHandle};

/// Owns the markers on a drawing surface and keeps them in line with the
/// latest trip list.
///
/// Invariant: after `reconcile`, there is exactly one live marker per trip of
/// that call with both pickup coordinates. No handle survives a reconcile.
pub struct MapReconciler<S: DrawingSurface> {
    surface: S,
    markers: Vec<MarkerHandle>,
}

impl<S: DrawingSurface> MapReconciler<S> {
    /// Takes over the surface and moves it to the initial view.
    pub fn new(mut surface: S, view: &MapView) -> Self {
        surface.set_view(view);
        Self {
            surface,
            markers: Vec::new(),
        }
    }

    /// Replaces all markers with markers for `trips`, in trip order.
    ///
    /// Trips without both coordinates get no marker. Returns the number of
    /// live markers.
    pub fn reconcile(&mut self, trips: &[TripRecord]) -> usize {
        for handle in self.markers.drain(..) {
            self.surface.remove_marker(handle);
        }

        for trip in trips {
            let Some((latitude, longitude)) = trip.pickup() else {
                log::debug!(
                    "no marker for trip '{}': pickup location incomplete",
                    display_or_blank(trip.id.as_ref())
                );
                continue;
            };
            let handle = self
                .surface
                .place_marker(latitude, longitude, &marker_label(trip));
            self.markers.push(handle);
        }

        self.markers.len()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

pub fn marker_label(trip: &TripRecord) -> String {
    format!(
        "Trip ID: {}<br>Fare: ${}",
        display_or_blank(trip.id.as_ref()),
        display_or_blank(trip.fare_amount)
    )
}
