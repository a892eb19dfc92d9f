//! In-process surfaces. They record what the pipeline did instead of drawing
//! anything, which makes them usable as stand-ins for a real page.

use std::collections::{BTreeMap, HashMap};

use crate::surface::{
    Content, DisplaySurface, DrawingSurface, Field, InputSurface, MapView, MarkerHandle,
    Region,
};

#[derive(Debug, Clone, Default)]
pub struct MemoryInput {
    values: HashMap<Field, String>,
}

impl MemoryInput {
    pub fn from_pairs<'a, P>(pairs: P) -> Self
    where
        P: IntoIterator<Item = (Field, &'a str)>,
    {
        let mut input = Self::default();
        for (field, value) in pairs {
            input.set(field, value);
        }
        input
    }

    pub fn set<S: Into<String>>(&mut self, field: Field, value: S) {
        self.values.insert(field, value.into());
    }

    pub fn clear(&mut self, field: Field) {
        self.values.remove(&field);
    }
}

impl InputSurface for MemoryInput {
    fn read(&self, field: Field) -> Option<String> {
        self.values.get(&field).cloned()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    regions: HashMap<Region, Content>,
    renders: usize,
}

impl MemoryDisplay {
    pub fn text(&self, region: Region) -> Option<&str> {
        match self.regions.get(&region) {
            Some(Content::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn list(&self, region: Region) -> Option<&[String]> {
        match self.regions.get(&region) {
            Some(Content::List(items)) => Some(items),
            _ => None,
        }
    }

    /// Number of `render` calls so far, over all regions.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl DisplaySurface for MemoryDisplay {
    fn render(&mut self, region: Region, content: Content) {
        self.regions.insert(region, content);
        self.renders += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryMap {
    view: Option<MapView>,
    markers: BTreeMap<MarkerHandle, PlacedMarker>,
    next_handle: u64,
    removed: usize,
    unknown_removals: usize,
}

impl MemoryMap {
    pub fn view(&self) -> Option<&MapView> {
        self.view.as_ref()
    }

    /// Markers currently on the map, in placement order.
    pub fn markers(&self) -> Vec<&PlacedMarker> {
        self.markers.values().collect()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Removals of handles that were never placed or already removed.
    pub fn unknown_removals(&self) -> usize {
        self.unknown_removals
    }
}

impl DrawingSurface for MemoryMap {
    fn set_view(&mut self, view: &MapView) {
        self.view = Some(view.clone());
    }

    fn place_marker(&mut self, latitude: f64, longitude: f64, label: &str) -> MarkerHandle {
        let handle = MarkerHandle::new(self.next_handle);
        self.next_handle += 1;
        self.markers.insert(
            handle,
            PlacedMarker {
                latitude,
                longitude,
                label: label.to_owned(),
            },
        );
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        if self.markers.remove(&handle).is_some() {
            self.removed += 1;
        } else {
            self.unknown_removals += 1;
        }
    }
}
