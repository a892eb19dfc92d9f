use dashboard::surface::{
    Content, DisplaySurface, DrawingSurface, MapView, MarkerHandle, Region,
};

/// Prints every region as it is re-rendered.
#[derive(Default)]
pub struct TerminalDisplay;

impl DisplaySurface for TerminalDisplay {
    fn render(&mut self, region: Region, content: Content) {
        match content {
            Content::Text(text) => println!("{region}: {text}"),
            Content::List(items) if items.is_empty() => println!("{region}: (none)"),
            Content::List(items) => {
                println!("{region}:");
                for (rank, item) in items.iter().enumerate() {
                    println!("  {}. {item}", rank + 1);
                }
            }
        }
    }
}

/// Keeps markers in memory and logs what would be drawn.
#[derive(Default)]
pub struct TerminalMap {
    next_handle: u64,
}

impl DrawingSurface for TerminalMap {
    fn set_view(&mut self, view: &MapView) {
        log::info!(
            "map centered at {:?}, zoom {}, tiles {} ({})",
            view.center,
            view.zoom,
            view.tile_url,
            view.attribution
        );
    }

    fn place_marker(&mut self, latitude: f64, longitude: f64, label: &str) -> MarkerHandle {
        let handle = MarkerHandle::new(self.next_handle);
        self.next_handle += 1;
        println!(
            "marker #{} at ({latitude}, {longitude}): {}",
            handle.raw(),
            label.replace("<br>", ", ")
        );
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        log::debug!("marker #{} removed", handle.raw());
    }
}
