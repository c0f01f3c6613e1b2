// Example: drive a detector against a simulated page through a full
// bootstrap + address-bar hide/show cycle.
use addressbar::{Detector, DetectorOptions, HeightState, ViewportHost};

#[derive(Debug, Default)]
struct SimPage {
    viewport_height: u32,
    scroll: u64,
    markers: Vec<String>,
    oversized: bool,
}

impl ViewportHost for SimPage {
    fn insert_probe(&mut self) {
        println!("probe attached");
    }

    fn probe_height(&self) -> u32 {
        self.viewport_height
    }

    fn apply_marker(&mut self, marker: &str) {
        if !self.markers.iter().any(|m| m == marker) {
            self.markers.push(marker.to_string());
        }
    }

    fn remove_marker(&mut self, marker: &str) {
        self.markers.retain(|m| m != marker);
    }

    fn scroll_position(&self) -> u64 {
        self.scroll
    }

    fn set_scroll_position(&mut self, position: u64) {
        self.scroll = position;
    }

    fn force_scrollable(&mut self) {
        self.oversized = true;
    }

    fn restore_scrollable(&mut self) {
        self.oversized = false;
    }

    fn document_ready(&self) -> bool {
        true
    }

    fn dispatch_height_change(&mut self, state: HeightState) {
        println!(
            "heightchange: height={} min={} max={} offset={}",
            state.height, state.min, state.max, state.offset
        );
    }

    fn dispatch_resize(&mut self) {
        println!("resize");
    }
}

fn main() {
    let mut page = SimPage {
        viewport_height: 620,
        ..SimPage::default()
    };
    let mut detector = Detector::new(DetectorOptions::new().with_fire_resize(true));

    // Startup: perturb the page so the first measurement is accurate.
    detector.init(&mut page, 0).expect("detector is enabled");
    detector.on_scroll(&mut page); // scroll signal from the perturbation
    detector.poll(&mut page, 2); // restore fires after the minimal delay
    println!("bootstrap: {:?}, markers={:?}", detector.bootstrap_phase(), page.markers);

    // User scrolls down: the address bar hides and the viewport grows.
    page.viewport_height = 680;
    detector.on_scroll(&mut page);
    println!("after hide: {:?}, markers={:?}", detector.visibility(), page.markers);

    // User scrolls back up: the bar reappears.
    page.viewport_height = 620;
    detector.on_scroll(&mut page);
    println!("after show: {:?}, markers={:?}", detector.visibility(), page.markers);
}
