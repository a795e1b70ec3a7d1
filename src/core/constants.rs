//! Fixed defaults in a single place, so the handful of magic numbers the
//! view depends on are easy to audit and tweak.

use crate::core::bounds::GeoBounds;
use std::time::Duration;

/// Geographic extent the bundled background image depicts: Japan, roughly
/// from Okinawa in the south to Hokkaido in the north.
pub const JAPAN_BOUNDS: GeoBounds = GeoBounds {
    min_lat: 25.0,
    max_lat: 46.0,
    min_lon: 122.0,
    max_lon: 150.0,
};

/// Default location service endpoint returning the JSON array of points.
pub const DEFAULT_POINTS_ENDPOINT: &str = "http://localhost:8000/locations/latlng";

/// Maximum rendered width of the map image in pixels; the image scales down
/// with the container below this.
pub const MAX_DISPLAY_WIDTH: f32 = 800.0;

/// Marker dot radius in pixels (10 px diameter dot).
pub const MARKER_RADIUS: f32 = 5.0;

/// Width of the light ring drawn around each marker dot.
pub const MARKER_RING_WIDTH: f32 = 2.0;

/// How long a one-shot position request may take before the source reports
/// a timeout.
pub const CAPTURE_TIMEOUT: Duration = Duration::from_secs(10);
