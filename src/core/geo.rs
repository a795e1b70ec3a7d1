use serde::{Deserialize, Serialize};

/// A single latitude/longitude pair received verbatim from the location
/// service. Points have no identity beyond their values; the fetch order is
/// preserved and used only for stable marker ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new GeoPoint
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Coordinate label rounded to 4 decimal places, e.g. `"35.5000, 136.0000"`.
    /// Shown as the marker tooltip.
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A pixel offset in the rendered image's coordinate space, origin top-left.
/// Recomputed every render pass; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// The live rendered dimensions of the background image. Re-read from the
/// displayed rect on every pass, so layout changes are picked up without any
/// long-lived listener.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSize {
    pub width: f64,
    pub height: f64,
}

impl RenderSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Markers are produced only once the width is positive; placing against
    /// a zero-sized image during initial layout is meaningless.
    pub fn is_renderable(&self) -> bool {
        self.width > 0.0
    }

    /// Checks whether a pixel offset lies within the rendered area.
    /// Boundary values are in-bounds (inclusive range on all four edges).
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

impl Default for RenderSize {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
