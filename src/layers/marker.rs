use crate::core::geo::{GeoPoint, Point, RenderSize};
use crate::core::projector::Projector;

/// Marker data for the map view: the fetched points plus, optionally, the
/// most recently captured position fix shown as a highlighted marker.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    points: Vec<GeoPoint>,
    current_fix: Option<GeoPoint>,
}

/// One marker resolved to a pixel offset for the current render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlacement {
    pub pixel: Point,
    /// Source coordinate rounded to 4 decimal places, shown on hover.
    pub tooltip: String,
    /// True for the captured current fix, drawn in the accent color.
    pub is_current_fix: bool,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the point set wholesale with a fresh fetch result. Results
    /// are never merged or appended.
    pub fn set_points(&mut self, points: Vec<GeoPoint>) {
        self.points = points;
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Sets or clears the captured current fix marker.
    pub fn set_current_fix(&mut self, fix: Option<GeoPoint>) {
        self.current_fix = fix;
    }

    pub fn current_fix(&self) -> Option<&GeoPoint> {
        self.current_fix.as_ref()
    }

    /// Resolves every marker to a pixel offset for this pass.
    ///
    /// Returns nothing while the rendered width is still zero (initial
    /// layout). Placements strictly outside `[0,width]×[0,height]` are
    /// skipped; offsets exactly on an edge are kept.
    pub fn placements(&self, projector: &Projector, size: RenderSize) -> Vec<MarkerPlacement> {
        if !size.is_renderable() {
            return Vec::new();
        }

        let project = |point: &GeoPoint, is_current_fix: bool| {
            let pixel = projector.project(point, size);
            if !size.contains(&pixel) {
                return None;
            }
            Some(MarkerPlacement {
                pixel,
                tooltip: point.label(),
                is_current_fix,
            })
        };

        let mut placements: Vec<MarkerPlacement> = self
            .points
            .iter()
            .filter_map(|p| project(p, false))
            .collect();
        if let Some(fix) = &self.current_fix {
            placements.extend(project(fix, true));
        }
        placements
    }
}
