use crate::core::bounds::GeoBounds;
use crate::core::geo::{GeoPoint, Point, RenderSize};
use crate::Result;

/// Projects geographic coordinates onto the rendered image through a linear
/// (affine) interpolation against the fixed bounding box, independently per
/// axis. This is the flat transform of a pre-rendered regional image, not a
/// map projection: no Mercator, no curvature correction.
///
/// The projector performs no clamping. Coordinates outside the bounding box
/// produce offsets outside `[0,width]×[0,height]`, which callers filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    bounds: GeoBounds,
}

impl Projector {
    /// Creates a projector over validated bounds. Degenerate bounds (zero or
    /// negative span on either axis) are a configuration error and are
    /// rejected here, so `project` itself can never divide by zero.
    pub fn new(bounds: GeoBounds) -> Result<Self> {
        bounds.validate()?;
        Ok(Self { bounds })
    }

    /// The bounding box this projector maps from.
    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }

    /// Maps a geographic coordinate to a pixel offset within the rendered
    /// size, origin top-left.
    ///
    /// Longitude increases rightward; latitude increases upward in geography
    /// but downward in screen coordinates, hence the inverted vertical
    /// fraction.
    pub fn project(&self, point: &GeoPoint, size: RenderSize) -> Point {
        let x_norm = (point.longitude - self.bounds.min_lon) / self.bounds.lon_span();
        let y_norm = (self.bounds.max_lat - point.latitude) / self.bounds.lat_span();
        Point::new(x_norm * size.width, y_norm * size.height)
    }

    /// The algebraic inverse of [`project`](Self::project). Degenerate sizes
    /// return the bounds' top-left corner rather than NaN.
    pub fn unproject(&self, pixel: &Point, size: RenderSize) -> GeoPoint {
        let x_norm = if size.width > 0.0 {
            pixel.x / size.width
        } else {
            0.0
        };
        let y_norm = if size.height > 0.0 {
            pixel.y / size.height
        } else {
            0.0
        };
        GeoPoint::new(
            self.bounds.max_lat - y_norm * self.bounds.lat_span(),
            self.bounds.min_lon + x_norm * self.bounds.lon_span(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn japan_projector() -> Projector {
        Projector::new(GeoBounds::from_coords(25.0, 46.0, 122.0, 150.0)).unwrap()
    }

    const SIZE: RenderSize = RenderSize {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_edges_map_to_edges() {
        let projector = japan_projector();

        // min_lat lands on the bottom edge, max_lat on the top edge
        let south = projector.project(&GeoPoint::new(25.0, 136.0), SIZE);
        assert_eq!(south.y, 600.0);
        let north = projector.project(&GeoPoint::new(46.0, 136.0), SIZE);
        assert_eq!(north.y, 0.0);

        // min_lon lands on the left edge, max_lon on the right edge
        let west = projector.project(&GeoPoint::new(35.0, 122.0), SIZE);
        assert_eq!(west.x, 0.0);
        let east = projector.project(&GeoPoint::new(35.0, 150.0), SIZE);
        assert_eq!(east.x, 800.0);
    }

    #[test]
    fn test_reference_scenario() {
        // bounds {25,46,122,150}, 800x600, point (35.5, 136) -> (400, 300)
        let projector = japan_projector();
        let offset = projector.project(&GeoPoint::new(35.5, 136.0), SIZE);

        assert!((offset.x - 400.0).abs() < 1e-9);
        assert!((offset.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_linearity_in_render_size() {
        let projector = japan_projector();
        let point = GeoPoint::new(33.3, 141.7);

        let base = projector.project(&point, SIZE);
        let doubled = projector.project(&point, RenderSize::new(1600.0, 1200.0));

        assert_eq!(doubled.x, base.x * 2.0);
        assert_eq!(doubled.y, base.y * 2.0);
    }

    #[test]
    fn test_idempotence() {
        let projector = japan_projector();
        let point = GeoPoint::new(38.2684, 140.8694);

        let first = projector.project(&point, SIZE);
        let second = projector.project(&point, SIZE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_bounds_passes_through_unclamped() {
        let projector = japan_projector();

        // North of the box: negative y, no clamping
        let north = projector.project(&GeoPoint::new(60.0, 136.0), SIZE);
        assert!(north.y < 0.0);

        // West of the box: negative x
        let west = projector.project(&GeoPoint::new(35.0, 100.0), SIZE);
        assert!(west.x < 0.0);
    }

    #[test]
    fn test_unproject_inverts_project() {
        let projector = japan_projector();
        let point = GeoPoint::new(35.6762, 139.6503);

        let pixel = projector.project(&point, SIZE);
        let back = projector.unproject(&pixel, SIZE);

        assert!((back.latitude - point.latitude).abs() < 1e-9);
        assert!((back.longitude - point.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_bounds_fail_at_construction() {
        assert!(Projector::new(GeoBounds::from_coords(25.0, 25.0, 122.0, 150.0)).is_err());
        assert!(Projector::new(GeoBounds::from_coords(25.0, 46.0, 122.0, 122.0)).is_err());
    }
}
