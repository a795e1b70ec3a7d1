//! Configuration for the map view and the capture feature.
//!
//! Everything here is an explicit value handed to the components that need
//! it. In particular the bounding box is part of the configuration rather
//! than a module-level global, so tests can run against alternate extents.

use crate::core::bounds::GeoBounds;
use crate::core::constants;
use crate::geolocate::provider::GeolocateOptions;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration for a map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Geographic extent of the background image.
    pub bounds: GeoBounds,
    /// Location service endpoint for the one-shot points fetch.
    pub points_endpoint: String,
    /// Upper limit on the rendered image width.
    pub max_display_width: f32,
    /// Marker appearance.
    pub marker: MarkerStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            bounds: constants::JAPAN_BOUNDS,
            points_endpoint: constants::DEFAULT_POINTS_ENDPOINT.to_string(),
            max_display_width: constants::MAX_DISPLAY_WIDTH,
            marker: MarkerStyle::default(),
        }
    }
}

impl MapConfig {
    /// Startup validation. A degenerate bounding box would poison every
    /// projection with NaN/Infinity, so it is rejected here before any
    /// rendering happens.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if self.points_endpoint.is_empty() {
            return Err(crate::Error::Config(
                "points_endpoint must not be empty".to_string(),
            ));
        }
        if !(self.max_display_width > 0.0) {
            return Err(crate::Error::Config(format!(
                "max_display_width must be positive, got {}",
                self.max_display_width
            )));
        }
        Ok(())
    }
}

/// Marker appearance. Colors are plain RGB so the core stays independent of
/// the UI stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius: f32,
    pub ring_width: f32,
    /// Dot color for fetched points.
    pub color: (u8, u8, u8),
    /// Dot color for the captured current fix.
    pub accent_color: (u8, u8, u8),
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: constants::MARKER_RADIUS,
            ring_width: constants::MARKER_RING_WIDTH,
            color: (220, 20, 60),
            accent_color: (30, 144, 255),
        }
    }
}

/// Options for the one-shot position capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Maximum acceptable age of a cached fix. Zero means the source must
    /// produce a fresh reading.
    pub maximum_age: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: constants::CAPTURE_TIMEOUT,
            maximum_age: Duration::ZERO,
        }
    }
}

impl CaptureConfig {
    /// The options handed to the position source.
    pub fn options(&self) -> GeolocateOptions {
        GeolocateOptions {
            enable_high_accuracy: self.enable_high_accuracy,
            timeout: self.timeout,
            maximum_age: self.maximum_age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MapConfig::default().validate().is_ok());
    }

    #[test]
    fn test_degenerate_bounds_rejected_at_startup() {
        let config = MapConfig {
            bounds: GeoBounds::from_coords(46.0, 46.0, 122.0, 150.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let config = MapConfig {
            points_endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_capture_defaults() {
        let capture = CaptureConfig::default();
        assert!(capture.enable_high_accuracy);
        assert_eq!(capture.timeout, Duration::from_secs(10));
        assert_eq!(capture.maximum_age, Duration::ZERO);
    }
}
