//! # pinmap
//!
//! A small presentation layer for a fixed-extent map: a static raster image
//! with point markers placed through a linear bounding-box projection, plus
//! an optional one-shot position capture tied to a scheduled end time.
//!
//! The library is split into a pure projection core, a marker layer, the
//! point fetch, the geolocation capability, and (behind the `egui` feature)
//! the immediate-mode widgets that put it all on screen.

pub mod core;
pub mod data;
pub mod geolocate;
pub mod layers;
pub mod prelude;
#[cfg(feature = "egui")]
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::GeoBounds,
    config::{CaptureConfig, MapConfig, MarkerStyle},
    geo::{GeoPoint, Point, RenderSize},
    projector::Projector,
};

pub use crate::layers::marker::{MarkerLayer, MarkerPlacement};

pub use crate::data::fetch::{FetchOutcome, PointsRequest};

pub use crate::geolocate::{
    capture::{CaptureRequest, Notice, ScheduleInput},
    provider::{FixedPositionSource, GeolocateError, GeolocateOptions, PositionFix, PositionSource},
};

#[cfg(feature = "egui")]
pub use crate::ui::{panel::CapturePanel, widget::MapView};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP status {0}")]
    Status(u16),
}
