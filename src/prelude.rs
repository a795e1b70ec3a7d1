//! Prelude module for common pinmap types
//!
//! Re-exports the most commonly used types for easy importing with
//! `use pinmap::prelude::*;`

pub use crate::core::{
    bounds::GeoBounds,
    config::{CaptureConfig, MapConfig, MarkerStyle},
    geo::{GeoPoint, Point, RenderSize},
    projector::Projector,
};

pub use crate::layers::marker::{MarkerLayer, MarkerPlacement};

pub use crate::data::fetch::{FetchOutcome, PointsRequest};

pub use crate::geolocate::{
    CaptureOutcome, CaptureRecord, CaptureRequest, FixedPositionSource, GeolocateError,
    GeolocateOptions, Notice, PositionFix, PositionSource, ScheduleInput,
};

#[cfg(feature = "egui")]
pub use crate::ui::{panel::CapturePanel, widget::MapView};

pub use crate::{Error, Result};
