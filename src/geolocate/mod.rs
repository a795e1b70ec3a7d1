//! One-shot geolocation: a platform capability seam plus the capture flow
//! that validates user input, normalizes the scheduled end time to UTC and
//! logs the captured reading.

pub mod capture;
pub mod provider;

pub use capture::{CaptureOutcome, CaptureRecord, CaptureRequest, Notice, ScheduleInput};
pub use provider::{
    FixedPositionSource, GeolocateError, GeolocateOptions, PositionFix, PositionSource,
};
