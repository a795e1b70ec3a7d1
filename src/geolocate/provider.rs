use chrono::{DateTime, Utc};
use std::time::Duration;

/// Options for a single position request, mirroring the common platform
/// geolocation APIs.
#[derive(Debug, Clone, PartialEq)]
pub struct GeolocateOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Maximum acceptable age of a cached fix; zero forces a fresh reading.
    pub maximum_age: Duration,
}

impl Default for GeolocateOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

/// A single position reading. Altitude, heading and speed are frequently
/// absent depending on the source hardware.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy radius in meters.
    pub accuracy: f64,
    pub altitude: Option<f64>,
    pub heading: Option<f64>,
    pub speed: Option<f64>,
    /// When the fix was taken, as reported by the source.
    pub timestamp: DateTime<Utc>,
}

/// Failure modes of a position request. The first three correspond to the
/// standard platform error codes; everything else collapses into `Other`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeolocateError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("position request timed out")]
    Timeout,

    #[error("geolocation error: {0}")]
    Other(String),
}

impl GeolocateError {
    /// Maps a platform error code (1 = permission denied, 2 = unavailable,
    /// 3 = timeout) to the matching variant; unknown codes become `Other`.
    pub fn from_code(code: u16, detail: impl Into<String>) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Other(detail.into()),
        }
    }

    /// The user-facing notice text for this failure. One distinct message
    /// per standard error condition, one generic fallback.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "Location permission is required (permission denied).",
            Self::PositionUnavailable => "Your location could not be determined (position unavailable).",
            Self::Timeout => "The location request timed out.",
            Self::Other(_) => "An unknown error occurred while reading your location.",
        }
    }
}

/// The platform capability seam: anything that can produce a single position
/// fix on demand. Absence of a source means the environment does not support
/// location capture at all.
pub trait PositionSource: Send + Sync {
    /// Requests one fix, honoring the given options. The source is expected
    /// to enforce `options.timeout` itself.
    fn current_position(
        &self,
        options: &GeolocateOptions,
    ) -> std::result::Result<PositionFix, GeolocateError>;
}

/// A deterministic source returning a pre-configured outcome. Backs tests
/// and the demo app; a real deployment plugs a platform backend into
/// [`PositionSource`] instead.
#[derive(Debug, Clone)]
pub struct FixedPositionSource {
    outcome: std::result::Result<PositionFix, GeolocateError>,
}

impl FixedPositionSource {
    pub fn ok(fix: PositionFix) -> Self {
        Self { outcome: Ok(fix) }
    }

    pub fn err(error: GeolocateError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl PositionSource for FixedPositionSource {
    fn current_position(
        &self,
        _options: &GeolocateOptions,
    ) -> std::result::Result<PositionFix, GeolocateError> {
        self.outcome.clone()
    }
}
