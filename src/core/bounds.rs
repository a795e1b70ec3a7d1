use crate::core::geo::GeoPoint;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// The fixed geographic rectangle the background image depicts, described by
/// minimum and maximum latitude and longitude. Configured once at startup
/// and never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Creates bounds from individual coordinates
    pub fn from_coords(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Rejects degenerate bounds. A zero or negative span would divide by
    /// zero in the projection, so this is checked once at startup instead of
    /// on every call.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_lat > self.min_lat) {
            return Err(Error::InvalidBounds(format!(
                "latitude span must be positive (min_lat={}, max_lat={})",
                self.min_lat, self.max_lat
            )));
        }
        if !(self.max_lon > self.min_lon) {
            return Err(Error::InvalidBounds(format!(
                "longitude span must be positive (min_lon={}, max_lon={})",
                self.min_lon, self.max_lon
            )));
        }
        Ok(())
    }

    /// Gets the latitude span of the bounds
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Gets the longitude span of the bounds
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Checks whether a point lies within the bounds
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
            && point.longitude >= self.min_lon
            && point.longitude <= self.max_lon
    }
}
