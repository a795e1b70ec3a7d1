//! Wire format of the location service.
//!
//! The service answers `GET /locations/latlng` with a JSON array of
//! `{"latitude": n, "longitude": n}` objects. No query parameters, no
//! pagination; array order is preserved as received.

use crate::core::geo::GeoPoint;
use crate::Result;

/// Decodes a response body into the ordered point list.
pub fn decode(body: &[u8]) -> Result<Vec<GeoPoint>> {
    let points: Vec<GeoPoint> = serde_json::from_slice(body)?;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_point_array() {
        let body = br#"[
            {"latitude": 35.6762, "longitude": 139.6503},
            {"latitude": 43.0618, "longitude": 141.3545}
        ]"#;

        let points = decode(body).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], GeoPoint::new(35.6762, 139.6503));
        assert_eq!(points[1], GeoPoint::new(43.0618, 141.3545));
    }

    #[test]
    fn test_decode_empty_array() {
        let points = decode(b"[]").unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_decode_preserves_order() {
        let body = br#"[
            {"latitude": 3.0, "longitude": 3.0},
            {"latitude": 1.0, "longitude": 1.0},
            {"latitude": 2.0, "longitude": 2.0}
        ]"#;

        let points = decode(body).unwrap();
        let lats: Vec<f64> = points.iter().map(|p| p.latitude).collect();
        assert_eq!(lats, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        assert!(decode(b"<html>502</html>").is_err());
        assert!(decode(br#"{"latitude": 1.0}"#).is_err());
        assert!(decode(br#"[{"latitude": 1.0}]"#).is_err());
    }
}
