//! Validated latitude/longitude pairs.

use serde::{Deserialize, Serialize};

use super::error::{GeoError, Result};

/// A point on the Earth's surface in decimal degrees.
///
/// Values are validated on construction and cannot be changed afterwards,
/// so every `GeoPoint` in circulation is finite and in range. Deserialization
/// goes through the same checks.
///
/// # Example
///
/// ```
/// use stage_core::geo::GeoPoint;
///
/// let toulouse = GeoPoint::new(43.6047, 1.4442).unwrap();
/// assert_eq!(toulouse.latitude(), 43.6047);
///
/// assert!(GeoPoint::new(f64::NAN, 1.4442).is_err());
/// assert!(GeoPoint::new(43.6047, 180.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Creates a point, rejecting NaN, infinite and out-of-range components.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidCoordinate`] if latitude is not within
    /// `-90.0..=90.0` or longitude is not within `-180.0..=180.0`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidCoordinate {
                field: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidCoordinate {
                field: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
