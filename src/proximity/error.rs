//! Error types for proximity discovery.

use thiserror::Error;

use super::acquisition::LocationFailure;
use crate::geo::GeoError;

/// Error type for proximity operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProximityError {
    /// A coordinate could not be turned into a [`GeoPoint`](crate::geo::GeoPoint).
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// The configured search radius is negative or not finite.
    #[error("Invalid radius: {0} m")]
    InvalidRadius(f64),

    /// The observer's position could not be acquired.
    #[error("Location unavailable: {0}")]
    Unavailable(LocationFailure),

    /// Settings could not be parsed or written.
    #[error("Invalid settings: {0}")]
    Settings(String),
}

/// Result type alias for proximity operations.
pub type Result<T> = std::result::Result<T, ProximityError>;

impl From<LocationFailure> for ProximityError {
    fn from(failure: LocationFailure) -> Self {
        Self::Unavailable(failure)
    }
}

impl From<serde_json::Error> for ProximityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Settings(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_radius_display() {
        let err = ProximityError::InvalidRadius(-5.0);
        assert_eq!(err.to_string(), "Invalid radius: -5 m");
    }

    #[test]
    fn geo_error_is_transparent() {
        let err: ProximityError = GeoError::InvalidCoordinate {
            field: "latitude",
            value: 100.0,
        }
        .into();
        assert_eq!(err.to_string(), "Invalid coordinate: latitude = 100");
    }

    #[test]
    fn unavailable_display_includes_reason() {
        let err: ProximityError = LocationFailure::Timeout.into();
        assert_eq!(
            err.to_string(),
            "Location unavailable: Timed out waiting for a position fix"
        );
    }

    #[test]
    fn settings_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ProximityError = json_err.into();
        assert!(err.to_string().starts_with("Invalid settings:"));
    }
}
