//! Great-circle distance using the haversine formula.

use super::point::GeoPoint;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Computes the haversine distance in meters between two points.
///
/// The result is non-negative, exactly zero for identical points and
/// symmetric in its arguments. Longitude wraparound at ±180° needs no special
/// handling since only trigonometric differences are used.
///
/// # Examples
///
/// ```
/// use stage_core::geo::{distance_meters, GeoPoint};
///
/// let a = GeoPoint::new(43.6047, 1.4442).unwrap();
/// assert_eq!(distance_meters(a, a), 0.0);
///
/// let west = GeoPoint::new(0.0, 179.9999).unwrap();
/// let east = GeoPoint::new(0.0, -179.9999).unwrap();
/// assert!(distance_meters(west, east) < 25.0);
/// ```
#[must_use]
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    // Absolute deltas keep the result bit-identical when a and b are swapped.
    let delta_lat = (b.latitude() - a.latitude()).abs().to_radians();
    let delta_lon = (b.longitude() - a.longitude()).abs().to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lon = (delta_lon / 2.0).sin();
    let h = sin_lon.mul_add(sin_lon * (lat1.cos() * lat2.cos()), sin_lat * sin_lat);

    // Rounding can push h slightly past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Returns whether `b` lies within `radius_meters` of `a` (inclusive).
///
/// A negative or NaN radius never matches, not even for coincident points.
///
/// # Examples
///
/// ```
/// use stage_core::geo::{is_within_range, GeoPoint};
///
/// let a = GeoPoint::new(43.6047, 1.4442).unwrap();
/// let b = GeoPoint::new(43.6049, 1.4442).unwrap();
///
/// assert!(is_within_range(a, b, 30.0));
/// assert!(!is_within_range(a, b, 0.0));
/// ```
#[must_use]
pub fn is_within_range(a: GeoPoint, b: GeoPoint, radius_meters: f64) -> bool {
    distance_meters(a, b) <= radius_meters
}
