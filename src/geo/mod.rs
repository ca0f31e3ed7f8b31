//! Geographic primitives for Stage.
//!
//! Provides validated coordinates and great-circle distance:
//! - [`GeoPoint`]: a latitude/longitude pair checked at construction
//! - [`distance_meters`]: haversine distance on a sphere of Earth's mean radius
//! - [`is_within_range`]: inclusive radius test built on [`distance_meters`]
//!
//! # Example Usage
//!
//! ```
//! use stage_core::geo::{distance_meters, is_within_range, GeoPoint};
//!
//! let observer = GeoPoint::new(43.6047, 1.4442).unwrap();
//! let peer = GeoPoint::new(43.6037, 1.4432).unwrap();
//!
//! let meters = distance_meters(observer, peer);
//! assert!(meters > 130.0 && meters < 140.0);
//! assert!(!is_within_range(observer, peer, 30.0));
//! ```

mod distance;
mod error;
mod point;

pub use distance::{distance_meters, is_within_range, EARTH_RADIUS_METERS};
pub use error::{GeoError, Result};
pub use point::GeoPoint;
