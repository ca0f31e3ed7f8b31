//! Nearby-peer discovery for Stage.
//!
//! Combines the observer's position with a list of [`Candidate`]s and keeps
//! those within a radius (30 m by default), annotated with their real
//! haversine distance.
//!
//! # Architecture
//!
//! ```text
//! LocationSource (platform, external)
//!     └── acquire() ──▶ LocationState (reducer)
//!                           └── observer ──▶ scan() ──▶ ScanReport
//! ```
//!
//! Scanning is synchronous and pure. The only await point is [`acquire`],
//! which is bounded by [`AcquisitionOptions::timeout`] and never retries.

pub mod acquisition;
mod error;
mod scanner;
pub mod types;

pub use acquisition::{
    acquire, AcquisitionOptions, LocationEvent, LocationFailure, LocationSource, LocationState,
};
pub use error::{ProximityError, Result};
pub use scanner::{scan, ProximityScanner, ScanReport};
pub use types::{Candidate, ProximityResult, ProximitySettings, DEFAULT_RADIUS_METERS};
