//! Observer location acquisition.
//!
//! The platform's location service is an external collaborator, modelled by
//! [`LocationSource`]. This module owns the state around it:
//!
//! ```text
//! Idle ──Requested──▶ Acquiring ──Resolved──▶ Available
//!                         │                      │
//!                         └──────Failed──────▶ Unavailable
//! ```
//!
//! [`LocationState::reduce`] is a pure transition function, and [`acquire`]
//! awaits a single fix under the caller's timeout. Nothing here retries; a
//! rescan is always a new `Requested` event from the caller.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Default time to wait for a position fix.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default age after which a cached fix must be refreshed.
pub const DEFAULT_MAXIMUM_AGE: Duration = Duration::from_secs(60);

/// Why the observer's position could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFailure {
    /// The platform has no location service.
    NotSupported,
    /// The user refused location access.
    PermissionDenied,
    /// The location service could not determine a position.
    PositionUnavailable(String),
    /// No fix arrived before the timeout elapsed.
    Timeout,
}

impl LocationFailure {
    /// Maps a W3C geolocation error code (1, 2, 3) to a failure.
    #[must_use]
    pub fn from_code(code: u16, message: impl Into<String>) -> Option<Self> {
        match code {
            1 => Some(Self::PermissionDenied),
            2 => Some(Self::PositionUnavailable(message.into())),
            3 => Some(Self::Timeout),
            _ => None,
        }
    }
}

impl std::fmt::Display for LocationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSupported => write!(f, "Geolocation is not supported on this device"),
            Self::PermissionDenied => write!(f, "Location permission was denied"),
            Self::PositionUnavailable(reason) => write!(f, "Position unavailable: {reason}"),
            Self::Timeout => write!(f, "Timed out waiting for a position fix"),
        }
    }
}

impl std::error::Error for LocationFailure {}

/// Options handed to the location source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionOptions {
    /// Ask for the most precise fix the platform can give.
    pub high_accuracy: bool,

    /// Upper bound on the wait for a fix.
    #[serde(with = "millis", rename = "timeout_ms")]
    pub timeout: Duration,

    /// A previous fix younger than this may be reused.
    #[serde(with = "millis", rename = "maximum_age_ms")]
    pub maximum_age: Duration,
}

impl Default for AcquisitionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_TIMEOUT,
            maximum_age: DEFAULT_MAXIMUM_AGE,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// A source of observer positions, typically the platform's location service.
pub trait LocationSource {
    /// Resolves the current position or reports why it cannot.
    fn current_position(
        &self,
        options: &AcquisitionOptions,
    ) -> impl Future<Output = Result<GeoPoint, LocationFailure>> + Send;
}

/// Inputs to the acquisition state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// The caller asked for a (new) fix.
    Requested,
    /// The source produced a position.
    Resolved(GeoPoint),
    /// The source failed or timed out.
    Failed(LocationFailure),
    /// Back to the initial state, e.g. when the view is closed.
    Reset,
}

/// Acquisition state of the observer's position.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Waiting on the location source.
    Acquiring,
    /// A position is known.
    Available(GeoPoint),
    /// Acquisition failed; the reason is shown to the user.
    Unavailable(LocationFailure),
}

impl LocationState {
    /// Applies an event and returns the next state.
    ///
    /// Results are only accepted while a fix is outstanding or already
    /// available (position watches keep reporting after the first fix).
    /// Stray results in `Idle` or `Unavailable` leave the state unchanged.
    ///
    /// ```
    /// use stage_core::geo::GeoPoint;
    /// use stage_core::proximity::{LocationEvent, LocationState};
    ///
    /// let here = GeoPoint::new(43.6047, 1.4442).unwrap();
    /// let state = LocationState::Idle
    ///     .reduce(LocationEvent::Requested)
    ///     .reduce(LocationEvent::Resolved(here));
    /// assert_eq!(state.observer(), Some(here));
    /// ```
    #[must_use]
    pub fn reduce(self, event: LocationEvent) -> Self {
        let next = match (self, event) {
            (_, LocationEvent::Reset) => Self::Idle,
            (_, LocationEvent::Requested) => Self::Acquiring,
            (Self::Acquiring | Self::Available(_), LocationEvent::Resolved(point)) => {
                Self::Available(point)
            }
            (Self::Acquiring | Self::Available(_), LocationEvent::Failed(failure)) => {
                Self::Unavailable(failure)
            }
            (state, _) => state,
        };
        debug!("Location state -> {}", next.label());
        next
    }

    /// The observer position, if one is available.
    #[must_use]
    pub const fn observer(&self) -> Option<GeoPoint> {
        match self {
            Self::Available(point) => Some(*point),
            _ => None,
        }
    }

    /// The failure reason, if acquisition failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&LocationFailure> {
        match self {
            Self::Unavailable(failure) => Some(failure),
            _ => None,
        }
    }

    /// Whether a fix is outstanding.
    #[must_use]
    pub const fn is_acquiring(&self) -> bool {
        matches!(self, Self::Acquiring)
    }

    /// Short lowercase name of the state.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Acquiring => "acquiring",
            Self::Available(_) => "available",
            Self::Unavailable(_) => "unavailable",
        }
    }
}

/// Awaits one position from `source`, bounded by `options.timeout`.
///
/// # Errors
///
/// Returns the source's [`LocationFailure`], or [`LocationFailure::Timeout`]
/// if no fix arrives in time. Failures are never retried.
pub async fn acquire<S: LocationSource>(
    source: &S,
    options: &AcquisitionOptions,
) -> Result<GeoPoint, LocationFailure> {
    match tokio::time::timeout(options.timeout, source.current_position(options)).await {
        Ok(Ok(point)) => {
            debug!("Acquired observer position {point}");
            Ok(point)
        }
        Ok(Err(failure)) => {
            warn!("Location source failed: {failure}");
            Err(failure)
        }
        Err(_) => {
            warn!("No position fix after {:?}", options.timeout);
            Err(LocationFailure::Timeout)
        }
    }
}
