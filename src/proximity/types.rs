//! Proximity data types.

use serde::{Deserialize, Serialize};

use super::acquisition::AcquisitionOptions;
use super::error::{ProximityError, Result};
use crate::geo::GeoPoint;

/// Default discovery radius in meters.
pub const DEFAULT_RADIUS_METERS: f64 = 30.0;

/// Another student's geolocated profile, tested against the observer.
///
/// Candidates are supplied by the caller and never modified by a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable identifier, the only identity carried across scans.
    pub id: String,
    /// Display name.
    pub name: String,
    /// School or other affiliation.
    pub school: String,
    /// School year (e.g. "3ème", "2nde").
    pub level: String,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Last known position.
    #[serde(flatten)]
    pub position: GeoPoint,
    /// Interest tags.
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Candidate {
    /// Creates a candidate with no avatar and no interests.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        school: impl Into<String>,
        level: impl Into<String>,
        position: GeoPoint,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            school: school.into(),
            level: level.into(),
            avatar: None,
            position,
            interests: Vec::new(),
        }
    }

    /// Adds interest tags.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.extend(interests.into_iter().map(Into::into));
        self
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Initials of the display name, used when no avatar is set.
    ///
    /// ```
    /// use stage_core::geo::GeoPoint;
    /// use stage_core::proximity::Candidate;
    ///
    /// let point = GeoPoint::new(43.6, 1.44).unwrap();
    /// let emma = Candidate::new("1", "Emma Dupont", "Collège Victor Hugo", "3ème", point);
    /// assert_eq!(emma.initials(), "ED");
    /// ```
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// A candidate annotated with its distance from the observer.
///
/// Built fresh by every scan and never reused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityResult<'a> {
    /// The matched candidate.
    pub candidate: &'a Candidate,
    /// Haversine distance from the observer in meters.
    pub distance_meters: f64,
}

impl ProximityResult<'_> {
    /// Distance rounded to whole meters for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn display_distance(&self) -> u32 {
        // Bounded by half the Earth's circumference, well within u32.
        self.distance_meters.round() as u32
    }
}

/// Settings for nearby-peer discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximitySettings {
    /// Discovery radius in meters (inclusive).
    pub radius_meters: f64,

    /// Options passed to the location source.
    #[serde(default)]
    pub acquisition: AcquisitionOptions,
}

impl Default for ProximitySettings {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
            acquisition: AcquisitionOptions::default(),
        }
    }
}

impl ProximitySettings {
    /// Creates settings with a custom radius and default acquisition options.
    #[must_use]
    pub fn with_radius(radius_meters: f64) -> Self {
        Self {
            radius_meters,
            ..Self::default()
        }
    }

    /// Checks that the radius is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::InvalidRadius`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.radius_meters.is_finite() && self.radius_meters >= 0.0 {
            Ok(())
        } else {
            Err(ProximityError::InvalidRadius(self.radius_meters))
        }
    }

    /// Parses and validates settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the radius is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Converts these settings to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
