//! Filtering and ranking of nearby candidates.

use log::debug;

use super::error::Result;
use super::types::{Candidate, ProximityResult, ProximitySettings};
use crate::geo::{distance_meters, GeoPoint};

/// Outcome of one scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanReport<'a> {
    /// Candidates within the radius, nearest first.
    pub results: Vec<ProximityResult<'a>>,
    /// How many candidates were measured. Zero when no observer was known.
    pub evaluated: usize,
}

impl ScanReport<'_> {
    /// Whether anyone was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of candidates found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }
}

/// Returns the candidates within `radius_meters` of `observer`.
///
/// With no observer the scan is a no-op: nothing is measured and the report
/// is empty. Otherwise each candidate is kept iff its haversine distance is
/// `<= radius_meters`. Results are sorted nearest first; equal distances
/// keep their input order.
///
/// The inputs are only borrowed, so repeated calls give identical reports.
///
/// # Examples
///
/// ```
/// use stage_core::geo::GeoPoint;
/// use stage_core::proximity::{scan, Candidate};
///
/// let observer = GeoPoint::new(43.6047, 1.4442).unwrap();
/// let candidates = vec![
///     Candidate::new("1", "Emma Dupont", "Collège Victor Hugo", "3ème", observer),
///     Candidate::new(
///         "2",
///         "Lucas Moreau",
///         "Collège Jean Moulin",
///         "3ème",
///         GeoPoint::new(43.6037, 1.4432).unwrap(),
///     ),
/// ];
///
/// let report = scan(Some(observer), &candidates, 30.0);
/// assert_eq!(report.evaluated, 2);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.results[0].candidate.id, "1");
///
/// assert!(scan(None, &candidates, 30.0).is_empty());
/// ```
#[must_use]
pub fn scan(
    observer: Option<GeoPoint>,
    candidates: &[Candidate],
    radius_meters: f64,
) -> ScanReport<'_> {
    let Some(observer) = observer else {
        debug!("Scan skipped: observer position not available");
        return ScanReport::default();
    };

    let mut results: Vec<ProximityResult<'_>> = candidates
        .iter()
        .filter_map(|candidate| {
            let distance = distance_meters(observer, candidate.position);
            (distance <= radius_meters).then_some(ProximityResult {
                candidate,
                distance_meters: distance,
            })
        })
        .collect();

    results.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));

    debug!(
        "Scan from {observer}: {} of {} candidate(s) within {radius_meters} m",
        results.len(),
        candidates.len()
    );

    ScanReport {
        results,
        evaluated: candidates.len(),
    }
}

/// Scanner bound to validated [`ProximitySettings`].
#[derive(Debug, Clone, Default)]
pub struct ProximityScanner {
    settings: ProximitySettings,
}

impl ProximityScanner {
    /// Creates a scanner.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::InvalidRadius`](super::ProximityError::InvalidRadius)
    /// if the radius is negative or not finite.
    pub fn new(settings: ProximitySettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// The settings in use.
    #[must_use]
    pub const fn settings(&self) -> &ProximitySettings {
        &self.settings
    }

    /// Scans `candidates` around `observer` using the configured radius.
    #[must_use]
    pub fn scan<'a>(&self, observer: Option<GeoPoint>, candidates: &'a [Candidate]) -> ScanReport<'a> {
        scan(observer, candidates, self.settings.radius_meters)
    }
}
