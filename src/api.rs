//! Entry point used by the client shell.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::geo::GeoPoint;
use crate::proximity::{
    acquire, Candidate, LocationEvent, LocationSource, LocationState, ProximityError,
    ProximityScanner, ProximitySettings, Result, ScanReport,
};

/// Core interface for Stage functionality.
///
/// Owns the proximity settings and the observer's acquisition state. The
/// client shell feeds it positions and candidate lists; nothing is kept in
/// globals.
#[derive(Debug, Default)]
pub struct StageCore {
    scanner: ProximityScanner,
    location: LocationState,
    fixed_at: Option<DateTime<Utc>>,
}

impl StageCore {
    /// Creates a `StageCore` with default settings (30 m radius).
    ///
    /// # Examples
    ///
    /// ```
    /// use stage_core::StageCore;
    ///
    /// let core = StageCore::new();
    /// assert_eq!(core.settings().radius_meters, 30.0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `StageCore` with custom settings.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::InvalidRadius`] for a negative or non-finite
    /// radius.
    pub fn with_settings(settings: ProximitySettings) -> Result<Self> {
        Ok(Self {
            scanner: ProximityScanner::new(settings)?,
            ..Self::default()
        })
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &ProximitySettings {
        self.scanner.settings()
    }

    /// Replaces the settings. The current location state is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::InvalidRadius`] and leaves the settings
    /// unchanged if the new radius is invalid.
    pub fn set_settings(&mut self, settings: ProximitySettings) -> Result<()> {
        self.scanner = ProximityScanner::new(settings)?;
        Ok(())
    }

    /// Current acquisition state.
    #[must_use]
    pub const fn location(&self) -> &LocationState {
        &self.location
    }

    /// Feeds an acquisition event, e.g. from a position watch.
    ///
    /// ```
    /// use stage_core::geo::GeoPoint;
    /// use stage_core::proximity::LocationEvent;
    /// use stage_core::StageCore;
    ///
    /// let mut core = StageCore::new();
    /// core.apply(LocationEvent::Requested);
    /// core.apply(LocationEvent::Resolved(GeoPoint::new(43.6047, 1.4442).unwrap()));
    /// assert!(core.location().observer().is_some());
    /// ```
    pub fn apply(&mut self, event: LocationEvent) {
        let resolved = matches!(event, LocationEvent::Resolved(_));
        let state = std::mem::take(&mut self.location);
        self.location = state.reduce(event);

        if resolved && self.location.observer().is_some() {
            self.fixed_at = Some(Utc::now());
        } else if self.location.observer().is_none() {
            self.fixed_at = None;
        }
    }

    /// Whether the known position is younger than the configured maximum age.
    #[must_use]
    pub fn has_fresh_fix(&self) -> bool {
        let Some(fixed_at) = self.fixed_at else {
            return false;
        };
        if self.location.observer().is_none() {
            return false;
        }
        // A fix stamped in the future (clock change) counts as fresh.
        (Utc::now() - fixed_at)
            .to_std()
            .map_or(true, |age| age < self.settings().acquisition.maximum_age)
    }

    /// Returns the observer position, reusing a fresh fix or asking `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::Unavailable`] if the source fails or times
    /// out. The failure is also recorded in [`location`](Self::location).
    ///
    /// # Cancellation
    ///
    /// Dropping the returned future while the source is pending leaves the
    /// state at [`LocationState::Acquiring`]. A later `locate` or
    /// [`apply`](Self::apply) with `Requested` or `Reset` recovers from it.
    pub async fn locate<S: LocationSource>(&mut self, source: &S) -> Result<GeoPoint> {
        if self.has_fresh_fix() {
            if let Some(point) = self.location.observer() {
                debug!("Reusing cached position {point}");
                return Ok(point);
            }
        }

        self.apply(LocationEvent::Requested);
        let options = self.settings().acquisition;
        match acquire(source, &options).await {
            Ok(point) => {
                self.apply(LocationEvent::Resolved(point));
                Ok(point)
            }
            Err(failure) => {
                self.apply(LocationEvent::Failed(failure.clone()));
                Err(ProximityError::Unavailable(failure))
            }
        }
    }

    /// Scans `candidates` around the current position, if any.
    #[must_use]
    pub fn nearby<'a>(&self, candidates: &'a [Candidate]) -> ScanReport<'a> {
        self.scanner.scan(self.location.observer(), candidates)
    }

    /// Locates the observer, then scans `candidates`.
    ///
    /// No scan happens when the position is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::Unavailable`] if the position cannot be
    /// acquired.
    pub async fn refresh<'a, S: LocationSource>(
        &mut self,
        source: &S,
        candidates: &'a [Candidate],
    ) -> Result<ScanReport<'a>> {
        self.locate(source).await?;
        let report = self.nearby(candidates);
        if !report.is_empty() {
            info!("{} student(s) found nearby", report.len());
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::proximity::{AcquisitionOptions, LocationFailure};

    struct CountingSource {
        result: std::result::Result<GeoPoint, LocationFailure>,
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new(result: std::result::Result<GeoPoint, LocationFailure>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    struct StalledSource;

    impl LocationSource for StalledSource {
        fn current_position(
            &self,
            _options: &AcquisitionOptions,
        ) -> impl Future<Output = std::result::Result<GeoPoint, LocationFailure>> + Send {
            std::future::pending()
        }
    }

    impl LocationSource for CountingSource {
        fn current_position(
            &self,
            _options: &AcquisitionOptions,
        ) -> impl Future<Output = std::result::Result<GeoPoint, LocationFailure>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = self.result.clone();
            async move { result }
        }
    }

    fn here() -> GeoPoint {
        GeoPoint::new(43.6047, 1.4442).unwrap()
    }

    #[test]
    fn new_starts_idle_with_defaults() {
        let core = StageCore::new();
        assert_eq!(core.location(), &LocationState::Idle);
        assert_eq!(core.settings(), &ProximitySettings::default());
        assert!(!core.has_fresh_fix());
    }

    #[test]
    fn with_settings_rejects_invalid_radius() {
        let err = StageCore::with_settings(ProximitySettings::with_radius(-1.0)).unwrap_err();
        assert_eq!(err, ProximityError::InvalidRadius(-1.0));
    }

    #[test]
    fn set_settings_keeps_previous_on_error() {
        let mut core = StageCore::new();
        assert!(core
            .set_settings(ProximitySettings::with_radius(f64::NAN))
            .is_err());
        assert_eq!(core.settings().radius_meters, 30.0);

        core.set_settings(ProximitySettings::with_radius(100.0)).unwrap();
        assert_eq!(core.settings().radius_meters, 100.0);
    }

    #[test]
    fn nearby_without_position_is_empty() {
        let core = StageCore::new();
        let candidates = vec![Candidate::new("1", "Emma Dupont", "Collège", "3ème", here())];
        let report = core.nearby(&candidates);
        assert!(report.is_empty());
        assert_eq!(report.evaluated, 0);
    }

    #[test]
    fn apply_tracks_fix_time() {
        let mut core = StageCore::new();
        core.apply(LocationEvent::Requested);
        core.apply(LocationEvent::Resolved(here()));
        assert!(core.has_fresh_fix());

        core.apply(LocationEvent::Reset);
        assert!(!core.has_fresh_fix());
    }

    #[tokio::test]
    async fn refresh_locates_then_scans() {
        let mut core = StageCore::new();
        let source = CountingSource::new(Ok(here()));
        let candidates = vec![
            Candidate::new("1", "Emma Dupont", "Collège Victor Hugo", "3ème", here()),
            Candidate::new(
                "2",
                "Lucas Moreau",
                "Collège Jean Moulin",
                "3ème",
                GeoPoint::new(43.6037, 1.4432).unwrap(),
            ),
        ];

        let report = core.refresh(&source, &candidates).await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.results[0].candidate.id, "1");
        assert_eq!(core.location().observer(), Some(here()));
    }

    #[tokio::test]
    async fn locate_reuses_fresh_fix() {
        let mut core = StageCore::new();
        let source = CountingSource::new(Ok(here()));

        core.locate(&source).await.unwrap();
        core.locate(&source).await.unwrap();
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn locate_requeries_when_maximum_age_is_zero() {
        let settings = ProximitySettings {
            acquisition: AcquisitionOptions {
                maximum_age: Duration::ZERO,
                ..AcquisitionOptions::default()
            },
            ..ProximitySettings::default()
        };
        let mut core = StageCore::with_settings(settings).unwrap();
        let source = CountingSource::new(Ok(here()));

        core.locate(&source).await.unwrap();
        core.locate(&source).await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn refresh_surfaces_failure_without_scanning() {
        let mut core = StageCore::new();
        let source = CountingSource::new(Err(LocationFailure::PermissionDenied));
        let candidates = vec![Candidate::new("1", "Emma Dupont", "Collège", "3ème", here())];

        let err = core.refresh(&source, &candidates).await.unwrap_err();
        assert_eq!(
            err,
            ProximityError::Unavailable(LocationFailure::PermissionDenied)
        );
        assert_eq!(
            core.location().failure(),
            Some(&LocationFailure::PermissionDenied)
        );
        assert!(core.nearby(&candidates).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_locate_stays_acquiring_until_reset() {
        let mut core = StageCore::new();
        let abandoned =
            tokio::time::timeout(Duration::from_millis(100), core.locate(&StalledSource)).await;
        assert!(abandoned.is_err());
        assert!(core.location().is_acquiring());

        core.apply(LocationEvent::Reset);
        assert_eq!(core.location(), &LocationState::Idle);

        let source = CountingSource::new(Ok(here()));
        assert_eq!(core.locate(&source).await.unwrap(), here());
    }
}
