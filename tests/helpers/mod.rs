//! Shared fixtures for integration tests.
//!
//! Positions are geographically consistent: "nearby" candidates really are
//! within a few meters of the observer, the others are over a hundred
//! meters away.

#![allow(dead_code)]

use std::future::Future;
use std::time::Duration;

use stage_core::geo::GeoPoint;
use stage_core::proximity::{AcquisitionOptions, Candidate, LocationFailure, LocationSource};

/// Observer standing on Place du Capitole, Toulouse.
pub fn observer() -> GeoPoint {
    GeoPoint::new(43.6047, 1.4442).expect("valid observer")
}

/// Candidate list: two within 30 m, two well outside.
pub fn candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(
            "1",
            "Emma Dupont",
            "Collège Victor Hugo",
            "3ème",
            GeoPoint::new(43.6047, 1.4442).expect("valid"),
        )
        .with_interests(["Santé", "Pharmacie", "Sciences"]),
        Candidate::new(
            "2",
            "Lucas Moreau",
            "Collège Jean Moulin",
            "3ème",
            GeoPoint::new(43.6037, 1.4432).expect("valid"),
        )
        .with_interests(["Vétérinaire", "Animaux", "Biologie"]),
        Candidate::new(
            "3",
            "Léa Bernard",
            "Lycée Pierre de Fermat",
            "2nde",
            GeoPoint::new(43.6057, 1.4452).expect("valid"),
        )
        .with_interests(["Éducation", "Enseignement", "Littérature"]),
        Candidate::new(
            "4",
            "Hugo Petit",
            "Lycée Pierre de Fermat",
            "2nde",
            // ~15 m north
            GeoPoint::new(43.604_835, 1.4442).expect("valid"),
        )
        .with_interests(["Informatique"]),
    ]
}

/// Location source returning a fixed answer after an optional delay.
pub struct ScriptedSource {
    pub result: Result<GeoPoint, LocationFailure>,
    pub delay: Duration,
}

impl ScriptedSource {
    pub fn at(point: GeoPoint) -> Self {
        Self {
            result: Ok(point),
            delay: Duration::ZERO,
        }
    }

    pub fn failing(failure: LocationFailure) -> Self {
        Self {
            result: Err(failure),
            delay: Duration::ZERO,
        }
    }

    pub fn slow(point: GeoPoint, delay: Duration) -> Self {
        Self {
            result: Ok(point),
            delay,
        }
    }
}

impl LocationSource for ScriptedSource {
    fn current_position(
        &self,
        _options: &AcquisitionOptions,
    ) -> impl Future<Output = Result<GeoPoint, LocationFailure>> + Send {
        let result = self.result.clone();
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            result
        }
    }
}
