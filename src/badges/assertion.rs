//! OpenBadges v2 assertion export.
//!
//! Builds the hosted-verification assertion JSON for an earned badge. The
//! recipient is never written in clear: the email is normalised and hashed
//! as `sha256$<hex>`, optionally with a salt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::{BadgeError, Result};
use super::types::{Badge, UserBadge};

/// JSON-LD context for OpenBadges v2.
pub const OPEN_BADGES_CONTEXT: &str = "https://w3id.org/openbadges/v2";

/// Hashed recipient identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Identity kind, always `email` here.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether `identity` is hashed.
    pub hashed: bool,
    /// `sha256$<hex digest>`.
    pub identity: String,
    /// Salt mixed into the hash, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
}

impl Recipient {
    /// Hashes an email address into a recipient identity.
    ///
    /// The address is trimmed and lower-cased before hashing so that the
    /// same person always gets the same identity.
    ///
    /// # Errors
    ///
    /// Returns [`BadgeError::InvalidEmail`] if the address has no local part
    /// or no domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use stage_core::badges::Recipient;
    ///
    /// let a = Recipient::hashed_email("Emma@Example.org", None).unwrap();
    /// let b = Recipient::hashed_email(" emma@example.org ", None).unwrap();
    /// assert_eq!(a.identity, b.identity);
    /// assert!(a.identity.starts_with("sha256$"));
    /// ```
    pub fn hashed_email(email: &str, salt: Option<&str>) -> Result<Self> {
        let normalized = email.trim().to_lowercase();
        match normalized.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(BadgeError::InvalidEmail(email.to_string())),
        }

        let mut hasher = Sha256::new();
        hasher.update(normalized.as_bytes());
        if let Some(salt) = salt {
            hasher.update(salt.as_bytes());
        }

        Ok(Self {
            kind: "email".to_string(),
            hashed: true,
            identity: format!("sha256${}", hex::encode(hasher.finalize())),
            salt: salt.map(str::to_string),
        })
    }
}

/// Evidence block of an assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionEvidence {
    /// URL of the experience backing the award.
    pub id: String,
    /// Human-readable narrative.
    pub narrative: String,
}

/// Verification block of an assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Verification method, `hosted`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Prefix every hosted assertion URL must start with.
    pub starts_with: String,
}

/// An OpenBadges v2 assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenBadgeAssertion {
    /// JSON-LD context.
    #[serde(rename = "@context")]
    pub context: String,
    /// Always `Assertion`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Hosted URL of this assertion.
    pub id: String,
    /// Hashed recipient.
    pub recipient: Recipient,
    /// URL of the badge class.
    pub badge: String,
    /// Award date.
    pub issued_on: NaiveDate,
    /// Supporting evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<AssertionEvidence>,
    /// How to verify the assertion.
    pub verification: Verification,
}

impl OpenBadgeAssertion {
    /// Builds the assertion for `award` of `badge`, hosted under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BadgeError::NotEarned`] if `award` is for another badge.
    pub fn new(badge: &Badge, award: &UserBadge, recipient: Recipient, base_url: &str) -> Result<Self> {
        if award.badge_id != badge.id {
            return Err(BadgeError::NotEarned(badge.id.clone()));
        }

        let base = base_url.trim_end_matches('/');
        let assertions = format!("{base}/badges/assertions/");

        Ok(Self {
            context: OPEN_BADGES_CONTEXT.to_string(),
            kind: "Assertion".to_string(),
            id: format!("{assertions}{}", award.id),
            recipient,
            badge: format!("{base}/badges/{}", badge.id),
            issued_on: award.issued_at,
            evidence: Some(AssertionEvidence {
                id: format!("{base}/experiences/{}", award.experience_id),
                narrative: award.evidence.description.clone(),
            }),
            verification: Verification {
                kind: "hosted".to_string(),
                starts_with: assertions,
            },
        })
    }

    /// Pretty-printed JSON, as written to the downloaded file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses an assertion from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or missing required fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// File name for an exported badge: `badge-<name>.json`, with whitespace
/// runs replaced by `-` and lower-cased.
///
/// Leading and trailing whitespace is dropped rather than turned into
/// hyphens, and a blank name gives `badge.json`.
///
/// ```
/// use stage_core::badges::export_file_name;
///
/// assert_eq!(export_file_name("Esprit  d'Équipe"), "badge-esprit-d'équipe.json");
/// assert_eq!(export_file_name("  "), "badge.json");
/// ```
#[must_use]
pub fn export_file_name(badge_name: &str) -> String {
    let slug = badge_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if slug.is_empty() {
        "badge.json".to_string()
    } else {
        format!("badge-{slug}.json")
    }
}
