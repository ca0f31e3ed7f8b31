//! Badge catalog and award types.
//!
//! Field names serialize in camelCase and enum values in kebab-case so that
//! catalogs exported by the web client load unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Badge category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeCategory {
    /// Interpersonal skills (teamwork, communication).
    SoftSkills,
    /// Technical skills.
    Technical,
    /// Skills tied to a job sector.
    SectorSpecific,
    /// Milestones such as a first internship.
    Achievement,
}

impl BadgeCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [
        Self::SoftSkills,
        Self::Technical,
        Self::SectorSpecific,
        Self::Achievement,
    ];

    /// Converts to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SoftSkills => "soft-skills",
            Self::Technical => "technical",
            Self::SectorSpecific => "sector-specific",
            Self::Achievement => "achievement",
        }
    }

    /// Parses from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "soft-skills" => Some(Self::SoftSkills),
            "technical" => Some(Self::Technical),
            "sector-specific" => Some(Self::SectorSpecific),
            "achievement" => Some(Self::Achievement),
            _ => None,
        }
    }
}

/// Badge tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLevel {
    /// Entry tier.
    Bronze,
    /// Middle tier.
    Silver,
    /// Top tier.
    Gold,
}

/// Organisation issuing a badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    /// Issuer name.
    pub name: String,
    /// Issuer home page.
    pub url: String,
    /// Contact address.
    pub email: String,
}

/// A badge that can be earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the badge recognises.
    pub description: String,
    /// Icon identifier or URL.
    pub icon: String,
    /// What it takes to earn it.
    pub criteria: String,
    /// Issuing organisation.
    pub issuer: Issuer,
    /// Category.
    pub category: BadgeCategory,
    /// Tier.
    pub level: BadgeLevel,
    /// When the badge was added to the catalog.
    pub created_at: NaiveDate,
}

/// Kind of proof attached to an award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceType {
    /// Backed by a published internship experience.
    Experience,
    /// Backed by a tutor's assessment.
    Assessment,
    /// Backed by peer review.
    PeerReview,
}

/// Proof attached to an award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Kind of proof.
    #[serde(rename = "type")]
    pub kind: EvidenceType,
    /// Free-text narrative.
    pub description: String,
    /// Optional link to supporting material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A badge awarded to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBadge {
    /// Award identifier.
    pub id: String,
    /// The awarded [`Badge::id`].
    pub badge_id: String,
    /// Recipient user.
    pub user_id: String,
    /// Experience that earned the badge.
    pub experience_id: String,
    /// Award date.
    pub issued_at: NaiveDate,
    /// Supporting evidence.
    pub evidence: Evidence,
    /// Whether the award was checked by the issuer.
    pub verified: bool,
}
