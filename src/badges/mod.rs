//! Badges earned through internships.
//!
//! - [`Badge`] / [`UserBadge`]: catalog entries and awards, JSON-compatible
//!   with the web client
//! - [`BadgeCollection`]: earned vs. available, per-category progress
//! - [`BadgeFilter`]: search and category filtering
//! - [`OpenBadgeAssertion`]: OpenBadges v2 export with a hashed recipient
//!
//! # Example Usage
//!
//! ```
//! use stage_core::badges::{BadgeCollection, BadgeFilter, Badge, UserBadge};
//!
//! let catalog: Vec<Badge> = Vec::new();
//! let awards: Vec<UserBadge> = Vec::new();
//! let collection = BadgeCollection::new(&catalog, &awards);
//!
//! assert_eq!(collection.progress_percent(), 0.0);
//! assert!(BadgeFilter::default().apply(collection.available()).is_empty());
//! ```

mod assertion;
mod collection;
mod error;
pub mod types;

pub use assertion::{
    export_file_name, AssertionEvidence, OpenBadgeAssertion, Recipient, Verification,
    OPEN_BADGES_CONTEXT,
};
pub use collection::{BadgeCollection, BadgeFilter, CategoryProgress};
pub use error::{BadgeError, Result};
pub use types::{
    Badge, BadgeCategory, BadgeLevel, Evidence, EvidenceType, Issuer, UserBadge,
};
