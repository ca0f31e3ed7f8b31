//! A user's badges against the catalog: earned vs. available, progress and
//! filtering.

use log::debug;
use serde::{Deserialize, Serialize};

use super::assertion::{OpenBadgeAssertion, Recipient};
use super::error::{BadgeError, Result};
use super::types::{Badge, BadgeCategory, UserBadge};

/// Earned/total counts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    /// The category.
    pub category: BadgeCategory,
    /// Badges of this category the user holds.
    pub earned: usize,
    /// Badges of this category in the catalog.
    pub total: usize,
}

impl CategoryProgress {
    /// Completion in percent, 0 for an empty category.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.earned as f64 / self.total as f64 * 100.0
        }
    }
}

/// View over a badge catalog and the awards of one user.
#[derive(Debug, Clone, Copy)]
pub struct BadgeCollection<'a> {
    catalog: &'a [Badge],
    awards: &'a [UserBadge],
}

impl<'a> BadgeCollection<'a> {
    /// Creates the view.
    #[must_use]
    pub const fn new(catalog: &'a [Badge], awards: &'a [UserBadge]) -> Self {
        Self { catalog, awards }
    }

    /// Looks up a catalog badge.
    #[must_use]
    pub fn badge(&self, badge_id: &str) -> Option<&'a Badge> {
        self.catalog.iter().find(|b| b.id == badge_id)
    }

    /// The user's award for a badge, if any.
    #[must_use]
    pub fn award_for(&self, badge_id: &str) -> Option<&'a UserBadge> {
        self.awards.iter().find(|a| a.badge_id == badge_id)
    }

    /// Whether the user holds the badge.
    #[must_use]
    pub fn is_earned(&self, badge_id: &str) -> bool {
        self.award_for(badge_id).is_some()
    }

    /// Catalog badges the user holds, in catalog order.
    #[must_use]
    pub fn earned(&self) -> Vec<&'a Badge> {
        self.catalog.iter().filter(|b| self.is_earned(&b.id)).collect()
    }

    /// Catalog badges still to earn, in catalog order.
    #[must_use]
    pub fn available(&self) -> Vec<&'a Badge> {
        self.catalog.iter().filter(|b| !self.is_earned(&b.id)).collect()
    }

    /// Earned/total per category, for every category in display order.
    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryProgress> {
        BadgeCategory::ALL
            .iter()
            .map(|&category| {
                let in_category = self.catalog.iter().filter(|b| b.category == category);
                let total = in_category.clone().count();
                let earned = in_category.filter(|b| self.is_earned(&b.id)).count();
                CategoryProgress {
                    category,
                    earned,
                    total,
                }
            })
            .collect()
    }

    /// Overall completion in percent, 0 for an empty catalog.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        if self.catalog.is_empty() {
            return 0.0;
        }
        self.earned().len() as f64 / self.catalog.len() as f64 * 100.0
    }

    /// Builds the OpenBadges assertion for an earned badge.
    ///
    /// # Errors
    ///
    /// Returns [`BadgeError::NotFound`] if the badge is not in the catalog and
    /// [`BadgeError::NotEarned`] if the user does not hold it.
    pub fn export(
        &self,
        badge_id: &str,
        recipient: Recipient,
        base_url: &str,
    ) -> Result<OpenBadgeAssertion> {
        let badge = self
            .badge(badge_id)
            .ok_or_else(|| BadgeError::NotFound(badge_id.to_string()))?;
        let award = self
            .award_for(badge_id)
            .ok_or_else(|| BadgeError::NotEarned(badge_id.to_string()))?;

        debug!("Exporting badge {} (award {})", badge.id, award.id);
        OpenBadgeAssertion::new(badge, award, recipient, base_url)
    }

    /// Builds one assertion per earned badge, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while building an assertion.
    pub fn export_all(
        &self,
        recipient: &Recipient,
        base_url: &str,
    ) -> Result<Vec<OpenBadgeAssertion>> {
        let assertions = self
            .earned()
            .into_iter()
            .map(|badge| self.export(&badge.id, recipient.clone(), base_url))
            .collect::<Result<Vec<_>>>()?;
        debug!("Exported {} badge(s)", assertions.len());
        Ok(assertions)
    }
}

/// Search and category filter for badge lists.
///
/// Owned by the view; updated through the consuming `with_*` methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeFilter {
    /// Case-insensitive text matched against name and description.
    pub search: String,
    /// Restrict to one category; `None` means all.
    pub category: Option<BadgeCategory>,
}

impl BadgeFilter {
    /// Returns the filter with a new search text.
    #[must_use]
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    /// Returns the filter restricted to `category` (`None` for all).
    #[must_use]
    pub fn with_category(self, category: Option<BadgeCategory>) -> Self {
        Self { category, ..self }
    }

    /// Whether a badge passes the filter.
    #[must_use]
    pub fn matches(&self, badge: &Badge) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = needle.is_empty()
            || badge.name.to_lowercase().contains(&needle)
            || badge.description.to_lowercase().contains(&needle);
        let category_match = self.category.is_none_or(|c| c == badge.category);
        text_match && category_match
    }

    /// Keeps the badges that pass, preserving order.
    #[must_use]
    pub fn apply<'a, I>(&self, badges: I) -> Vec<&'a Badge>
    where
        I: IntoIterator<Item = &'a Badge>,
    {
        badges.into_iter().filter(|b| self.matches(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::badges::types::{BadgeLevel, Evidence, EvidenceType, Issuer};

    fn badge(id: &str, name: &str, description: &str, category: BadgeCategory) -> Badge {
        Badge {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: "award".to_string(),
            criteria: String::new(),
            issuer: Issuer {
                name: "Stage".to_string(),
                url: "https://stage.example".to_string(),
                email: "badges@stage.example".to_string(),
            },
            category,
            level: BadgeLevel::Bronze,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn award(id: &str, badge_id: &str) -> UserBadge {
        UserBadge {
            id: id.to_string(),
            badge_id: badge_id.to_string(),
            user_id: "user1".to_string(),
            experience_id: "exp1".to_string(),
            issued_at: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            evidence: Evidence {
                kind: EvidenceType::Experience,
                description: "Stage d'observation".to_string(),
                url: None,
            },
            verified: true,
        }
    }

    fn catalog() -> Vec<Badge> {
        vec![
            badge("1", "Premier Stage", "Premier stage terminé", BadgeCategory::Achievement),
            badge("2", "Esprit d'équipe", "Travail en équipe", BadgeCategory::SoftSkills),
            badge("3", "Expert Santé", "Stage dans la santé", BadgeCategory::SectorSpecific),
            badge("4", "Développeur", "Compétences en code", BadgeCategory::Technical),
        ]
    }

    fn awards() -> Vec<UserBadge> {
        vec![award("ub1", "1"), award("ub2", "2")]
    }

    #[test]
    fn partitions_earned_and_available() {
        let catalog = catalog();
        let awards = awards();
        let collection = BadgeCollection::new(&catalog, &awards);

        let earned: Vec<&str> = collection.earned().iter().map(|b| b.id.as_str()).collect();
        let available: Vec<&str> = collection.available().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(earned, ["1", "2"]);
        assert_eq!(available, ["3", "4"]);
    }

    #[test]
    fn breakdown_counts_each_category() {
        let catalog = catalog();
        let awards = awards();
        let breakdown = BadgeCollection::new(&catalog, &awards).category_breakdown();

        assert_eq!(breakdown.len(), 4);
        assert_eq!(
            breakdown[0],
            CategoryProgress {
                category: BadgeCategory::SoftSkills,
                earned: 1,
                total: 1
            }
        );
        assert_eq!(breakdown[1].earned, 0);
        assert_eq!(breakdown[3].category, BadgeCategory::Achievement);
        assert_eq!(breakdown[3].percent(), 100.0);
    }

    #[test]
    fn progress_percent() {
        let catalog = catalog();
        let awards = awards();
        assert_eq!(BadgeCollection::new(&catalog, &awards).progress_percent(), 50.0);
        assert_eq!(BadgeCollection::new(&[], &awards).progress_percent(), 0.0);
    }

    #[test]
    fn empty_category_percent_is_zero() {
        let progress = CategoryProgress {
            category: BadgeCategory::Technical,
            earned: 0,
            total: 0,
        };
        assert_eq!(progress.percent(), 0.0);
    }

    #[test]
    fn export_earned_badge() {
        let catalog = catalog();
        let awards = awards();
        let collection = BadgeCollection::new(&catalog, &awards);
        let recipient = Recipient::hashed_email("emma@example.org", None).unwrap();

        let assertion = collection
            .export("2", recipient, "https://stage.example")
            .unwrap();
        assert_eq!(assertion.id, "https://stage.example/badges/assertions/ub2");
    }

    #[test]
    fn export_unknown_or_unearned_badge_fails() {
        let catalog = catalog();
        let awards = awards();
        let collection = BadgeCollection::new(&catalog, &awards);
        let recipient = Recipient::hashed_email("emma@example.org", None).unwrap();

        assert!(matches!(
            collection.export("99", recipient.clone(), "https://stage.example"),
            Err(BadgeError::NotFound(_))
        ));
        assert!(matches!(
            collection.export("3", recipient, "https://stage.example"),
            Err(BadgeError::NotEarned(_))
        ));
    }

    #[test]
    fn export_all_covers_every_earned_badge() {
        let catalog = catalog();
        let awards = awards();
        let collection = BadgeCollection::new(&catalog, &awards);
        let recipient = Recipient::hashed_email("emma@example.org", None).unwrap();

        let assertions = collection
            .export_all(&recipient, "https://stage.example")
            .unwrap();
        let ids: Vec<&str> = assertions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "https://stage.example/badges/assertions/ub1",
                "https://stage.example/badges/assertions/ub2",
            ]
        );
        assert!(assertions.iter().all(|a| a.recipient == recipient));
    }

    #[test]
    fn export_all_without_awards_is_empty() {
        let catalog = catalog();
        let recipient = Recipient::hashed_email("emma@example.org", None).unwrap();
        let assertions = BadgeCollection::new(&catalog, &[])
            .export_all(&recipient, "https://stage.example")
            .unwrap();
        assert!(assertions.is_empty());
    }

    #[test]
    fn default_filter_matches_everything() {
        let catalog = catalog();
        assert_eq!(BadgeFilter::default().apply(&catalog).len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let catalog = catalog();
        let by_name = BadgeFilter::default().with_search("EXPERT");
        assert_eq!(by_name.apply(&catalog).len(), 1);

        let by_description = BadgeFilter::default().with_search("équipe");
        let ids: Vec<&str> = by_description.apply(&catalog).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }

    #[test]
    fn category_and_search_combine() {
        let catalog = catalog();
        let filter = BadgeFilter::default()
            .with_search("stage")
            .with_category(Some(BadgeCategory::SectorSpecific));
        let ids: Vec<&str> = filter.apply(&catalog).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["3"]);

        let all = filter.with_category(None);
        assert_eq!(all.apply(&catalog).len(), 2);
    }

    #[test]
    fn filter_applies_to_partitions() {
        let catalog = catalog();
        let awards = awards();
        let collection = BadgeCollection::new(&catalog, &awards);
        let filter = BadgeFilter::default().with_category(Some(BadgeCategory::Technical));

        assert!(filter.apply(collection.earned()).is_empty());
        assert_eq!(filter.apply(collection.available()).len(), 1);
    }
}
