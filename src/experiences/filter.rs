//! Search and tag filtering of the experience feed.

use serde::{Deserialize, Serialize};

use super::types::Experience;

/// Filter state of the experience feed.
///
/// Owned by the view; updated through the consuming `with_*` methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceFilter {
    /// Case-insensitive text matched against title, company and description.
    pub search: String,
    /// Only keep experiences carrying this tag; `None` means any.
    pub tag: Option<String>,
}

impl ExperienceFilter {
    /// Returns the filter with a new search text.
    #[must_use]
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    /// Returns the filter restricted to `tag` (`None` for any).
    #[must_use]
    pub fn with_tag(self, tag: Option<String>) -> Self {
        Self { tag, ..self }
    }

    /// Selects `tag`, or clears it if it is already selected.
    #[must_use]
    pub fn toggle_tag(self, tag: &str) -> Self {
        if self.tag.as_deref() == Some(tag) {
            self.with_tag(None)
        } else {
            self.with_tag(Some(tag.to_string()))
        }
    }

    /// Whether an experience passes the filter.
    #[must_use]
    pub fn matches(&self, experience: &Experience) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = needle.is_empty()
            || experience.title.to_lowercase().contains(&needle)
            || experience.company.to_lowercase().contains(&needle)
            || experience.description.to_lowercase().contains(&needle);
        let tag_match = self.tag.as_deref().map_or(true, |tag| experience.has_tag(tag));
        text_match && tag_match
    }

    /// Keeps the experiences that pass, preserving order.
    #[must_use]
    pub fn apply<'a, I>(&self, experiences: I) -> Vec<&'a Experience>
    where
        I: IntoIterator<Item = &'a Experience>,
    {
        experiences.into_iter().filter(|e| self.matches(e)).collect()
    }
}
