//! Experience data types.

use serde::{Deserialize, Serialize};

/// Tags offered as quick filters on the home page.
pub const POPULAR_TAGS: &[&str] = &[
    "Développement",
    "Marketing",
    "Design",
    "Data Science",
    "Commercial",
    "RH",
];

/// Author of an experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A published internship write-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Identifier.
    pub id: String,
    /// Headline, e.g. "Stage en Développement Web chez TechCorp".
    pub title: String,
    /// Host company.
    pub company: String,
    /// City.
    pub location: String,
    /// Free-text duration ("3 mois").
    pub duration: String,
    /// Body of the write-up.
    pub description: String,
    /// Who wrote it.
    pub author: Author,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Times the write-up was opened.
    #[serde(default)]
    pub view_count: u32,
    /// Messages sent to the author about it.
    #[serde(default)]
    pub message_count: u32,
    /// Cover image identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Experience {
    /// Whether the experience carries `tag` (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
