//! Shortened link entity and the per-user link collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, NoneAsEmptyString, serde_as};
use std::collections::HashSet;

use crate::domain::expiry::{ValidityStatus, classify};

/// A shortened link as returned by the remote API.
///
/// Read-only from the client's point of view. `resolved_short_url` is always
/// taken from the server, never assembled locally.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedLink {
    #[serde(alias = "_id")]
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    #[serde_as(as = "DefaultOnNull<NoneAsEmptyString>")]
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default, alias = "userId")]
    pub owner_id: String,
    #[serde(alias = "expiryDate", alias = "expiresAt")]
    pub expiry_timestamp: DateTime<Utc>,
    #[serde(alias = "createdAt")]
    pub created_timestamp: DateTime<Utc>,
    #[serde(default, alias = "fullShortUrl")]
    pub resolved_short_url: String,
}

impl ShortenedLink {
    /// Validity at `now`. Recomputed on every call.
    pub fn validity(&self, now: DateTime<Utc>) -> ValidityStatus {
        classify(self.expiry_timestamp, now)
    }

    /// URL to display or copy: the resolved form when the server sent one.
    pub fn display_url(&self) -> &str {
        if self.resolved_short_url.is_empty() {
            &self.short_url
        } else {
            &self.resolved_short_url
        }
    }
}

/// The full set of a user's links as currently known to the client.
///
/// Ids are unique: when built from a sequence containing duplicates, the first
/// occurrence wins. Collections are replaced wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkCollection {
    links: Vec<ShortenedLink>,
}

impl LinkCollection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&ShortenedLink> {
        self.links.iter().find(|link| link.id == id)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShortenedLink> {
        self.links.iter()
    }

    pub fn ids(&self) -> HashSet<&str> {
        self.links.iter().map(|link| link.id.as_str()).collect()
    }

    /// Links ordered by creation time, newest first.
    pub fn sorted_newest_first(&self) -> Vec<&ShortenedLink> {
        let mut sorted: Vec<&ShortenedLink> = self.links.iter().collect();
        sorted.sort_by(|a, b| b.created_timestamp.cmp(&a.created_timestamp));
        sorted
    }
}

impl FromIterator<ShortenedLink> for LinkCollection {
    fn from_iter<I: IntoIterator<Item = ShortenedLink>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for link in iter {
            if seen.insert(link.id.clone()) {
                links.push(link);
            } else {
                tracing::warn!(id = %link.id, "Dropping duplicate link id");
            }
        }

        Self { links }
    }
}
