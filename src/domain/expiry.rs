//! Client-side validity classification of a link's remaining lifetime.

use chrono::{DateTime, Utc};
use std::fmt;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Presentation tier for a link's remaining lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyTier {
    Expired,
    Urgent,
    Normal,
}

/// Derived validity of a link at a given instant. Never stored on the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityStatus {
    pub label: String,
    pub urgency: UrgencyTier,
}

impl fmt::Display for ValidityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Classifies a link expiring at `expiry` as seen at `now`.
///
/// Past the expiry instant the link is `Expired`. Otherwise the remaining time is
/// rounded up to whole days; two days or fewer is `Urgent`. The expiry instant
/// itself still counts as "0 days left".
pub fn classify(expiry: DateTime<Utc>, now: DateTime<Utc>) -> ValidityStatus {
    if now > expiry {
        return ValidityStatus {
            label: "Expired".to_string(),
            urgency: UrgencyTier::Expired,
        };
    }

    let remaining = (expiry - now).num_milliseconds();
    let days_left = (remaining + DAY_MILLIS - 1) / DAY_MILLIS;
    let unit = if days_left == 1 { "day" } else { "days" };

    ValidityStatus {
        label: format!("{days_left} {unit} left"),
        urgency: if days_left <= 2 {
            UrgencyTier::Urgent
        } else {
            UrgencyTier::Normal
        },
    }
}
