use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::Profile;

/// Ordering applied to filtered search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Relevance,
    Rating,
    PriceLow,
    PriceHigh,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Relevance,
        SortMode::Rating,
        SortMode::PriceLow,
        SortMode::PriceHigh,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::Rating => "rating",
            SortMode::PriceLow => "price-low",
            SortMode::PriceHigh => "price-high",
        }
    }

    /// Comparator for this mode; equal keys compare as `Equal` so stable sorts keep input order.
    pub fn compare(self, a: &Profile, b: &Profile) -> Ordering {
        match self {
            SortMode::Relevance => relevance(b).total_cmp(&relevance(a)),
            SortMode::Rating => b.rating.total_cmp(&a.rating),
            SortMode::PriceLow => a.hourly_rate.cmp(&b.hourly_rate),
            SortMode::PriceHigh => b.hourly_rate.cmp(&a.hourly_rate),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.label() == normalized)
            .ok_or_else(|| format!("unknown sort mode '{value}'"))
    }
}

/// Composite relevance key blending rating with review volume.
pub fn relevance(profile: &Profile) -> f64 {
    profile.rating as f64 * 0.7 + (profile.review_count as f64 / 100.0) * 0.3
}

/// Return a new, stably sorted sequence; the caller's slice is left untouched.
pub fn sort_tutors<'a>(tutors: &[&'a Profile], mode: SortMode) -> Vec<&'a Profile> {
    let mut sorted = tutors.to_vec();
    sorted.sort_by(|a, b| mode.compare(a, b));
    sorted
}
