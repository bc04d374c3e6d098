//! Named, length-capped tutor rankings shown on the matching page.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::{Profile, ScoredTutor};
use super::scoring::CompatibilityScorer;

/// Every ranked view is truncated to this many tutors.
pub const VIEW_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankedView {
    Recommended,
    TopRated,
    RecentlyActive,
}

impl RankedView {
    pub const ALL: [RankedView; 3] = [
        RankedView::Recommended,
        RankedView::TopRated,
        RankedView::RecentlyActive,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RankedView::Recommended => "Recommended",
            RankedView::TopRated => "Top Rated",
            RankedView::RecentlyActive => "Recently Active",
        }
    }

    /// Rank the tutors in `pool` for `requester`, keeping at most [`VIEW_LIMIT`] entries.
    ///
    /// Sorting is stable, so tutors with equal keys keep their pool order.
    pub fn select<'a>(self, pool: &'a [Profile], requester: &Profile) -> Vec<ScoredTutor<'a>> {
        let scorer = CompatibilityScorer::new();
        let mut ranked: Vec<ScoredTutor<'a>> = pool
            .iter()
            .filter(|profile| profile.is_tutor())
            .map(|profile| ScoredTutor {
                profile,
                score: scorer.score(profile, requester),
            })
            .collect();

        ranked.sort_by(|a, b| self.compare(a, b));
        ranked.truncate(VIEW_LIMIT);
        ranked
    }

    fn compare(self, a: &ScoredTutor<'_>, b: &ScoredTutor<'_>) -> Ordering {
        match self {
            RankedView::Recommended => b.score.cmp(&a.score),
            RankedView::TopRated => b
                .profile
                .rating
                .total_cmp(&a.profile.rating)
                .then_with(|| b.profile.review_count.cmp(&a.profile.review_count)),
            RankedView::RecentlyActive => {
                activity_estimate(b.profile).total_cmp(&activity_estimate(a.profile))
            }
        }
    }
}

/// Synthetic activity signal; the directory carries no real last-seen timestamps.
pub fn activity_estimate(profile: &Profile) -> f64 {
    profile.review_count as f64 * 0.7 + profile.rating as f64 * 0.3
}

/// All three ranked views computed for a single requester.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSuggestions<'a> {
    pub recommended: Vec<ScoredTutor<'a>>,
    pub top_rated: Vec<ScoredTutor<'a>>,
    pub recently_active: Vec<ScoredTutor<'a>>,
}

impl<'a> MatchSuggestions<'a> {
    pub fn build(pool: &'a [Profile], requester: &Profile) -> Self {
        let suggestions = Self {
            recommended: RankedView::Recommended.select(pool, requester),
            top_rated: RankedView::TopRated.select(pool, requester),
            recently_active: RankedView::RecentlyActive.select(pool, requester),
        };

        tracing::debug!(
            requester = %requester.id,
            recommended = suggestions.recommended.len(),
            top_rated = suggestions.top_rated.len(),
            recently_active = suggestions.recently_active.len(),
            "built match suggestions"
        );

        suggestions
    }

    pub fn view(&self, view: RankedView) -> &[ScoredTutor<'a>] {
        match view {
            RankedView::Recommended => &self.recommended,
            RankedView::TopRated => &self.top_rated,
            RankedView::RecentlyActive => &self.recently_active,
        }
    }
}
