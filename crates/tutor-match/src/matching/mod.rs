//! Tutor compatibility scoring, ranked suggestions, and search filtering.
//!
//! Every entry point here is a pure function over borrowed profiles: nothing
//! is cached between calls and no profile is mutated.

pub mod domain;
pub mod filter;
pub mod scoring;
pub mod search;
pub mod sort;
pub mod views;

pub use domain::{
    DayKey, Experience, Profile, ProfileId, Role, ScoredTutor, StudentPreferences, Subject,
    SubjectCatalog,
};
pub use filter::{filter_tutors, matches, CriteriaError, CriteriaFacets, FilterCriteria};
pub use scoring::{
    score, CompatibilityFactor, CompatibilityOutcome, CompatibilityScorer, ScoreComponent,
};
pub use search::{SearchOutcome, TutorSearch};
pub use sort::{sort_tutors, SortMode};
pub use views::{MatchSuggestions, RankedView, VIEW_LIMIT};
