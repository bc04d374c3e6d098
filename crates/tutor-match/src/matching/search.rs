use serde::Serialize;

use super::domain::{Profile, SubjectCatalog};
use super::filter::{filter_tutors, FilterCriteria};
use super::sort::{sort_tutors, SortMode};

/// Filter-then-sort pipeline behind the tutor search page.
pub struct TutorSearch<'c> {
    catalog: &'c SubjectCatalog,
}

/// Ordered search results plus the size of the searchable tutor pool.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome<'a> {
    pub total_tutors: usize,
    pub results: Vec<&'a Profile>,
}

impl SearchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'c> TutorSearch<'c> {
    pub fn new(catalog: &'c SubjectCatalog) -> Self {
        Self { catalog }
    }

    pub fn run<'a>(
        &self,
        pool: &'a [Profile],
        criteria: &FilterCriteria,
        sort: SortMode,
    ) -> SearchOutcome<'a> {
        let tutors: Vec<&'a Profile> = pool.iter().filter(|profile| profile.is_tutor()).collect();
        let total_tutors = tutors.len();

        let filtered = filter_tutors(tutors, criteria, self.catalog);
        let results = sort_tutors(&filtered, sort);

        tracing::debug!(
            total_tutors,
            matched = results.len(),
            sort = sort.label(),
            "tutor search completed"
        );

        SearchOutcome {
            total_tutors,
            results,
        }
    }
}
