use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{labels_overlap, DayKey, Profile, SubjectCatalog};

/// Search-page filter state. Empty sets and zero thresholds impose no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search_query: String,
    pub subjects: BTreeSet<String>,
    pub faculties: BTreeSet<String>,
    pub min_rating: f32,
    pub min_price: u32,
    pub max_price: u32,
    pub availability: BTreeSet<DayKey>,
    pub min_experience: f32,
    pub languages: BTreeSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            subjects: BTreeSet::new(),
            faculties: BTreeSet::new(),
            min_rating: 0.0,
            min_price: 0,
            max_price: u32::MAX,
            availability: BTreeSet::new(),
            min_experience: 0.0,
            languages: BTreeSet::new(),
        }
    }
}

/// Domain enumerations the selectable faculty and language sets are drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaFacets {
    pub faculties: BTreeSet<String>,
    pub languages: BTreeSet<String>,
}

impl CriteriaFacets {
    pub fn from_profiles<'a, I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = &'a Profile>,
    {
        let mut facets = Self::default();
        for profile in profiles.into_iter().filter(|profile| profile.is_tutor()) {
            if !profile.faculty.is_empty() {
                facets.faculties.insert(profile.faculty.clone());
            }
            facets.languages.extend(profile.languages.iter().cloned());
        }
        facets
    }
}

/// Criteria that break the filter-state invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CriteriaError {
    #[error("minimum price {min} exceeds maximum price {max}")]
    InvertedPriceRange { min: u32, max: u32 },
    #[error("minimum rating {0} must lie within 0..=5")]
    RatingOutOfRange(f32),
    #[error("minimum experience {0} must be a non-negative number of years")]
    NegativeExperience(f32),
    #[error("unknown subject id '{0}'")]
    UnknownSubject(String),
    #[error("unknown faculty '{0}'")]
    UnknownFaculty(String),
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),
}

impl FilterCriteria {
    /// Check the state invariants before the criteria reach the evaluator.
    pub fn validate(
        &self,
        catalog: &SubjectCatalog,
        facets: &CriteriaFacets,
    ) -> Result<(), CriteriaError> {
        if self.min_price > self.max_price {
            return Err(CriteriaError::InvertedPriceRange {
                min: self.min_price,
                max: self.max_price,
            });
        }

        if !(0.0..=5.0).contains(&self.min_rating) {
            return Err(CriteriaError::RatingOutOfRange(self.min_rating));
        }

        if self.min_experience.is_nan() || self.min_experience < 0.0 {
            return Err(CriteriaError::NegativeExperience(self.min_experience));
        }

        if let Some(id) = self.subjects.iter().find(|id| !catalog.contains(id)) {
            return Err(CriteriaError::UnknownSubject(id.clone()));
        }

        if let Some(faculty) = self.faculties.difference(&facets.faculties).next() {
            return Err(CriteriaError::UnknownFaculty(faculty.clone()));
        }

        if let Some(language) = self.languages.difference(&facets.languages).next() {
            return Err(CriteriaError::UnknownLanguage(language.clone()));
        }

        Ok(())
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Whether `tutor` passes every active predicate in `criteria`.
pub fn matches(tutor: &Profile, criteria: &FilterCriteria, catalog: &SubjectCatalog) -> bool {
    matches_query(tutor, &criteria.search_query)
        && matches_subjects(tutor, &criteria.subjects, catalog)
        && (criteria.faculties.is_empty() || criteria.faculties.contains(&tutor.faculty))
        && tutor.rating >= criteria.min_rating
        && (criteria.min_price..=criteria.max_price).contains(&tutor.hourly_rate)
        && (criteria.availability.is_empty()
            || criteria
                .availability
                .iter()
                .any(|day| tutor.availability.contains_key(day)))
        && tutor.experience.years() >= criteria.min_experience
        && (criteria.languages.is_empty()
            || tutor
                .languages
                .iter()
                .any(|language| criteria.languages.contains(language)))
}

/// Apply [`matches`] to every member of `pool`, preserving order.
pub fn filter_tutors<'a, I>(
    pool: I,
    criteria: &FilterCriteria,
    catalog: &SubjectCatalog,
) -> Vec<&'a Profile>
where
    I: IntoIterator<Item = &'a Profile>,
{
    pool.into_iter()
        .filter(|tutor| matches(tutor, criteria, catalog))
        .collect()
}

fn matches_query(tutor: &Profile, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&query);

    contains(&tutor.name)
        || contains(&tutor.bio)
        || tutor.specialties.iter().any(|specialty| contains(specialty))
        || contains(&tutor.faculty)
        || contains(&tutor.major)
}

fn matches_subjects(
    tutor: &Profile,
    subjects: &BTreeSet<String>,
    catalog: &SubjectCatalog,
) -> bool {
    if subjects.is_empty() {
        return true;
    }

    subjects
        .iter()
        .filter_map(|id| catalog.display_name(id))
        .any(|name| {
            tutor
                .specialties
                .iter()
                .any(|specialty| labels_overlap(name, specialty))
        })
}
