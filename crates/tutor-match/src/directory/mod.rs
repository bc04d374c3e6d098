//! Read-only profile store backing the matching engine.

mod roster;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::matching::domain::{Profile, ProfileId, Subject, SubjectCatalog};
use crate::matching::filter::CriteriaFacets;

const BUNDLED_DIRECTORY: &str = include_str!("../../data/directory.json");

/// Lookup surface the session context and front ends consume.
pub trait ProfileStore: Send + Sync {
    fn profiles(&self) -> &[Profile];
    fn subjects(&self) -> &SubjectCatalog;

    fn find(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles().iter().find(|profile| &profile.id == id)
    }

    fn find_by_email(&self, email: &str) -> Option<&Profile> {
        self.profiles()
            .iter()
            .find(|profile| {
                !profile.email.is_empty() && profile.email.eq_ignore_ascii_case(email)
            })
    }

    fn tutors(&self) -> Vec<&Profile> {
        self.profiles()
            .iter()
            .filter(|profile| profile.is_tutor())
            .collect()
    }
}

/// Error raised while loading a directory dataset.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read directory dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid directory JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid roster CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("tutor {tutor_id} has malformed availability entry '{entry}'")]
    MalformedAvailability { tutor_id: String, entry: String },
    #[error("profile id {0} appears more than once")]
    DuplicateProfile(ProfileId),
    #[error("unsupported dataset format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// In-memory, immutable profile store loaded once per process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default)]
    subjects: SubjectCatalog,
    profiles: Vec<Profile>,
}

impl Directory {
    pub fn new(profiles: Vec<Profile>, subjects: SubjectCatalog) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = profiles.iter().find(|profile| !seen.insert(&profile.id)) {
            return Err(DirectoryError::DuplicateProfile(duplicate.id.clone()));
        }

        Ok(Self { subjects, profiles })
    }

    /// Sample campus dataset shipped with the crate.
    pub fn bundled() -> Result<Self, DirectoryError> {
        Self::from_json_reader(BUNDLED_DIRECTORY.as_bytes())
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let raw: Directory = serde_json::from_reader(reader)?;
        Self::new(raw.profiles, raw.subjects)
    }

    /// Import a tutor roster; subjects are derived from the roster's specialties.
    pub fn from_roster_csv<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let tutors = roster::parse_roster(reader)?;
        let subjects = subjects_from_specialties(&tutors);
        Self::new(tutors, subjects)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?),
            "csv" => Self::from_roster_csv(std::fs::File::open(path)?),
            other => Err(DirectoryError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn facets(&self) -> CriteriaFacets {
        CriteriaFacets::from_profiles(&self.profiles)
    }
}

impl ProfileStore for Directory {
    fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    fn subjects(&self) -> &SubjectCatalog {
        &self.subjects
    }
}

fn subjects_from_specialties(tutors: &[Profile]) -> SubjectCatalog {
    let mut seen = HashSet::new();
    let subjects = tutors
        .iter()
        .flat_map(|tutor| tutor.specialties.iter())
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(|name| Subject {
            id: slug(name),
            name: name.clone(),
        })
        .collect();

    SubjectCatalog::new(subjects)
}

fn slug(name: &str) -> String {
    name.split(|ch: char| !ch.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
