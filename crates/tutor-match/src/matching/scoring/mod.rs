mod rules;
pub mod tiers;

use super::domain::{Profile, ProfileId};
use serde::{Deserialize, Serialize};

/// Upper bound of the compatibility scale.
pub const MAX_SCORE: u8 = 100;

/// Stateless scorer comparing a tutor against a student's stated preferences.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityScorer;

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, tutor: &Profile, student: &Profile) -> CompatibilityOutcome {
        let (components, total) = rules::score_pair(tutor, student);

        CompatibilityOutcome {
            tutor_id: tutor.id.clone(),
            student_id: student.id.clone(),
            score: total.min(MAX_SCORE as u16) as u8,
            components,
        }
    }

    pub fn score(&self, tutor: &Profile, student: &Profile) -> u8 {
        self.evaluate(tutor, student).score
    }
}

/// Compatibility score of `tutor` for `student`, clamped to `0..=100`.
pub fn score(tutor: &Profile, student: &Profile) -> u8 {
    CompatibilityScorer.score(tutor, student)
}

/// Factors contributing to the compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityFactor {
    Faculty,
    SubjectExpertise,
    Rating,
    Experience,
    Availability,
}

impl CompatibilityFactor {
    pub const fn label(self) -> &'static str {
        match self {
            CompatibilityFactor::Faculty => "faculty",
            CompatibilityFactor::SubjectExpertise => "subject expertise",
            CompatibilityFactor::Rating => "rating",
            CompatibilityFactor::Experience => "experience",
            CompatibilityFactor::Availability => "availability",
        }
    }
}

/// Discrete contribution to a compatibility score, kept for explainable rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: CompatibilityFactor,
    pub points: u8,
    pub notes: String,
}

/// Clamped score plus the per-factor trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityOutcome {
    pub tutor_id: ProfileId,
    pub student_id: ProfileId,
    pub score: u8,
    pub components: Vec<ScoreComponent>,
}

impl CompatibilityOutcome {
    pub fn points_for(&self, factor: CompatibilityFactor) -> u8 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}
