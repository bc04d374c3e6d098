use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for directory profiles.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of account roles known to the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
    Coordinator,
    Admin,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
            Role::Coordinator => "coordinator",
            Role::Admin => "admin",
        }
    }
}

/// Day-of-week keys used by tutor availability maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayKey {
    pub const ALL: [DayKey; 7] = [
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
        DayKey::Sunday,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DayKey::Monday => "monday",
            DayKey::Tuesday => "tuesday",
            DayKey::Wednesday => "wednesday",
            DayKey::Thursday => "thursday",
            DayKey::Friday => "friday",
            DayKey::Saturday => "saturday",
            DayKey::Sunday => "sunday",
        }
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        DayKey::ALL
            .into_iter()
            .find(|day| day.label() == normalized || day.label()[..3] == normalized)
            .ok_or_else(|| format!("unknown day '{value}'"))
    }
}

/// Experience value exactly as the profile store supplies it.
///
/// Stores hold either a bare number of years or free text such as
/// `"3 years"`; [`Experience::years`] extracts the leading number. Any other
/// JSON value, `null` included, loads as zero years.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Experience {
    Years(f32),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExperience {
    Years(f32),
    Text(String),
    Unreadable(IgnoredAny),
}

impl<'de> Deserialize<'de> for Experience {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawExperience::deserialize(deserializer)? {
            RawExperience::Years(years) => Experience::Years(years),
            RawExperience::Text(text) => Experience::Text(text),
            RawExperience::Unreadable(_) => Experience::default(),
        })
    }
}

impl Default for Experience {
    fn default() -> Self {
        Experience::Years(0.0)
    }
}

impl Experience {
    /// Numeric years of experience, falling back to `0.0` when the value cannot be read.
    pub fn years(&self) -> f32 {
        let years = match self {
            Experience::Years(years) => *years,
            Experience::Text(text) => leading_number(text).unwrap_or(0.0),
        };

        if years.is_finite() {
            years
        } else {
            0.0
        }
    }
}

fn leading_number(text: &str) -> Option<f32> {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' => end = idx + 1,
            '-' | '+' if idx == 0 => end = idx + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }

    trimmed[..end].trim_end_matches('.').parse::<f32>().ok()
}

/// Stated preferences carried by student profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPreferences {
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub preferred_times: Vec<String>,
}

/// Directory record for any marketplace member.
///
/// Tutor-only attributes (specialties, rate, availability) and the student-only
/// preferences default to empty so every role shares one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub hourly_rate: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub availability: BTreeMap<DayKey, Vec<String>>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<StudentPreferences>,
}

impl Profile {
    pub fn is_tutor(&self) -> bool {
        self.role == Role::Tutor
    }
}

/// Catalog entry resolving a subject identifier to its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
}

/// Ordered subject catalog consulted when filter criteria reference subject ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.subjects
            .iter()
            .find(|subject| subject.id == id)
            .map(|subject| subject.name.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.display_name(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// A tutor annotated with its compatibility score for the current requester.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredTutor<'a> {
    pub profile: &'a Profile,
    pub score: u8,
}

/// Case-insensitive containment in either direction between two free-text labels.
pub(crate) fn labels_overlap(left: &str, right: &str) -> bool {
    let left = left.to_lowercase();
    let right = right.to_lowercase();
    left.contains(&right) || right.contains(&left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_reads_leading_number_from_text() {
        assert_eq!(Experience::Text("3 years".to_string()).years(), 3.0);
        assert_eq!(Experience::Text("1.5".to_string()).years(), 1.5);
        assert_eq!(Experience::Text(" 2 năm".to_string()).years(), 2.0);
        assert_eq!(Experience::Years(4.0).years(), 4.0);
        assert_eq!(Experience::Text("1e3 hours".to_string()).years(), 1.0);
        assert_eq!(Experience::Text("1..5".to_string()).years(), 1.0);
    }

    #[test]
    fn experience_defaults_to_zero_when_unreadable() {
        assert_eq!(Experience::Text("several years".to_string()).years(), 0.0);
        assert_eq!(Experience::Text(String::new()).years(), 0.0);
        assert_eq!(Experience::Years(f32::NAN).years(), 0.0);
        assert_eq!(Experience::default().years(), 0.0);
    }

    #[test]
    fn experience_deserializes_from_number_or_string() {
        let numeric: Experience = serde_json::from_str("2.5").expect("number");
        let text: Experience = serde_json::from_str("\"4 years\"").expect("string");
        assert_eq!(numeric.years(), 2.5);
        assert_eq!(text.years(), 4.0);
    }

    #[test]
    fn experience_of_other_json_shapes_reads_as_zero() {
        for raw in ["null", "true", "[3]", "{\"years\": 3}"] {
            let experience: Experience = serde_json::from_str(raw).expect(raw);
            assert_eq!(experience, Experience::default(), "{raw}");
        }
    }

    #[test]
    fn day_keys_parse_full_and_short_names() {
        assert_eq!("Monday".parse::<DayKey>(), Ok(DayKey::Monday));
        assert_eq!("sat".parse::<DayKey>(), Ok(DayKey::Saturday));
        assert!("someday".parse::<DayKey>().is_err());
    }

    #[test]
    fn labels_overlap_is_bidirectional_and_case_insensitive() {
        assert!(labels_overlap("Calculus", "calculus 1"));
        assert!(labels_overlap("Data Structures and Algorithms", "ALGORITHMS"));
        assert!(!labels_overlap("Physics", "Chemistry"));
    }

    #[test]
    fn catalog_resolves_display_names() {
        let catalog = SubjectCatalog::new(vec![Subject {
            id: "math".to_string(),
            name: "Mathematics".to_string(),
        }]);
        assert_eq!(catalog.display_name("math"), Some("Mathematics"));
        assert!(catalog.display_name("art").is_none());
    }
}
