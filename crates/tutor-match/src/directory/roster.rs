//! Tutor roster CSV import.
//!
//! Coordinators export rosters from spreadsheets, so list-valued columns are
//! flattened: `specialties` and `languages` are `|`-separated, and
//! `availability` packs days as `monday=09:00-11:00|14:00-16:00;friday=18:00-20:00`.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::DirectoryError;
use crate::matching::domain::{DayKey, Experience, Profile, ProfileId, Role};

pub(crate) fn parse_roster<R: Read>(reader: R) -> Result<Vec<Profile>, DirectoryError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut tutors = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        tutors.push(row.into_profile()?);
    }

    Ok(tutors)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    faculty: String,
    #[serde(default)]
    major: String,
    #[serde(default)]
    specialties: String,
    #[serde(default, deserialize_with = "empty_string_as_zero")]
    hourly_rate: u32,
    #[serde(default, deserialize_with = "empty_string_as_zero")]
    rating: f32,
    #[serde(default, deserialize_with = "empty_string_as_zero")]
    review_count: u32,
    #[serde(default)]
    experience: String,
    #[serde(default)]
    languages: String,
    #[serde(default)]
    bio: String,
    #[serde(default)]
    availability: String,
}

impl RosterRow {
    fn into_profile(self) -> Result<Profile, DirectoryError> {
        let availability = parse_availability(&self.id, &self.availability)?;

        Ok(Profile {
            id: ProfileId(self.id),
            name: self.name,
            email: self.email,
            role: Role::Tutor,
            faculty: self.faculty,
            major: self.major,
            specialties: split_list(&self.specialties),
            hourly_rate: self.hourly_rate,
            rating: self.rating,
            review_count: self.review_count,
            experience: Experience::Text(self.experience),
            availability,
            languages: split_list(&self.languages),
            bio: self.bio,
            preferences: None,
        })
    }
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_availability(
    tutor_id: &str,
    cell: &str,
) -> Result<BTreeMap<DayKey, Vec<String>>, DirectoryError> {
    let mut availability = BTreeMap::new();

    for entry in cell.split(';').map(str::trim).filter(|entry| !entry.is_empty()) {
        let malformed = || DirectoryError::MalformedAvailability {
            tutor_id: tutor_id.to_string(),
            entry: entry.to_string(),
        };

        let (day, ranges) = entry.split_once('=').ok_or_else(malformed)?;
        let day: DayKey = day.parse().map_err(|_| malformed())?;
        availability
            .entry(day)
            .or_insert_with(Vec::new)
            .extend(split_list(ranges));
    }

    Ok(availability)
}

fn empty_string_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }

    trimmed.parse::<T>().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ROSTER: &str = "\
id,name,email,faculty,major,specialties,hourly_rate,rating,review_count,experience,languages,bio,availability
t-100,An Le,an@example.edu,Computer Science,AI,Machine Learning|Python,180000,4.8,52,3 years,Vietnamese|English,Kaggle mentor,monday=09:00-11:00|14:00-16:00;fri=18:00-20:00
t-101,Bao Vo,,Physics,,Mechanics,,,,,,,
";

    #[test]
    fn parses_rows_into_tutor_profiles() {
        let tutors = parse_roster(Cursor::new(ROSTER)).expect("roster parses");

        assert_eq!(tutors.len(), 2);
        let an = &tutors[0];
        assert_eq!(an.role, Role::Tutor);
        assert_eq!(an.specialties, vec!["Machine Learning", "Python"]);
        assert_eq!(an.languages, vec!["Vietnamese", "English"]);
        assert_eq!(an.hourly_rate, 180_000);
        assert_eq!(an.experience.years(), 3.0);
        assert_eq!(
            an.availability.get(&DayKey::Monday),
            Some(&vec!["09:00-11:00".to_string(), "14:00-16:00".to_string()])
        );
        assert!(an.availability.contains_key(&DayKey::Friday));
    }

    #[test]
    fn blank_cells_fall_back_to_defaults() {
        let tutors = parse_roster(Cursor::new(ROSTER)).expect("roster parses");
        let bao = &tutors[1];

        assert_eq!(bao.hourly_rate, 0);
        assert_eq!(bao.rating, 0.0);
        assert!(bao.languages.is_empty());
        assert!(bao.availability.is_empty());
        assert_eq!(bao.experience.years(), 0.0);
    }

    #[test]
    fn rejects_unknown_days() {
        let roster = "id,name,availability\nt-1,Chi,someday=09:00-10:00\n";

        match parse_roster(Cursor::new(roster)) {
            Err(DirectoryError::MalformedAvailability { tutor_id, entry }) => {
                assert_eq!(tutor_id, "t-1");
                assert_eq!(entry, "someday=09:00-10:00");
            }
            other => panic!("expected malformed availability, got {other:?}"),
        }
    }
}
