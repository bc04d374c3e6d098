use super::super::domain::{labels_overlap, Profile, StudentPreferences};
use super::tiers::{EXPERIENCE_TIERS, RATING_TIERS};
use super::{CompatibilityFactor, ScoreComponent};

pub(crate) const FACULTY_BONUS: u8 = 30;
pub(crate) const SUBJECT_BONUS: u8 = 25;
pub(crate) const AVAILABILITY_BONUS: u8 = 10;

pub(crate) fn score_pair(tutor: &Profile, student: &Profile) -> (Vec<ScoreComponent>, u16) {
    let mut components = Vec::with_capacity(5);
    let mut total: u16 = 0;
    let preferences = student.preferences.as_ref();

    if tutor.faculty == student.faculty {
        components.push(ScoreComponent {
            factor: CompatibilityFactor::Faculty,
            points: FACULTY_BONUS,
            notes: format!("both in {}", tutor.faculty),
        });
        total += FACULTY_BONUS as u16;
    } else {
        components.push(ScoreComponent {
            factor: CompatibilityFactor::Faculty,
            points: 0,
            notes: format!("tutor faculty {} differs", tutor.faculty),
        });
    }

    match preferences.and_then(|prefs| shared_subject(tutor, prefs)) {
        Some((wanted, specialty)) => {
            components.push(ScoreComponent {
                factor: CompatibilityFactor::SubjectExpertise,
                points: SUBJECT_BONUS,
                notes: format!("'{wanted}' matches specialty '{specialty}'"),
            });
            total += SUBJECT_BONUS as u16;
        }
        None => components.push(ScoreComponent {
            factor: CompatibilityFactor::SubjectExpertise,
            points: 0,
            notes: "no preferred subject among specialties".to_string(),
        }),
    }

    let rating_bonus = RATING_TIERS.bonus(tutor.rating);
    components.push(ScoreComponent {
        factor: CompatibilityFactor::Rating,
        points: rating_bonus,
        notes: format!("average rating {:.1}", tutor.rating),
    });
    total += rating_bonus as u16;

    let years = tutor.experience.years();
    let experience_bonus = EXPERIENCE_TIERS.bonus(years);
    components.push(ScoreComponent {
        factor: CompatibilityFactor::Experience,
        points: experience_bonus,
        notes: format!("{years} year(s) of experience"),
    });
    total += experience_bonus as u16;

    match preferences.and_then(|prefs| shared_start_time(tutor, prefs)) {
        Some(start) => {
            components.push(ScoreComponent {
                factor: CompatibilityFactor::Availability,
                points: AVAILABILITY_BONUS,
                notes: format!("available from preferred time {start}"),
            });
            total += AVAILABILITY_BONUS as u16;
        }
        None => components.push(ScoreComponent {
            factor: CompatibilityFactor::Availability,
            points: 0,
            notes: "no slot starts at a preferred time".to_string(),
        }),
    }

    (components, total)
}

fn shared_subject<'a>(
    tutor: &'a Profile,
    preferences: &'a StudentPreferences,
) -> Option<(&'a str, &'a str)> {
    preferences.subjects.iter().find_map(|wanted| {
        tutor
            .specialties
            .iter()
            .find(|specialty| labels_overlap(wanted, specialty))
            .map(|specialty| (wanted.as_str(), specialty.as_str()))
    })
}

/// Day identity is ignored; any slot in the week starting at a preferred time counts.
fn shared_start_time<'a>(tutor: &'a Profile, preferences: &StudentPreferences) -> Option<&'a str> {
    tutor
        .availability
        .values()
        .flatten()
        .filter_map(|range| range.split('-').next())
        .find(|start| {
            preferences
                .preferred_times
                .iter()
                .any(|time| time.as_str() == *start)
        })
}
