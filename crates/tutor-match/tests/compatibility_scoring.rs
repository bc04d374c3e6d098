//! Scoring properties exercised through the public crate surface.

mod common {
    use std::collections::BTreeMap;

    use tutor_match::matching::{
        DayKey, Experience, Profile, ProfileId, Role, StudentPreferences,
    };

    pub(super) fn student() -> Profile {
        Profile {
            id: ProfileId("student-9".to_string()),
            name: "Quynh Ha".to_string(),
            email: "quynh@student.example.edu".to_string(),
            role: Role::Student,
            faculty: "Computer Science and Engineering".to_string(),
            major: "Computer Science".to_string(),
            specialties: Vec::new(),
            hourly_rate: 0,
            rating: 0.0,
            review_count: 0,
            experience: Experience::default(),
            availability: BTreeMap::new(),
            languages: vec!["Vietnamese".to_string()],
            bio: String::new(),
            preferences: Some(StudentPreferences {
                subjects: vec!["Algorithms".to_string()],
                preferred_times: vec!["14:00".to_string()],
            }),
        }
    }

    /// Tutor that earns nothing but the experience floor against [`student`].
    pub(super) fn baseline_tutor(id: &str) -> Profile {
        Profile {
            id: ProfileId(id.to_string()),
            name: format!("Tutor {id}"),
            email: format!("{id}@example.edu"),
            role: Role::Tutor,
            faculty: "Chemical Engineering".to_string(),
            major: "Biotechnology".to_string(),
            specialties: vec!["Organic Chemistry".to_string()],
            hourly_rate: 100_000,
            rating: 2.0,
            review_count: 4,
            experience: Experience::Text("not stated".to_string()),
            availability: BTreeMap::from([(DayKey::Monday, vec!["07:00-08:00".to_string()])]),
            languages: vec!["Vietnamese".to_string()],
            bio: String::new(),
            preferences: None,
        }
    }

    pub(super) fn perfect_tutor() -> Profile {
        Profile {
            faculty: "Computer Science and Engineering".to_string(),
            specialties: vec!["Data Structures and Algorithms".to_string()],
            rating: 4.6,
            experience: Experience::Text("3 years".to_string()),
            availability: BTreeMap::from([(
                DayKey::Thursday,
                vec!["14:00-16:00".to_string()],
            )]),
            ..baseline_tutor("perfect")
        }
    }
}

use common::*;
use tutor_match::matching::{
    score, CompatibilityFactor, CompatibilityScorer, Experience, StudentPreferences,
};

#[test]
fn perfect_match_reaches_the_cap_exactly() {
    let mut pool: Vec<_> = (0..9)
        .map(|idx| baseline_tutor(&format!("t-{idx}")))
        .collect();
    pool.insert(4, perfect_tutor());

    let requester = student();
    let outcome = CompatibilityScorer::new().evaluate(&pool[4], &requester);

    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.points_for(CompatibilityFactor::Faculty), 30);
    assert_eq!(outcome.points_for(CompatibilityFactor::SubjectExpertise), 25);
    assert_eq!(outcome.points_for(CompatibilityFactor::Rating), 20);
    assert_eq!(outcome.points_for(CompatibilityFactor::Experience), 15);
    assert_eq!(outcome.points_for(CompatibilityFactor::Availability), 10);

    for (idx, tutor) in pool.iter().enumerate() {
        if idx != 4 {
            assert_eq!(score(tutor, &requester), 5, "tutor {} scored", tutor.id);
        }
    }
}

#[test]
fn scores_stay_within_bounds_for_bundled_directory() {
    use tutor_match::directory::{Directory, ProfileStore};

    let directory = Directory::bundled().expect("bundled dataset parses");
    for requester in directory.profiles() {
        for tutor in directory.tutors() {
            let value = score(tutor, requester);
            assert!(value <= 100, "{} vs {} scored {value}", tutor.id, requester.id);
            assert!(value >= 5, "experience floor missing for {}", tutor.id);
        }
    }
}

#[test]
fn faculty_match_adds_exactly_thirty() {
    let requester = student();
    let tutor = baseline_tutor("faculty");
    let before = score(&tutor, &requester);

    let matched = tutor_match::matching::Profile {
        faculty: requester.faculty.clone(),
        ..tutor
    };

    assert_eq!(score(&matched, &requester), before + 30);
}

#[test]
fn rating_tiers_differ_by_their_deltas() {
    let requester = student();
    let at = |rating: f32| {
        let tutor = tutor_match::matching::Profile {
            rating,
            ..baseline_tutor("rating")
        };
        score(&tutor, &requester)
    };

    let base = at(2.0);
    assert_eq!(at(3.5), base + 10);
    assert_eq!(at(4.0), base + 15);
    assert_eq!(at(4.5), base + 20);
}

#[test]
fn experience_floor_applies_to_zero_and_unparsable_values() {
    let requester = student();
    for experience in [
        Experience::Years(0.0),
        Experience::Years(-2.0),
        Experience::Text("a while".to_string()),
        Experience::Text(String::new()),
    ] {
        let tutor = tutor_match::matching::Profile {
            experience,
            ..baseline_tutor("floor")
        };
        let outcome = CompatibilityScorer::new().evaluate(&tutor, &requester);
        assert_eq!(outcome.points_for(CompatibilityFactor::Experience), 5);
    }
}

#[test]
fn experience_tiers_follow_parsed_years() {
    let requester = student();
    let points = |experience: Experience| {
        let tutor = tutor_match::matching::Profile {
            experience,
            ..baseline_tutor("years")
        };
        CompatibilityScorer::new()
            .evaluate(&tutor, &requester)
            .points_for(CompatibilityFactor::Experience)
    };

    assert_eq!(points(Experience::Text("1 year".to_string())), 10);
    assert_eq!(points(Experience::Years(1.9)), 10);
    assert_eq!(points(Experience::Text("2.0 years".to_string())), 15);
}

#[test]
fn empty_preference_lists_never_match() {
    let mut requester = student();
    requester.preferences = Some(StudentPreferences::default());

    assert_eq!(score(&perfect_tutor(), &requester), 30 + 20 + 15);
}
