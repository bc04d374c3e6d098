use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;
use tutor_match::config::SearchConfig;
use tutor_match::directory::{Directory, ProfileStore};
use tutor_match::error::AppError;
use tutor_match::matching::{
    CompatibilityScorer, DayKey, FilterCriteria, MatchSuggestions, Profile, ProfileId,
    RankedView, Role, ScoredTutor, SortMode, TutorSearch,
};
use tutor_match::session::{InMemorySessionStore, SessionContext, SessionError};

use crate::infra::print_json;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Free-text query matched against name, bio, specialties, faculty and major
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Subject id from the catalog (repeatable)
    #[arg(long = "subject")]
    pub(crate) subjects: Vec<String>,
    /// Faculty name (repeatable)
    #[arg(long = "faculty")]
    pub(crate) faculties: Vec<String>,
    /// Minimum average rating
    #[arg(long, default_value_t = 0.0)]
    pub(crate) min_rating: f32,
    /// Minimum hourly rate
    #[arg(long, default_value_t = 0)]
    pub(crate) min_price: u32,
    /// Maximum hourly rate (unbounded when omitted)
    #[arg(long)]
    pub(crate) max_price: Option<u32>,
    /// Day the tutor must be available on, e.g. monday or mon (repeatable)
    #[arg(long = "day")]
    pub(crate) days: Vec<DayKey>,
    /// Minimum years of experience
    #[arg(long, default_value_t = 0.0)]
    pub(crate) min_experience: f32,
    /// Spoken language (repeatable)
    #[arg(long = "language")]
    pub(crate) languages: Vec<String>,
    /// relevance, rating, price-low or price-high (defaults to APP_DEFAULT_SORT)
    #[arg(long)]
    pub(crate) sort: Option<SortMode>,
}

impl SearchArgs {
    pub(crate) fn criteria(&self) -> FilterCriteria {
        let defaults = FilterCriteria::default();
        FilterCriteria {
            search_query: self.query.clone().unwrap_or_default(),
            subjects: self.subjects.iter().cloned().collect(),
            faculties: self.faculties.iter().cloned().collect(),
            min_rating: self.min_rating,
            min_price: self.min_price,
            max_price: self.max_price.unwrap_or(defaults.max_price),
            availability: self.days.iter().copied().collect::<BTreeSet<_>>(),
            min_experience: self.min_experience,
            languages: self.languages.iter().cloned().collect(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Tutor profile id
    #[arg(long)]
    pub(crate) tutor: String,
    /// E-mail address or profile id of the student
    #[arg(long)]
    pub(crate) student: String,
}

pub(crate) fn run_suggest(directory: &Directory, login: &str, json: bool) -> Result<(), AppError> {
    let requester = signed_in_student(directory, login)?;
    let suggestions = MatchSuggestions::build(directory.profiles(), requester);

    if json {
        return print_json(&suggestions);
    }

    println!("Tutor suggestions for {} ({})", requester.name, requester.faculty);
    for view in RankedView::ALL {
        render_view(view, suggestions.view(view));
    }
    Ok(())
}

pub(crate) fn run_search(
    directory: &Directory,
    args: SearchArgs,
    defaults: &SearchConfig,
    json: bool,
) -> Result<(), AppError> {
    let criteria = args.criteria();
    criteria.validate(directory.subjects(), &directory.facets())?;
    let sort = args.sort.unwrap_or(defaults.default_sort);

    let outcome =
        TutorSearch::new(directory.subjects()).run(directory.profiles(), &criteria, sort);

    if json {
        return print_json(&outcome);
    }

    println!(
        "{} of {} tutors match (sorted by {})",
        outcome.results.len(),
        outcome.total_tutors,
        sort
    );
    if outcome.is_empty() {
        println!("No tutors match these filters.");
        return Ok(());
    }

    for tutor in &outcome.results {
        println!("- {}", tutor_line(tutor));
    }
    Ok(())
}

pub(crate) fn run_score(
    directory: &Directory,
    args: ScoreArgs,
    json: bool,
) -> Result<(), AppError> {
    let requester = signed_in_student(directory, &args.student)?;
    let tutor = directory
        .find(&ProfileId(args.tutor.clone()))
        .filter(|profile| profile.role == Role::Tutor)
        .ok_or_else(|| SessionError::UnknownUser(args.tutor.clone()))?;

    let outcome = CompatibilityScorer::new().evaluate(tutor, requester);

    if json {
        return print_json(&outcome);
    }

    println!(
        "Compatibility of {} for {}: {}/100",
        tutor.name, requester.name, outcome.score
    );
    for component in &outcome.components {
        println!(
            "- {:<17} +{:<2} {}",
            component.factor.label(),
            component.points,
            component.notes
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct CatalogView<'a> {
    subjects: Vec<&'a tutor_match::matching::Subject>,
    faculties: BTreeSet<String>,
    languages: BTreeSet<String>,
    days: Vec<&'static str>,
    sort_modes: Vec<&'static str>,
}

pub(crate) fn run_catalog(directory: &Directory, json: bool) -> Result<(), AppError> {
    let facets = directory.facets();
    let view = CatalogView {
        subjects: directory.subjects().iter().collect(),
        faculties: facets.faculties,
        languages: facets.languages,
        days: DayKey::ALL.iter().map(|day| day.label()).collect(),
        sort_modes: SortMode::ALL.iter().map(|mode| mode.label()).collect(),
    };

    if json {
        return print_json(&view);
    }

    println!("Subjects");
    for subject in &view.subjects {
        println!("- {} ({})", subject.name, subject.id);
    }
    println!("\nFaculties");
    for faculty in &view.faculties {
        println!("- {faculty}");
    }
    println!("\nLanguages");
    for language in &view.languages {
        println!("- {language}");
    }
    println!("\nDays: {}", view.days.join(", "));
    println!("Sort modes: {}", view.sort_modes.join(", "));
    Ok(())
}

/// Sign the login in through a fresh session and hand back the resolved profile.
fn signed_in_student<'a>(directory: &'a Directory, login: &str) -> Result<&'a Profile, AppError> {
    let sessions = InMemorySessionStore::default();
    let context = SessionContext::new(&sessions, directory);
    context.sign_in(login)?;
    let profile = context.current_profile()?;

    if profile.role != Role::Student {
        tracing::warn!(
            profile = %profile.id,
            role = profile.role.label(),
            "requester is not a student; preference bonuses will not apply"
        );
    }
    Ok(profile)
}

fn render_view(view: RankedView, entries: &[ScoredTutor<'_>]) {
    println!("\n{}", view.label());
    if entries.is_empty() {
        println!("- no tutors available");
        return;
    }
    for entry in entries {
        println!("- [{:>3}] {}", entry.score, tutor_line(entry.profile));
    }
}

fn tutor_line(tutor: &Profile) -> String {
    format!(
        "{} | {} | {} | {:.1} ({} reviews) | {}/h",
        tutor.name,
        tutor.faculty,
        tutor.specialties.join(", "),
        tutor.rating,
        tutor.review_count,
        tutor.hourly_rate
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_build_default_criteria() {
        let criteria = SearchArgs::default().criteria();
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn args_map_onto_criteria() {
        let args = SearchArgs {
            query: Some("exam".to_string()),
            subjects: vec!["math-calculus".to_string()],
            days: vec![DayKey::Tuesday, DayKey::Tuesday],
            max_price: Some(150_000),
            ..SearchArgs::default()
        };

        let criteria = args.criteria();
        assert_eq!(criteria.search_query, "exam");
        assert!(criteria.subjects.contains("math-calculus"));
        assert_eq!(criteria.availability.len(), 1);
        assert_eq!(criteria.max_price, 150_000);
    }

    #[test]
    fn search_rejects_inverted_price_range() {
        let directory = Directory::bundled().expect("bundled dataset parses");
        let args = SearchArgs {
            min_price: 200_000,
            max_price: Some(100_000),
            ..SearchArgs::default()
        };

        let result = run_search(&directory, args, &SearchConfig::default(), true);
        assert!(matches!(result, Err(AppError::Criteria(_))));
    }

    #[test]
    fn score_requires_a_known_tutor() {
        let directory = Directory::bundled().expect("bundled dataset parses");
        let args = ScoreArgs {
            tutor: "student-002".to_string(),
            student: "student-001".to_string(),
        };

        let result = run_score(&directory, args, true);
        assert!(matches!(
            result,
            Err(AppError::Session(SessionError::UnknownUser(_)))
        ));
    }

    #[test]
    fn suggest_resolves_students_by_email() {
        let directory = Directory::bundled().expect("bundled dataset parses");
        let profile =
            signed_in_student(&directory, "dang.ly@student.hcmut.edu.vn").expect("student found");
        assert_eq!(profile.id.0, "student-002");
    }
}
