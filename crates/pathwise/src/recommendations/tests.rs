use crate::assessments::ConflictMode;
use crate::courses::{CourseId, CourseSummary, DifficultyTier};

use super::domain::{
    CourseDataProvider, CourseHistory, DataUnavailable, LearnerProfile, Priority,
};
use super::engine::{onboarding_recommendations, RecommendationConfig, RecommendationEngine};

fn course(id: &str, title: &str, category: &str, difficulty: DifficultyTier) -> CourseSummary {
    CourseSummary {
        id: CourseId(id.to_string()),
        title: title.to_string(),
        category: category.to_string(),
        difficulty,
    }
}

fn engine() -> RecommendationEngine {
    RecommendationEngine::new(RecommendationConfig::default())
}

fn profile(personality_type: Option<&str>, conflict_mode: Option<ConflictMode>) -> LearnerProfile {
    LearnerProfile {
        personality_type: personality_type.map(str::to_string),
        conflict_mode,
    }
}

#[test]
fn no_assessment_signal_serves_the_fixed_onboarding_list() {
    let catalog = vec![course("c-1", "Rust Basics", "Technical", DifficultyTier::Beginner)];

    let results = engine().recommend(
        &LearnerProfile::default(),
        &CourseHistory::default(),
        &catalog,
    );

    assert_eq!(results, onboarding_recommendations());
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Complete Your Assessments");
    assert_eq!(results[0].priority, Priority::High);
    assert_eq!(results[1].title, "Explore Course Catalog");
    assert_eq!(results[1].priority, Priority::Medium);
}

#[test]
fn started_and_finished_courses_are_never_recommended() {
    let catalog = vec![
        course("c-1", "Doing", "Technical", DifficultyTier::Beginner),
        course("c-2", "Done", "Technical", DifficultyTier::Beginner),
        course("c-3", "Fresh", "Technical", DifficultyTier::Beginner),
    ];
    let history = CourseHistory {
        in_progress: vec![CourseId("c-1".to_string())],
        completed: vec![CourseId("c-2".to_string())],
    };

    let results = engine().recommend(
        &profile(Some("ESFP"), None),
        &history,
        &catalog,
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Fresh");
}

#[test]
fn difficulty_match_alone_reaches_high_priority() {
    let catalog = vec![course(
        "c-1",
        "Hard Negotiation",
        "Business",
        DifficultyTier::Advanced,
    )];

    let results = engine().recommend(
        &profile(None, Some(ConflictMode::Competing)),
        &CourseHistory::default(),
        &catalog,
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].priority, Priority::High);
    assert_eq!(
        results[0].justification,
        "Matches the pace suited to your conflict style"
    );
}

#[test]
fn bonuses_stack_and_justifications_join_in_rule_order() {
    let catalog = vec![course(
        "c-1",
        "Platform Roadmaps",
        "Technical Strategy",
        DifficultyTier::Advanced,
    )];

    let results = engine().recommend(
        &profile(Some("INTJ"), Some(ConflictMode::Competing)),
        &CourseHistory::default(),
        &catalog,
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].priority, Priority::High);
    assert_eq!(
        results[0].justification,
        "Matches the pace suited to your conflict style; \
         strategic coursework suits your big-picture thinking; \
         technical depth rewards your analytical preference"
    );
}

#[test]
fn a_single_letter_bonus_lands_in_the_medium_band() {
    let catalog = vec![course(
        "c-1",
        "Systems Deep Dive",
        "Technical",
        DifficultyTier::Beginner,
    )];

    let results = engine().recommend(
        &profile(Some("ESTP"), None),
        &CourseHistory::default(),
        &catalog,
    );

    assert_eq!(results[0].priority, Priority::Medium);
}

#[test]
fn unmatched_courses_fall_to_low_priority_with_a_generic_reason() {
    let catalog = vec![course(
        "c-1",
        "Watercolor Painting",
        "Creative Arts",
        DifficultyTier::Beginner,
    )];

    let results = engine().recommend(
        &profile(Some("INTJ"), Some(ConflictMode::Competing)),
        &CourseHistory::default(),
        &catalog,
    );

    assert_eq!(results[0].priority, Priority::Low);
    assert_eq!(
        results[0].justification,
        "Broaden your range with Creative Arts coursework"
    );
}

#[test]
fn equal_scores_preserve_catalog_order() {
    let catalog = vec![
        course("c-1", "First", "Creative Arts", DifficultyTier::Beginner),
        course("c-2", "Second", "Creative Arts", DifficultyTier::Beginner),
        course("c-3", "Third", "Creative Arts", DifficultyTier::Beginner),
    ];

    let results = engine().recommend(
        &profile(Some("ESFP"), None),
        &CourseHistory::default(),
        &catalog,
    );

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[test]
fn higher_scores_sort_first_and_output_is_capped() {
    let mut catalog: Vec<CourseSummary> = (1..=6)
        .map(|n| {
            course(
                &format!("c-{n}"),
                &format!("Filler {n}"),
                "Creative Arts",
                DifficultyTier::Beginner,
            )
        })
        .collect();
    catalog.push(course(
        "c-7",
        "Advanced Tactics",
        "Business",
        DifficultyTier::Advanced,
    ));

    let results = engine().recommend(
        &profile(None, Some(ConflictMode::Competing)),
        &CourseHistory::default(),
        &catalog,
    );

    assert_eq!(results.len(), 5);
    assert_eq!(results[0].title, "Advanced Tactics");
    assert_eq!(results[1].title, "Filler 1");
}

struct FixedProvider {
    profile: LearnerProfile,
    catalog: Vec<CourseSummary>,
}

impl CourseDataProvider for FixedProvider {
    fn learner_profile(&self, _user: &str) -> Result<LearnerProfile, DataUnavailable> {
        Ok(self.profile.clone())
    }

    fn course_history(&self, _user: &str) -> Result<CourseHistory, DataUnavailable> {
        Ok(CourseHistory::default())
    }

    fn catalog(&self) -> Result<Vec<CourseSummary>, DataUnavailable> {
        Ok(self.catalog.clone())
    }
}

struct DownProvider;

impl CourseDataProvider for DownProvider {
    fn learner_profile(&self, _user: &str) -> Result<LearnerProfile, DataUnavailable> {
        Err(DataUnavailable("store offline".to_string()))
    }

    fn course_history(&self, _user: &str) -> Result<CourseHistory, DataUnavailable> {
        Err(DataUnavailable("store offline".to_string()))
    }

    fn catalog(&self) -> Result<Vec<CourseSummary>, DataUnavailable> {
        Err(DataUnavailable("store offline".to_string()))
    }
}

#[test]
fn provider_backed_ranking_uses_the_fetched_signals() {
    let provider = FixedProvider {
        profile: profile(Some("INFP"), None),
        catalog: vec![course(
            "c-1",
            "Leading with Empathy",
            "Leadership",
            DifficultyTier::Beginner,
        )],
    };

    let results = engine().recommend_for_user(&provider, "u-1");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Leading with Empathy");
    assert_eq!(results[0].priority, Priority::Medium);
}

#[test]
fn provider_failure_degrades_to_the_onboarding_list() {
    let results = engine().recommend_for_user(&DownProvider, "u-1");

    assert_eq!(results, onboarding_recommendations());
}
