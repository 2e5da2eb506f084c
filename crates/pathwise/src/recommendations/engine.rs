use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::courses::{CourseId, CourseSummary};

use super::domain::{
    CourseDataProvider, CourseHistory, DataUnavailable, LearnerProfile, Priority, Recommendation,
};
use super::rules::AFFINITY_RULES;

/// Ranker configuration: output cap and the score thresholds that band
/// results into priority tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    pub max_results: usize,
    pub high_threshold: i32,
    pub medium_threshold: i32,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            high_threshold: 10,
            medium_threshold: 5,
        }
    }
}

/// Stateless ranker applying the affinity-rule table to a catalog snapshot.
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// Rank the catalog for a learner. Never fails: with no assessment
    /// signal the fixed onboarding list is returned regardless of catalog
    /// contents.
    pub fn recommend(
        &self,
        profile: &LearnerProfile,
        history: &CourseHistory,
        catalog: &[CourseSummary],
    ) -> Vec<Recommendation> {
        if !profile.has_signal() {
            return onboarding_recommendations();
        }

        let mut scored: Vec<(i32, &CourseSummary, Vec<&'static str>)> = catalog
            .iter()
            .filter(|course| !is_excluded(&course.id, history))
            .map(|course| {
                let mut score = 0;
                let mut reasons = Vec::new();
                for rule in AFFINITY_RULES {
                    if rule.matches(profile, course) {
                        score += rule.bonus;
                        reasons.push(rule.justification);
                    }
                }
                (score, course, reasons)
            })
            .collect();

        // Stable sort keeps catalog order for equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.config.max_results);

        scored
            .into_iter()
            .map(|(score, course, reasons)| Recommendation {
                title: course.title.clone(),
                justification: justification(course, &reasons),
                priority: self.priority_for(score),
                category: course.category.clone(),
            })
            .collect()
    }

    /// Rank using data pulled from the external collaborator. Collaborator
    /// failures degrade to the onboarding list; they never propagate.
    pub fn recommend_for_user<P: CourseDataProvider>(
        &self,
        provider: &P,
        user: &str,
    ) -> Vec<Recommendation> {
        match self.try_recommend(provider, user) {
            Ok(recommendations) => recommendations,
            Err(error) => {
                warn!(%error, user, "course data unavailable, serving onboarding fallback");
                onboarding_recommendations()
            }
        }
    }

    fn try_recommend<P: CourseDataProvider>(
        &self,
        provider: &P,
        user: &str,
    ) -> Result<Vec<Recommendation>, DataUnavailable> {
        let profile = provider.learner_profile(user)?;
        let history = provider.course_history(user)?;
        let catalog = provider.catalog()?;
        Ok(self.recommend(&profile, &history, &catalog))
    }

    fn priority_for(&self, score: i32) -> Priority {
        if score >= self.config.high_threshold {
            Priority::High
        } else if score >= self.config.medium_threshold {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

fn is_excluded(course: &CourseId, history: &CourseHistory) -> bool {
    history.in_progress.contains(course) || history.completed.contains(course)
}

fn justification(course: &CourseSummary, reasons: &[&'static str]) -> String {
    if reasons.is_empty() {
        format!("Broaden your range with {} coursework", course.category)
    } else {
        let mut text = reasons.join("; ");
        if let Some(first) = text.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        text
    }
}

/// Fixed suggestions served before any assessment has been taken, and as
/// the degraded result when course data cannot be fetched.
pub fn onboarding_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            title: "Complete Your Assessments".to_string(),
            justification: "Take MBTI and TKI assessments to receive personalized recommendations"
                .to_string(),
            priority: Priority::High,
            category: "Getting Started".to_string(),
        },
        Recommendation {
            title: "Explore Course Catalog".to_string(),
            justification: "Browse available courses across various categories".to_string(),
            priority: Priority::Medium,
            category: "Learning".to_string(),
        },
    ]
}
