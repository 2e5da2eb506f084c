use serde::{Deserialize, Serialize};

use crate::assessments::ConflictMode;
use crate::courses::{CourseId, CourseSummary};

/// Assessment-derived signals for one learner. Both fields are optional;
/// with neither present the ranker falls back to onboarding suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub personality_type: Option<String>,
    pub conflict_mode: Option<ConflictMode>,
}

impl LearnerProfile {
    pub fn has_signal(&self) -> bool {
        self.personality_type.is_some() || self.conflict_mode.is_some()
    }
}

/// Course identifiers split by the learner's relationship to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseHistory {
    pub in_progress: Vec<CourseId>,
    pub completed: Vec<CourseId>,
}

/// Priority tier derived by thresholding the affinity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One ranked suggestion. Ordering in the output list is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub justification: String,
    pub priority: Priority,
    pub category: String,
}

/// Raised by the external course/assessment data collaborator. The ranker
/// absorbs it; it never crosses the ranker boundary.
#[derive(Debug, Clone, thiserror::Error)]
#[error("recommendation data unavailable: {0}")]
pub struct DataUnavailable(pub String);

/// External collaborator supplying learner signals and the catalog snapshot.
pub trait CourseDataProvider: Send + Sync {
    fn learner_profile(&self, user: &str) -> Result<LearnerProfile, DataUnavailable>;
    fn course_history(&self, user: &str) -> Result<CourseHistory, DataUnavailable>;
    fn catalog(&self) -> Result<Vec<CourseSummary>, DataUnavailable>;
}
