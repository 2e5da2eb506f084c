use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for learners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for catalog courses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub String);

/// Catalog difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    pub const fn label(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "beginner",
            DifficultyTier::Intermediate => "intermediate",
            DifficultyTier::Advanced => "advanced",
        }
    }
}

/// Catalog snapshot entry consumed by the recommendation ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
    pub category: String,
    pub difficulty: DifficultyTier,
}

/// Lifecycle of an enrollment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Active,
    Completed,
}

impl EnrollmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Completed => "completed",
        }
    }
}

/// A learner's enrollment in one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub enrolled_at: NaiveDate,
    pub progress_percentage: u8,
    pub status: EnrollmentStatus,
    pub completed_at: Option<NaiveDate>,
}

impl Enrollment {
    pub fn started(user_id: UserId, course_id: CourseId, enrolled_at: NaiveDate) -> Self {
        Self {
            user_id,
            course_id,
            enrolled_at,
            progress_percentage: 0,
            status: EnrollmentStatus::Active,
            completed_at: None,
        }
    }
}

/// Completion certificate issued once per (user, course).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub issued_at: NaiveDate,
    pub reference: String,
}

impl Certificate {
    pub fn for_completion(user_id: UserId, course_id: CourseId, issued_at: NaiveDate) -> Self {
        let reference = format!("certificates/{}_{}_{}.pdf", user_id.0, course_id.0, issued_at);
        Self {
            user_id,
            course_id,
            issued_at,
            reference,
        }
    }
}
