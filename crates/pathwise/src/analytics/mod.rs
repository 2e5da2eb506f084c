//! Learning analytics: aggregate statistics computed over a learner's
//! assessment history and course progress rows. Pure functions; the rows
//! arrive from the managed backend, which stays an external collaborator.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::courses::CourseId;

/// Assessment kinds tracked by the platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Mbti,
    Tki,
    SkillsAssessment,
    LearningStyle,
}

impl AssessmentKind {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentKind::Mbti => "MBTI",
            AssessmentKind::Tki => "TKI",
            AssessmentKind::SkillsAssessment => "SKILLS_ASSESSMENT",
            AssessmentKind::LearningStyle => "LEARNING_STYLE",
        }
    }
}

/// One completed assessment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub kind: AssessmentKind,
    pub completed_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
    Paused,
}

/// One course-progress row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRow {
    pub course_id: CourseId,
    pub status: ProgressStatus,
    pub time_spent_minutes: u32,
    pub last_accessed: NaiveDate,
}

/// Aggregate learner statistics for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_assessments: u32,
    pub total_learning_time: u32,
    pub courses_completed: u32,
    pub courses_in_progress: u32,
    pub achievements: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Trailing-six-month assessment counts, oldest month first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub month: &'static str,
    pub count: u32,
}

/// Per-kind assessment counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindCount {
    pub name: &'static str,
    pub value: u32,
}

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How many days back the streak scan looks.
const STREAK_WINDOW_DAYS: u32 = 30;

pub fn user_stats(
    assessments: &[AssessmentRecord],
    progress: &[ProgressRow],
    today: NaiveDate,
) -> UserStats {
    let courses_completed = progress
        .iter()
        .filter(|row| row.status == ProgressStatus::Completed)
        .count() as u32;
    let courses_in_progress = progress
        .iter()
        .filter(|row| row.status == ProgressStatus::InProgress)
        .count() as u32;
    let total_learning_time = progress.iter().map(|row| row.time_spent_minutes).sum();

    let current_streak = current_streak(progress, today);
    let achievements = achievement_count(assessments.len() as u32, courses_completed, current_streak);

    UserStats {
        total_assessments: assessments.len() as u32,
        total_learning_time,
        courses_completed,
        courses_in_progress,
        achievements,
        current_streak,
        // Without the activity ledger, the best available lower bound.
        longest_streak: current_streak,
    }
}

/// Consecutive days with course activity ending today, capped at the scan
/// window.
pub fn current_streak(progress: &[ProgressRow], today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;
    for _ in 0..STREAK_WINDOW_DAYS {
        let active = progress.iter().any(|row| row.last_accessed == cursor);
        if !active {
            break;
        }
        streak += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    streak
}

/// Milestone count across assessment, course, and streak thresholds.
fn achievement_count(assessments: u32, courses: u32, streak: u32) -> u32 {
    let mut count = 0;
    for threshold in [1, 2, 5] {
        if assessments >= threshold {
            count += 1;
        }
    }
    for threshold in [1, 5, 10] {
        if courses >= threshold {
            count += 1;
        }
    }
    for threshold in [7, 30] {
        if streak >= threshold {
            count += 1;
        }
    }
    count
}

/// Assessment counts per month for the trailing six months, oldest first.
pub fn monthly_trend(assessments: &[AssessmentRecord], today: NaiveDate) -> Vec<MonthBucket> {
    let mut counts = [0u32; 12];
    for record in assessments {
        counts[record.completed_at.month0() as usize] += 1;
    }

    let current = today.month0() as usize;
    (0..6)
        .rev()
        .map(|offset| {
            let index = (current + 12 - offset) % 12;
            MonthBucket {
                month: MONTH_NAMES[index],
                count: counts[index],
            }
        })
        .collect()
}

/// Counts per assessment kind, in canonical kind order.
pub fn kind_distribution(assessments: &[AssessmentRecord]) -> Vec<KindCount> {
    let mut distribution: BTreeMap<AssessmentKind, u32> = BTreeMap::new();
    for record in assessments {
        *distribution.entry(record.kind).or_insert(0) += 1;
    }
    distribution
        .into_iter()
        .map(|(kind, value)| KindCount {
            name: kind.label(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn row(course: &str, status: ProgressStatus, minutes: u32, accessed: NaiveDate) -> ProgressRow {
        ProgressRow {
            course_id: CourseId(course.to_string()),
            status,
            time_spent_minutes: minutes,
            last_accessed: accessed,
        }
    }

    #[test]
    fn stats_aggregate_counts_and_time() {
        let today = day(2026, 8, 30);
        let assessments = vec![
            AssessmentRecord {
                kind: AssessmentKind::Mbti,
                completed_at: day(2026, 8, 1),
            },
            AssessmentRecord {
                kind: AssessmentKind::Tki,
                completed_at: day(2026, 8, 15),
            },
        ];
        let progress = vec![
            row("c-1", ProgressStatus::Completed, 120, today),
            row("c-2", ProgressStatus::InProgress, 45, day(2026, 8, 20)),
            row("c-3", ProgressStatus::Paused, 30, day(2026, 7, 2)),
        ];

        let stats = user_stats(&assessments, &progress, today);

        assert_eq!(stats.total_assessments, 2);
        assert_eq!(stats.courses_completed, 1);
        assert_eq!(stats.courses_in_progress, 1);
        assert_eq!(stats.total_learning_time, 195);
        // 2 assessments -> thresholds 1 and 2; 1 completed course -> 1.
        assert_eq!(stats.achievements, 3);
    }

    #[test]
    fn streak_counts_consecutive_days_only() {
        let today = day(2026, 8, 30);
        let progress = vec![
            row("c-1", ProgressStatus::InProgress, 10, today),
            row("c-2", ProgressStatus::InProgress, 10, day(2026, 8, 29)),
            row("c-3", ProgressStatus::InProgress, 10, day(2026, 8, 27)),
        ];

        // Gap on the 28th stops the scan at two days.
        assert_eq!(current_streak(&progress, today), 2);
    }

    #[test]
    fn streak_is_zero_without_activity_today() {
        let today = day(2026, 8, 30);
        let progress = vec![row("c-1", ProgressStatus::InProgress, 10, day(2026, 8, 29))];
        assert_eq!(current_streak(&progress, today), 0);
    }

    #[test]
    fn monthly_trend_returns_trailing_six_months() {
        let today = day(2026, 8, 30);
        let assessments = vec![
            AssessmentRecord {
                kind: AssessmentKind::Mbti,
                completed_at: day(2026, 8, 1),
            },
            AssessmentRecord {
                kind: AssessmentKind::Tki,
                completed_at: day(2026, 6, 10),
            },
        ];

        let trend = monthly_trend(&assessments, today);

        assert_eq!(trend.len(), 6);
        assert_eq!(trend[0].month, "Mar");
        assert_eq!(trend[5].month, "Aug");
        assert_eq!(trend[5].count, 1);
        assert_eq!(trend[3].month, "Jun");
        assert_eq!(trend[3].count, 1);
    }

    #[test]
    fn distribution_groups_by_kind() {
        let assessments = vec![
            AssessmentRecord {
                kind: AssessmentKind::Mbti,
                completed_at: day(2026, 1, 1),
            },
            AssessmentRecord {
                kind: AssessmentKind::Mbti,
                completed_at: day(2026, 2, 1),
            },
            AssessmentRecord {
                kind: AssessmentKind::Tki,
                completed_at: day(2026, 3, 1),
            },
        ];

        let distribution = kind_distribution(&assessments);

        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution[0].name, "MBTI");
        assert_eq!(distribution[0].value, 2);
        assert_eq!(distribution[1].name, "TKI");
        assert_eq!(distribution[1].value, 1);
    }
}
