//! Declarative affinity rules. Each rule is a (condition, bonus,
//! justification) tuple evaluated uniformly, so new affinities are added as
//! data rather than as fresh branches in the engine.

use crate::assessments::ConflictMode;
use crate::courses::{CourseSummary, DifficultyTier};

use super::domain::LearnerProfile;

#[derive(Debug, Clone, Copy)]
pub(crate) enum RuleCondition {
    /// Course difficulty matches the tier associated with the learner's
    /// conflict mode.
    DifficultyMatchesMode,
    /// Personality type code starts with the prefix and the course category
    /// contains the keyword.
    TypePrefix {
        prefix: &'static str,
        category_keyword: &'static str,
    },
    /// Personality type code contains the letter and the course category
    /// contains the keyword.
    TypeLetter {
        letter: char,
        category_keyword: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct AffinityRule {
    pub(crate) condition: RuleCondition,
    pub(crate) bonus: i32,
    pub(crate) justification: &'static str,
}

pub(crate) const AFFINITY_RULES: &[AffinityRule] = &[
    AffinityRule {
        condition: RuleCondition::DifficultyMatchesMode,
        bonus: 10,
        justification: "matches the pace suited to your conflict style",
    },
    AffinityRule {
        condition: RuleCondition::TypePrefix {
            prefix: "IN",
            category_keyword: "strategy",
        },
        bonus: 5,
        justification: "strategic coursework suits your big-picture thinking",
    },
    AffinityRule {
        condition: RuleCondition::TypePrefix {
            prefix: "ES",
            category_keyword: "communication",
        },
        bonus: 5,
        justification: "communication topics play to your outward energy",
    },
    AffinityRule {
        condition: RuleCondition::TypeLetter {
            letter: 'T',
            category_keyword: "technical",
        },
        bonus: 5,
        justification: "technical depth rewards your analytical preference",
    },
    AffinityRule {
        condition: RuleCondition::TypeLetter {
            letter: 'F',
            category_keyword: "leadership",
        },
        bonus: 5,
        justification: "people-centered leadership fits your values focus",
    },
];

/// Difficulty tier a learner with the given conflict mode tends to thrive
/// in. Assertive, engaged modes point at heavier material.
pub(crate) const fn preferred_difficulty(mode: ConflictMode) -> DifficultyTier {
    match mode {
        ConflictMode::Competing => DifficultyTier::Advanced,
        ConflictMode::Collaborating | ConflictMode::Compromising => DifficultyTier::Intermediate,
        ConflictMode::Avoiding | ConflictMode::Accommodating => DifficultyTier::Beginner,
    }
}

impl AffinityRule {
    pub(crate) fn matches(&self, profile: &LearnerProfile, course: &CourseSummary) -> bool {
        let category = course.category.to_lowercase();
        match self.condition {
            RuleCondition::DifficultyMatchesMode => profile
                .conflict_mode
                .map(|mode| preferred_difficulty(mode) == course.difficulty)
                .unwrap_or(false),
            RuleCondition::TypePrefix {
                prefix,
                category_keyword,
            } => {
                profile
                    .personality_type
                    .as_deref()
                    .map(|code| code.starts_with(prefix))
                    .unwrap_or(false)
                    && category.contains(category_keyword)
            }
            RuleCondition::TypeLetter {
                letter,
                category_keyword,
            } => {
                profile
                    .personality_type
                    .as_deref()
                    .map(|code| code.contains(letter))
                    .unwrap_or(false)
                    && category.contains(category_keyword)
            }
        }
    }
}
