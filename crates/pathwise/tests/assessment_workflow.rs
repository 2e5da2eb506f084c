//! Integration specifications for the assessment scoring workflow.
//!
//! Scenarios exercise the embedded production banks end to end through the
//! public scoring functions, so bank content, validation, and the scoring
//! algorithms are covered together.

mod common {
    use pathwise::assessments::{
        mbti_bank, tki_bank, ConflictMode, Dimension, Letter, MbtiAnswers, TkiAnswers,
    };

    fn letter_for(dimension: Dimension, code: &str) -> Letter {
        let position = Dimension::ALL
            .iter()
            .position(|candidate| *candidate == dimension)
            .expect("dimension is canonical");
        let wanted = code
            .chars()
            .nth(position)
            .expect("code has four letters");
        let (first, second) = dimension.letters();
        if first.as_char() == wanted {
            first
        } else if second.as_char() == wanted {
            second
        } else {
            panic!("letter {wanted} does not belong to {dimension:?}");
        }
    }

    /// Answer every production question toward the given four-letter code.
    pub(super) fn mbti_answers_for(code: &str) -> MbtiAnswers {
        mbti_bank()
            .questions
            .iter()
            .map(|question| (question.id, letter_for(question.dimension, code)))
            .collect()
    }

    /// Answer every production situation with the same mode.
    pub(super) fn tki_answers_all(mode: ConflictMode) -> TkiAnswers {
        tki_bank()
            .situations
            .iter()
            .map(|situation| (situation.id, mode))
            .collect()
    }

    /// Answer the first `majority` situations with one mode and the rest
    /// with another.
    pub(super) fn tki_answers_split(
        leading: ConflictMode,
        trailing: ConflictMode,
        majority: usize,
    ) -> TkiAnswers {
        tki_bank()
            .situations
            .iter()
            .enumerate()
            .map(|(index, situation)| {
                let mode = if index < majority { leading } else { trailing };
                (situation.id, mode)
            })
            .collect()
    }
}

mod mbti_scoring {
    use super::common::mbti_answers_for;
    use pathwise::assessments::{mbti, mbti_bank, type_catalog, ScoringError};

    #[test]
    fn unanimous_answers_type_the_learner_with_full_confidence() {
        let answers = mbti_answers_for("ESTJ");

        let result =
            mbti::score(mbti_bank(), type_catalog(), &answers).expect("scoring succeeds");

        assert_eq!(result.type_code, "ESTJ");
        assert_eq!(result.name, "The Supervisor");
        assert_eq!(result.dimensions.len(), 4);
        for score in result.dimensions.values() {
            assert_eq!(score.confidence, 100);
        }
        assert!(!result.development_areas.is_empty());
    }

    #[test]
    fn every_type_code_resolves_to_a_named_profile() {
        for code in ["INTJ", "ENFP", "ISFJ", "ESTP"] {
            let result = mbti::score(mbti_bank(), type_catalog(), &mbti_answers_for(code))
                .expect("scoring succeeds");
            assert_eq!(result.type_code, code);
            assert!(!result.name.is_empty(), "{code}");
            assert!(!result.career_suggestions.is_empty(), "{code}");
        }
    }

    #[test]
    fn scoring_is_deterministic_over_the_production_bank() {
        let answers = mbti_answers_for("INFP");

        let first = mbti::score(mbti_bank(), type_catalog(), &answers).expect("scores");
        let second = mbti::score(mbti_bank(), type_catalog(), &answers).expect("scores");

        assert_eq!(first, second);
    }

    #[test]
    fn a_partial_submission_names_every_unanswered_question() {
        let mut answers = mbti_answers_for("ESTJ");
        answers.remove(&5);
        answers.remove(&12);

        let error =
            mbti::score(mbti_bank(), type_catalog(), &answers).expect_err("incomplete");

        assert_eq!(
            error,
            ScoringError::IncompleteAssessment {
                missing: vec![5, 12]
            }
        );
    }
}

mod tki_scoring {
    use super::common::{tki_answers_all, tki_answers_split};
    use pathwise::assessments::{mode_catalog, tki, tki_bank, ConflictMode};

    #[test]
    fn a_unanimous_submission_scores_one_hundred_for_its_mode() {
        let answers = tki_answers_all(ConflictMode::Accommodating);

        let result =
            tki::score(tki_bank(), mode_catalog(), &answers).expect("scoring succeeds");

        assert_eq!(result.primary_mode, ConflictMode::Accommodating);
        assert_eq!(result.mode_name, "Accommodating");
        assert_eq!(result.scores[&ConflictMode::Accommodating], 100);
        assert_eq!(result.scores[&ConflictMode::Competing], 0);
        assert!(!result.growth_areas.is_empty());
    }

    #[test]
    fn a_narrow_majority_still_decides_the_primary_mode() {
        let answers = tki_answers_split(ConflictMode::Competing, ConflictMode::Collaborating, 18);

        let result =
            tki::score(tki_bank(), mode_catalog(), &answers).expect("scoring succeeds");

        assert_eq!(result.primary_mode, ConflictMode::Competing);
        assert_eq!(result.scores[&ConflictMode::Competing], 51);
        assert_eq!(result.scores[&ConflictMode::Collaborating], 49);
    }
}
