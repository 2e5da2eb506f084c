//! Shared builders for small, hand-checkable banks.

use crate::assessments::bank::{MbtiBank, TkiBank};
use crate::assessments::domain::{
    ConflictMode, Dimension, Letter, MbtiAnswers, MbtiOption, MbtiQuestion, TkiAnswers,
    TkiResponse, TkiSituation,
};

pub fn mbti_question(id: u32, dimension: Dimension) -> MbtiQuestion {
    let (first, second) = dimension.letters();
    MbtiQuestion {
        id,
        dimension,
        prompt: format!("Question {id}"),
        options: vec![
            MbtiOption {
                text: format!("Lean {}", first.as_char()),
                value: first,
            },
            MbtiOption {
                text: format!("Lean {}", second.as_char()),
                value: second,
            },
        ],
    }
}

/// One question per dimension, ids 1 through 4 in `Dimension::ALL` order.
pub fn small_mbti_bank() -> MbtiBank {
    let questions = Dimension::ALL
        .iter()
        .enumerate()
        .map(|(index, dimension)| mbti_question(index as u32 + 1, *dimension))
        .collect();
    MbtiBank::from_questions("test", questions).expect("small bank is valid")
}

/// Two questions per dimension, ids 1 through 8, so exact ties are possible.
pub fn wide_mbti_bank() -> MbtiBank {
    let mut questions = Vec::new();
    let mut id = 0;
    for dimension in Dimension::ALL {
        for _ in 0..2 {
            id += 1;
            questions.push(mbti_question(id, dimension));
        }
    }
    MbtiBank::from_questions("test", questions).expect("wide bank is valid")
}

pub fn tki_situation(id: u32) -> TkiSituation {
    TkiSituation {
        id,
        prompt: format!("Situation {id}"),
        responses: ConflictMode::CANONICAL_ORDER
            .iter()
            .map(|mode| TkiResponse {
                text: format!("Respond by {}", mode.label()),
                mode: *mode,
            })
            .collect(),
    }
}

/// Five situations, ids 1 through 5, each covering all five modes.
pub fn small_tki_bank() -> TkiBank {
    let situations = (1..=5).map(tki_situation).collect();
    TkiBank::from_situations("test", situations).expect("small bank is valid")
}

pub fn mbti_answers(pairs: &[(u32, Letter)]) -> MbtiAnswers {
    pairs.iter().copied().collect()
}

pub fn tki_answers(pairs: &[(u32, ConflictMode)]) -> TkiAnswers {
    pairs.iter().copied().collect()
}
