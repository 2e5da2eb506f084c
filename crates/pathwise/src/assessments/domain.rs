use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the four MBTI letter pairs tallied independently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Dimension {
    EI,
    SN,
    TF,
    JP,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [Dimension::EI, Dimension::SN, Dimension::TF, Dimension::JP];

    /// Letter pair for this dimension; the first letter wins exact ties.
    pub const fn letters(self) -> (Letter, Letter) {
        match self {
            Dimension::EI => (Letter::E, Letter::I),
            Dimension::SN => (Letter::S, Letter::N),
            Dimension::TF => (Letter::T, Letter::F),
            Dimension::JP => (Letter::J, Letter::P),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::EI => "Energy Direction",
            Dimension::SN => "Information Processing",
            Dimension::TF => "Decision Making",
            Dimension::JP => "Lifestyle Preference",
        }
    }
}

/// A single MBTI preference letter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    pub const ALL: [Letter; 8] = [
        Letter::E,
        Letter::I,
        Letter::S,
        Letter::N,
        Letter::T,
        Letter::F,
        Letter::J,
        Letter::P,
    ];

    pub const fn dimension(self) -> Dimension {
        match self {
            Letter::E | Letter::I => Dimension::EI,
            Letter::S | Letter::N => Dimension::SN,
            Letter::T | Letter::F => Dimension::TF,
            Letter::J | Letter::P => Dimension::JP,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Letter::E => 'E',
            Letter::I => 'I',
            Letter::S => 'S',
            Letter::N => 'N',
            Letter::T => 'T',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::P => 'P',
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Letter::E => "Extraversion - You gain energy from external interaction",
            Letter::I => "Introversion - You gain energy from internal reflection",
            Letter::S => "Sensing - You prefer concrete, factual information",
            Letter::N => "Intuition - You prefer abstract concepts and possibilities",
            Letter::T => "Thinking - You focus on logical analysis and objective criteria",
            Letter::F => "Feeling - You focus on values and impact on people",
            Letter::J => "Judging - You prefer structure, plans, and closure",
            Letter::P => {
                "Perceiving - You prefer flexibility, spontaneity, and keeping options open"
            }
        }
    }
}

/// The five TKI conflict-handling modes. Declaration order is the canonical
/// order used for tie-breaking: the earliest declared mode wins an exact tie.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConflictMode {
    Competing,
    Collaborating,
    Compromising,
    Avoiding,
    Accommodating,
}

impl ConflictMode {
    pub const CANONICAL_ORDER: [ConflictMode; 5] = [
        ConflictMode::Competing,
        ConflictMode::Collaborating,
        ConflictMode::Compromising,
        ConflictMode::Avoiding,
        ConflictMode::Accommodating,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ConflictMode::Competing => "competing",
            ConflictMode::Collaborating => "collaborating",
            ConflictMode::Compromising => "compromising",
            ConflictMode::Avoiding => "avoiding",
            ConflictMode::Accommodating => "accommodating",
        }
    }
}

/// Immutable MBTI catalog entry. Created once when the bank loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbtiQuestion {
    pub id: u32,
    pub dimension: Dimension,
    pub prompt: String,
    pub options: Vec<MbtiOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbtiOption {
    pub text: String,
    pub value: Letter,
}

/// Immutable TKI catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TkiSituation {
    pub id: u32,
    pub prompt: String,
    pub responses: Vec<TkiResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TkiResponse {
    pub text: String,
    pub mode: ConflictMode,
}

/// Question id to selected option tag. At most one answer per question; a
/// complete set has exactly one entry per bank question.
pub type MbtiAnswers = BTreeMap<u32, Letter>;
pub type TkiAnswers = BTreeMap<u32, ConflictMode>;

/// Outcome for one MBTI dimension: the winning letter and how decisively it
/// won. Confidence is `round(max / total * 100)` and sits in [50, 100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub letter: Letter,
    pub description: String,
    pub confidence: u8,
}

/// Full MBTI scoring result. Immutable once computed; ownership passes to
/// the caller for persistence or report rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbtiResult {
    pub type_code: String,
    pub dimensions: BTreeMap<Dimension, DimensionScore>,
    pub name: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub career_suggestions: Vec<String>,
}

/// Full TKI scoring result. Percentages are rounded independently and are
/// not renormalized, so they may sum slightly above or below 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TkiResult {
    pub primary_mode: ConflictMode,
    pub mode_name: String,
    pub description: String,
    pub scores: BTreeMap<ConflictMode, u8>,
    pub insights: Vec<String>,
    pub communication_tips: Vec<String>,
    pub growth_areas: Vec<String>,
}

/// Error raised while scoring a submitted answer set. Fatal to the scoring
/// call; retries belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("assessment incomplete: {} unanswered question(s)", missing.len())]
    IncompleteAssessment { missing: Vec<u32> },
    #[error("answer '{value}' is not a valid option for question {question_id}")]
    InvalidAnswer { question_id: u32, value: String },
}
