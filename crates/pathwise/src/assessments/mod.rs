//! Questionnaire scoring: MBTI personality typing and TKI conflict-style
//! profiling over fixed, versioned question banks.

pub mod bank;
pub mod domain;
pub mod mbti;
pub mod tki;

#[cfg(test)]
mod tests;

pub use bank::{
    mbti_bank, mode_catalog, tki_bank, type_catalog, BankError, MbtiBank, ModeCatalog,
    ModeProfile, TkiBank, TypeCatalog, TypeProfile,
};
pub use domain::{
    ConflictMode, Dimension, DimensionScore, Letter, MbtiAnswers, MbtiOption, MbtiQuestion,
    MbtiResult, ScoringError, TkiAnswers, TkiResponse, TkiResult, TkiSituation,
};
