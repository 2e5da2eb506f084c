//! Versioned question banks and metadata catalogs.
//!
//! The production banks are JSON assets under `data/`, embedded at compile
//! time and parsed once on first use. Content edits ship as data changes;
//! the scoring algorithms never change with them.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::domain::{ConflictMode, Dimension, MbtiQuestion, TkiSituation};

const MBTI_QUESTIONS_JSON: &str = include_str!("../../data/mbti_questions.json");
const TKI_SITUATIONS_JSON: &str = include_str!("../../data/tki_situations.json");
const PERSONALITY_TYPES_JSON: &str = include_str!("../../data/personality_types.json");
const CONFLICT_MODES_JSON: &str = include_str!("../../data/conflict_modes.json");

/// Error raised while loading or validating a bank asset.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("malformed bank asset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate question id {0}")]
    DuplicateId(u32),
    #[error("question {question_id} lists {count} option(s); at least 2 required")]
    TooFewOptions { question_id: u32, count: usize },
    #[error("question {question_id} carries a tag outside its {dimension:?} dimension")]
    ForeignOption { question_id: u32, dimension: Dimension },
    #[error("dimension {0:?} has no questions")]
    MissingDimension(Dimension),
    #[error("situation {0} does not cover all five conflict modes")]
    IncompleteModes(u32),
    #[error("default type code '{0}' is not in the catalog")]
    MissingDefault(String),
    #[error("mode '{}' is missing from the catalog", .0.label())]
    MissingMode(ConflictMode),
}

/// The MBTI question bank, fixed and versioned.
#[derive(Debug, Clone, Deserialize)]
pub struct MbtiBank {
    pub version: String,
    pub questions: Vec<MbtiQuestion>,
}

impl MbtiBank {
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let bank: MbtiBank = serde_json::from_str(raw)?;
        bank.validate()?;
        Ok(bank)
    }

    pub fn from_questions(version: &str, questions: Vec<MbtiQuestion>) -> Result<Self, BankError> {
        let bank = MbtiBank {
            version: version.to_string(),
            questions,
        };
        bank.validate()?;
        Ok(bank)
    }

    fn validate(&self) -> Result<(), BankError> {
        let mut seen = BTreeSet::new();
        let mut covered = BTreeSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(BankError::DuplicateId(question.id));
            }
            if question.options.len() < 2 {
                return Err(BankError::TooFewOptions {
                    question_id: question.id,
                    count: question.options.len(),
                });
            }
            for option in &question.options {
                if option.value.dimension() != question.dimension {
                    return Err(BankError::ForeignOption {
                        question_id: question.id,
                        dimension: question.dimension,
                    });
                }
            }
            covered.insert(question.dimension);
        }
        for dimension in Dimension::ALL {
            if !covered.contains(&dimension) {
                return Err(BankError::MissingDimension(dimension));
            }
        }
        Ok(())
    }

    pub fn question_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.questions.iter().map(|question| question.id)
    }
}

/// The TKI situation bank, fixed and versioned.
#[derive(Debug, Clone, Deserialize)]
pub struct TkiBank {
    pub version: String,
    pub situations: Vec<TkiSituation>,
}

impl TkiBank {
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let bank: TkiBank = serde_json::from_str(raw)?;
        bank.validate()?;
        Ok(bank)
    }

    pub fn from_situations(
        version: &str,
        situations: Vec<TkiSituation>,
    ) -> Result<Self, BankError> {
        let bank = TkiBank {
            version: version.to_string(),
            situations,
        };
        bank.validate()?;
        Ok(bank)
    }

    fn validate(&self) -> Result<(), BankError> {
        let mut seen = BTreeSet::new();
        for situation in &self.situations {
            if !seen.insert(situation.id) {
                return Err(BankError::DuplicateId(situation.id));
            }
            let modes: BTreeSet<ConflictMode> = situation
                .responses
                .iter()
                .map(|response| response.mode)
                .collect();
            if modes.len() != ConflictMode::CANONICAL_ORDER.len() {
                return Err(BankError::IncompleteModes(situation.id));
            }
        }
        Ok(())
    }

    pub fn situation_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.situations.iter().map(|situation| situation.id)
    }
}

/// Static descriptive metadata for one of the 16 personality types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeProfile {
    pub name: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub career_fields: Vec<String>,
}

/// Lookup table keyed by the 16 type codes, with a designated default entry
/// used when a code is somehow absent (a correct bank never produces one).
#[derive(Debug, Clone, Deserialize)]
pub struct TypeCatalog {
    pub version: String,
    default: String,
    pub development_areas: Vec<String>,
    types: BTreeMap<String, TypeProfile>,
}

impl TypeCatalog {
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let catalog: TypeCatalog = serde_json::from_str(raw)?;
        if !catalog.types.contains_key(&catalog.default) {
            return Err(BankError::MissingDefault(catalog.default));
        }
        Ok(catalog)
    }

    pub fn profile(&self, type_code: &str) -> &TypeProfile {
        self.types
            .get(type_code)
            .unwrap_or_else(|| &self.types[&self.default])
    }
}

/// Static insight text for one conflict mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeProfile {
    pub name: String,
    pub description: String,
    pub insights: Vec<String>,
    pub communication_tips: Vec<String>,
    pub growth_areas: Vec<String>,
}

/// Lookup table covering all five conflict modes.
#[derive(Debug, Clone, Deserialize)]
pub struct ModeCatalog {
    pub version: String,
    modes: BTreeMap<ConflictMode, ModeProfile>,
}

impl ModeCatalog {
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let catalog: ModeCatalog = serde_json::from_str(raw)?;
        for mode in ConflictMode::CANONICAL_ORDER {
            if !catalog.modes.contains_key(&mode) {
                return Err(BankError::MissingMode(mode));
            }
        }
        Ok(catalog)
    }

    pub fn profile(&self, mode: ConflictMode) -> &ModeProfile {
        &self.modes[&mode]
    }
}

/// Production MBTI bank (64 questions, 16 per dimension).
pub fn mbti_bank() -> &'static MbtiBank {
    static BANK: OnceLock<MbtiBank> = OnceLock::new();
    BANK.get_or_init(|| {
        MbtiBank::from_json(MBTI_QUESTIONS_JSON).expect("embedded MBTI bank is valid")
    })
}

/// Production TKI bank (35 situations).
pub fn tki_bank() -> &'static TkiBank {
    static BANK: OnceLock<TkiBank> = OnceLock::new();
    BANK.get_or_init(|| {
        TkiBank::from_json(TKI_SITUATIONS_JSON).expect("embedded TKI bank is valid")
    })
}

pub fn type_catalog() -> &'static TypeCatalog {
    static CATALOG: OnceLock<TypeCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        TypeCatalog::from_json(PERSONALITY_TYPES_JSON).expect("embedded type catalog is valid")
    })
}

pub fn mode_catalog() -> &'static ModeCatalog {
    static CATALOG: OnceLock<ModeCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        ModeCatalog::from_json(CONFLICT_MODES_JSON).expect("embedded mode catalog is valid")
    })
}
