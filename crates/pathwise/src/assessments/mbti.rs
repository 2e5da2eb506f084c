use std::collections::BTreeMap;

use super::bank::{MbtiBank, TypeCatalog};
use super::domain::{DimensionScore, Letter, MbtiAnswers, MbtiResult, ScoringError};

/// Score a complete MBTI answer set against the bank.
///
/// Tallies one counter per letter, picks the winner of each dimension pair
/// (the first letter of the pair wins an exact tie), and attaches the
/// descriptive metadata for the resulting four-letter code. Pure and
/// deterministic: the same inputs always produce an identical result.
pub fn score(
    bank: &MbtiBank,
    catalog: &TypeCatalog,
    answers: &MbtiAnswers,
) -> Result<MbtiResult, ScoringError> {
    let missing: Vec<u32> = bank
        .question_ids()
        .filter(|id| !answers.contains_key(id))
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteAssessment { missing });
    }

    let mut tally: BTreeMap<Letter, u32> =
        Letter::ALL.iter().map(|letter| (*letter, 0)).collect();
    for question in &bank.questions {
        let letter = answers[&question.id];
        if !question.options.iter().any(|option| option.value == letter) {
            return Err(ScoringError::InvalidAnswer {
                question_id: question.id,
                value: letter.as_char().to_string(),
            });
        }
        *tally.entry(letter).or_insert(0) += 1;
    }

    let mut type_code = String::with_capacity(4);
    let mut dimensions = BTreeMap::new();
    for dimension in super::domain::Dimension::ALL {
        let (first, second) = dimension.letters();
        let (count_first, count_second) = (tally[&first], tally[&second]);
        let winner = if count_first >= count_second {
            first
        } else {
            second
        };
        let total = count_first + count_second;
        let confidence = percentage(count_first.max(count_second), total);
        type_code.push(winner.as_char());
        dimensions.insert(
            dimension,
            DimensionScore {
                letter: winner,
                description: winner.description().to_string(),
                confidence,
            },
        );
    }

    let profile = catalog.profile(&type_code);
    Ok(MbtiResult {
        type_code,
        dimensions,
        name: profile.name.clone(),
        description: profile.description.clone(),
        strengths: profile.strengths.clone(),
        development_areas: catalog.development_areas.clone(),
        career_suggestions: profile.career_fields.clone(),
    })
}

pub(crate) fn percentage(part: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}
