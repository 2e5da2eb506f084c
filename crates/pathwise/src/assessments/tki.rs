use std::collections::BTreeMap;

use super::bank::{ModeCatalog, TkiBank};
use super::domain::{ConflictMode, ScoringError, TkiAnswers, TkiResult};
use super::mbti::percentage;

/// Score a complete TKI answer set against the situation bank.
///
/// Tallies one counter per conflict mode. The primary mode is the one with
/// the greatest count; an exact tie resolves to the earliest mode in the
/// canonical order (competing, collaborating, compromising, avoiding,
/// accommodating). Per-mode percentages are rounded independently and not
/// renormalized afterwards.
pub fn score(
    bank: &TkiBank,
    catalog: &ModeCatalog,
    answers: &TkiAnswers,
) -> Result<TkiResult, ScoringError> {
    let missing: Vec<u32> = bank
        .situation_ids()
        .filter(|id| !answers.contains_key(id))
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteAssessment { missing });
    }

    let mut tally: BTreeMap<ConflictMode, u32> = ConflictMode::CANONICAL_ORDER
        .iter()
        .map(|mode| (*mode, 0))
        .collect();
    for situation in &bank.situations {
        let mode = answers[&situation.id];
        if !situation.responses.iter().any(|response| response.mode == mode) {
            return Err(ScoringError::InvalidAnswer {
                question_id: situation.id,
                value: mode.label().to_string(),
            });
        }
        *tally.entry(mode).or_insert(0) += 1;
    }

    let mut primary_mode = ConflictMode::CANONICAL_ORDER[0];
    let mut best = tally[&primary_mode];
    for mode in ConflictMode::CANONICAL_ORDER {
        // Strictly greater only, so earlier canonical modes win ties.
        if tally[&mode] > best {
            primary_mode = mode;
            best = tally[&mode];
        }
    }

    let total = bank.situations.len() as u32;
    let scores: BTreeMap<ConflictMode, u8> = tally
        .iter()
        .map(|(mode, count)| (*mode, percentage(*count, total)))
        .collect();

    let profile = catalog.profile(primary_mode);
    Ok(TkiResult {
        primary_mode,
        mode_name: profile.name.clone(),
        description: profile.description.clone(),
        scores,
        insights: profile.insights.clone(),
        communication_tips: profile.communication_tips.clone(),
        growth_areas: profile.growth_areas.clone(),
    })
}
