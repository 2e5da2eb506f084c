use crate::infra::{InMemoryCertificateStore, InMemoryCourseData, InMemoryCourseRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::sync::Arc;

use pathwise::assessments::{
    mbti, mbti_bank, mode_catalog, tki, tki_bank, type_catalog, ConflictMode, Dimension,
    MbtiAnswers, TkiAnswers,
};
use pathwise::courses::{CourseId, EnrollmentService, UserId};
use pathwise::error::AppError;
use pathwise::recommendations::{
    CourseDataProvider, RecommendationConfig, RecommendationEngine,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Four-letter personality code the simulated learner leans toward
    #[arg(long, default_value = "INTJ", value_parser = parse_type_code)]
    pub(crate) personality: String,
    /// Conflict mode the simulated learner leans toward
    #[arg(long, default_value = "competing", value_parser = parse_mode)]
    pub(crate) conflict_mode: Option<ConflictMode>,
    /// Override the demo date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn parse_type_code(raw: &str) -> Result<String, String> {
    let code = raw.trim().to_uppercase();
    let letters: Vec<char> = code.chars().collect();
    if letters.len() != 4 {
        return Err(format!("'{raw}' is not a four-letter type code"));
    }
    for (index, dimension) in Dimension::ALL.iter().enumerate() {
        let (first, second) = dimension.letters();
        if letters[index] != first.as_char() && letters[index] != second.as_char() {
            return Err(format!(
                "'{}' is not a valid letter for position {} (expected {} or {})",
                letters[index],
                index + 1,
                first.as_char(),
                second.as_char()
            ));
        }
    }
    Ok(code)
}

fn parse_mode(raw: &str) -> Result<ConflictMode, String> {
    ConflictMode::CANONICAL_ORDER
        .into_iter()
        .find(|mode| mode.label() == raw.trim().to_lowercase())
        .ok_or_else(|| format!("'{raw}' is not a conflict mode"))
}

fn mbti_answers_toward(code: &str) -> MbtiAnswers {
    mbti_bank()
        .questions
        .iter()
        .map(|question| {
            let position = Dimension::ALL
                .iter()
                .position(|candidate| *candidate == question.dimension)
                .expect("dimension is canonical");
            let wanted = code.chars().nth(position).expect("validated code");
            let (first, second) = question.dimension.letters();
            let letter = if first.as_char() == wanted { first } else { second };
            (question.id, letter)
        })
        .collect()
}

fn tki_answers_toward(mode: ConflictMode) -> TkiAnswers {
    tki_bank()
        .situations
        .iter()
        .enumerate()
        .map(|(index, situation)| {
            // Mostly the chosen mode, with a sprinkling of collaborating
            // answers so the percentage spread looks like a real session.
            let answer = if index % 7 == 3 {
                ConflictMode::Collaborating
            } else {
                mode
            };
            (situation.id, answer)
        })
        .collect()
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        personality,
        conflict_mode,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mode = conflict_mode.unwrap_or(ConflictMode::Competing);
    let user = "demo-learner";

    println!("Pathwise platform demo ({today})");

    println!("\n== MBTI assessment ==");
    let mbti_result = mbti::score(
        mbti_bank(),
        type_catalog(),
        &mbti_answers_toward(&personality),
    )?;
    println!(
        "Type: {} ({})",
        mbti_result.type_code, mbti_result.name
    );
    for (dimension, score) in &mbti_result.dimensions {
        println!(
            "  {:<22} {} ({}% confidence)",
            dimension.label(),
            score.letter.as_char(),
            score.confidence
        );
    }
    println!("Strengths:");
    for strength in &mbti_result.strengths {
        println!("  - {strength}");
    }

    println!("\n== TKI assessment ==");
    let tki_result = tki::score(tki_bank(), mode_catalog(), &tki_answers_toward(mode))?;
    println!(
        "Primary mode: {} ({})",
        tki_result.primary_mode.label(),
        tki_result.mode_name
    );
    for (scored_mode, percentage) in &tki_result.scores {
        println!("  {:<15} {percentage}%", scored_mode.label());
    }

    let repository = Arc::new(InMemoryCourseRepository::default());
    let certificates = Arc::new(InMemoryCertificateStore::default());
    let enrollment_service = EnrollmentService::new(repository.clone(), certificates);
    let data = InMemoryCourseData::new(repository);
    data.record_personality_type(user, mbti_result.type_code.clone());
    data.record_conflict_mode(user, tki_result.primary_mode);

    let engine = RecommendationEngine::new(RecommendationConfig::default());
    println!("\n== Recommended courses ==");
    let recommendations = engine.recommend_for_user(&data, user);
    for recommendation in &recommendations {
        println!(
            "  [{:?}] {} - {}",
            recommendation.priority, recommendation.title, recommendation.justification
        );
    }

    println!("\n== Enrollment ==");
    let top_course = data
        .catalog()
        .map_err(|err| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))
        })?
        .into_iter()
        .find(|course| {
            recommendations
                .first()
                .map(|top| top.title == course.title)
                .unwrap_or(false)
        })
        .map(|course| course.id)
        .unwrap_or_else(|| CourseId("comm-101".to_string()));
    let enrollment = enrollment_service.enroll(UserId(user.to_string()), top_course.clone(), today)?;
    println!(
        "Enrolled {} in {} on {}",
        enrollment.user_id.0, enrollment.course_id.0, enrollment.enrolled_at
    );

    let midway = enrollment_service.update_progress(
        &UserId(user.to_string()),
        &top_course,
        50,
        today,
    )?;
    println!(
        "Progress: {}% ({})",
        midway.enrollment.progress_percentage,
        midway.enrollment.status.label()
    );

    let finished = enrollment_service.update_progress(
        &UserId(user.to_string()),
        &top_course,
        100,
        today,
    )?;
    println!(
        "Progress: {}% ({})",
        finished.enrollment.progress_percentage,
        finished.enrollment.status.label()
    );
    if let Some(certificate) = finished.certificate {
        println!("Certificate issued: {}", certificate.reference);
    }

    println!("\n== Recommendations after completion ==");
    for recommendation in engine.recommend_for_user(&data, user) {
        println!(
            "  [{:?}] {} - {}",
            recommendation.priority, recommendation.title, recommendation.justification
        );
    }

    Ok(())
}
