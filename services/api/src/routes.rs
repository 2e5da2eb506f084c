use crate::infra::{AppState, InMemoryCourseData};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use pathwise::analytics::{
    kind_distribution, monthly_trend, user_stats, AssessmentRecord, KindCount, MonthBucket,
    ProgressRow, UserStats,
};
use pathwise::assessments::{
    mbti, mbti_bank, mode_catalog, tki, tki_bank, type_catalog, MbtiAnswers, MbtiResult,
    TkiAnswers, TkiResult,
};
use pathwise::courses::{course_router, CertificateIssuer, CourseRepository, EnrollmentService};
use pathwise::error::AppError;
use pathwise::recommendations::{Recommendation, RecommendationEngine};

/// Shared handles for the scoring and recommendation endpoints.
#[derive(Clone)]
pub(crate) struct ServiceState {
    pub(crate) data: Arc<InMemoryCourseData>,
    pub(crate) engine: Arc<RecommendationEngine>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MbtiScoreRequest {
    #[serde(default)]
    pub(crate) user_id: Option<String>,
    pub(crate) answers: MbtiAnswers,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TkiScoreRequest {
    #[serde(default)]
    pub(crate) user_id: Option<String>,
    pub(crate) answers: TkiAnswers,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    pub(crate) user_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyticsRequest {
    #[serde(default)]
    pub(crate) assessments: Vec<AssessmentRecord>,
    #[serde(default)]
    pub(crate) courses: Vec<ProgressRow>,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyticsResponse {
    pub(crate) stats: UserStats,
    pub(crate) monthly_trend: Vec<MonthBucket>,
    pub(crate) assessment_distribution: Vec<KindCount>,
}

pub(crate) fn with_platform_routes<R, C>(
    enrollment: Arc<EnrollmentService<R, C>>,
    services: ServiceState,
) -> axum::Router
where
    R: CourseRepository + 'static,
    C: CertificateIssuer + 'static,
{
    course_router(enrollment)
        .merge(
            axum::Router::new()
                .route(
                    "/api/v1/assessments/mbti/questions",
                    axum::routing::get(mbti_questions_endpoint),
                )
                .route(
                    "/api/v1/assessments/mbti/score",
                    axum::routing::post(mbti_score_endpoint),
                )
                .route(
                    "/api/v1/assessments/tki/situations",
                    axum::routing::get(tki_situations_endpoint),
                )
                .route(
                    "/api/v1/assessments/tki/score",
                    axum::routing::post(tki_score_endpoint),
                )
                .route(
                    "/api/v1/recommendations",
                    axum::routing::post(recommendations_endpoint),
                )
                .route(
                    "/api/v1/analytics/stats",
                    axum::routing::post(analytics_endpoint),
                )
                .with_state(services),
        )
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn mbti_questions_endpoint() -> Json<serde_json::Value> {
    let bank = mbti_bank();
    Json(json!({ "version": bank.version, "questions": bank.questions }))
}

pub(crate) async fn tki_situations_endpoint() -> Json<serde_json::Value> {
    let bank = tki_bank();
    Json(json!({ "version": bank.version, "situations": bank.situations }))
}

pub(crate) async fn mbti_score_endpoint(
    State(services): State<ServiceState>,
    Json(payload): Json<MbtiScoreRequest>,
) -> Result<Json<MbtiResult>, AppError> {
    let result = mbti::score(mbti_bank(), type_catalog(), &payload.answers)?;
    if let Some(user) = payload.user_id.as_deref() {
        services
            .data
            .record_personality_type(user, result.type_code.clone());
    }
    Ok(Json(result))
}

pub(crate) async fn tki_score_endpoint(
    State(services): State<ServiceState>,
    Json(payload): Json<TkiScoreRequest>,
) -> Result<Json<TkiResult>, AppError> {
    let result = tki::score(tki_bank(), mode_catalog(), &payload.answers)?;
    if let Some(user) = payload.user_id.as_deref() {
        services.data.record_conflict_mode(user, result.primary_mode);
    }
    Ok(Json(result))
}

pub(crate) async fn recommendations_endpoint(
    State(services): State<ServiceState>,
    Json(payload): Json<RecommendationRequest>,
) -> Json<Vec<Recommendation>> {
    let results = services
        .engine
        .recommend_for_user(services.data.as_ref(), &payload.user_id);
    Json(results)
}

pub(crate) async fn analytics_endpoint(
    Json(payload): Json<AnalyticsRequest>,
) -> Json<AnalyticsResponse> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    Json(AnalyticsResponse {
        stats: user_stats(&payload.assessments, &payload.courses, today),
        monthly_trend: monthly_trend(&payload.assessments, today),
        assessment_distribution: kind_distribution(&payload.assessments),
    })
}
