use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CourseId, UserId};
use super::repository::{CertificateIssuer, CourseRepository};
use super::service::{EnrollmentError, EnrollmentService};

/// Router builder exposing HTTP endpoints for enrollment and progress.
pub fn course_router<R, C>(service: Arc<EnrollmentService<R, C>>) -> Router
where
    R: CourseRepository + 'static,
    C: CertificateIssuer + 'static,
{
    Router::new()
        .route("/api/v1/courses/enroll", post(enroll_handler::<R, C>))
        .route("/api/v1/courses/progress", post(progress_handler::<R, C>))
        .route(
            "/api/v1/courses/enrollments/:user_id",
            get(enrollments_handler::<R, C>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnrollRequest {
    pub(crate) user_id: String,
    pub(crate) course_id: String,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgressRequest {
    pub(crate) user_id: String,
    pub(crate) course_id: String,
    pub(crate) progress: u8,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) async fn enroll_handler<R, C>(
    State(service): State<Arc<EnrollmentService<R, C>>>,
    axum::Json(request): axum::Json<EnrollRequest>,
) -> Response
where
    R: CourseRepository + 'static,
    C: CertificateIssuer + 'static,
{
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    match service.enroll(
        UserId(request.user_id),
        CourseId(request.course_id),
        today,
    ) {
        Ok(enrollment) => (StatusCode::CREATED, axum::Json(enrollment)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn progress_handler<R, C>(
    State(service): State<Arc<EnrollmentService<R, C>>>,
    axum::Json(request): axum::Json<ProgressRequest>,
) -> Response
where
    R: CourseRepository + 'static,
    C: CertificateIssuer + 'static,
{
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    match service.update_progress(
        &UserId(request.user_id),
        &CourseId(request.course_id),
        request.progress,
        today,
    ) {
        Ok(update) => (StatusCode::OK, axum::Json(update)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn enrollments_handler<R, C>(
    State(service): State<Arc<EnrollmentService<R, C>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: CourseRepository + 'static,
    C: CertificateIssuer + 'static,
{
    match service.enrollments(&UserId(user_id)) {
        Ok(enrollments) => (StatusCode::OK, axum::Json(enrollments)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: EnrollmentError) -> Response {
    let status = match &error {
        EnrollmentError::AlreadyEnrolled => StatusCode::CONFLICT,
        EnrollmentError::NotEnrolled => StatusCode::NOT_FOUND,
        EnrollmentError::InvalidProgress(_) => StatusCode::BAD_REQUEST,
        EnrollmentError::Repository(_) | EnrollmentError::Certificate(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
