use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCertificateStore, InMemoryCourseData, InMemoryCourseRepository};
use crate::routes::{with_platform_routes, ServiceState};
use crate::security::{self, RateLimiter};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use pathwise::config::AppConfig;
use pathwise::courses::EnrollmentService;
use pathwise::error::AppError;
use pathwise::recommendations::{RecommendationConfig, RecommendationEngine};
use pathwise::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryCourseRepository::default());
    let certificates = Arc::new(InMemoryCertificateStore::default());
    let enrollment_service = Arc::new(EnrollmentService::new(repository.clone(), certificates));
    let services = ServiceState {
        data: Arc::new(InMemoryCourseData::new(repository)),
        engine: Arc::new(RecommendationEngine::new(RecommendationConfig::default())),
    };

    let limiter = Arc::new(RateLimiter::new(config.security.requests_per_minute));
    let app = with_platform_routes(enrollment_service, services)
        .layer(axum::middleware::from_fn_with_state(
            limiter,
            security::enforce,
        ))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "pathwise platform api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
