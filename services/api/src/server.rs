use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use label_lens::analysis::{analysis_router, AnalysisState};
use label_lens::config::AppConfig;
use label_lens::error::AppError;
use label_lens::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let analysis = AnalysisState::from_config(&config.analysis);
    if !analysis.is_configured() {
        warn!("GEMINI_API_KEY is not set; /api/analyze will answer 503");
    }
    if config.analysis.elevenlabs.is_none() {
        info!("ELEVENLABS_API_KEY is not set; analyses are returned without audio");
    }

    let app = with_service_routes(analysis_router(analysis))
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "label lens ready");

    axum::serve(listener, app).await?;
    Ok(())
}
