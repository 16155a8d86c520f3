//! Application router and middleware stack.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info_span, warn};

use crate::application::handlers::AnalyzeTextHandler;
use crate::config::ServerConfig;
use crate::domain::emotion::AssetCatalog;
use crate::ports::BurnRecordRepository;

use super::analysis::{analysis_routes, AnalysisHandlers};
use super::assets::assets_routes;
use super::error::ApiError;
use super::records::{records_routes, RecordHandlers};

/// Shared, read-only application state built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub analyze_handler: Arc<AnalyzeTextHandler>,
    pub records: Arc<dyn BurnRecordRepository>,
    pub assets: Arc<AssetCatalog>,
}

/// Builds the full HTTP application.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(analysis_routes(AnalysisHandlers::new(state.analyze_handler)))
        .merge(records_routes(RecordHandlers::from_repository(state.records)))
        .merge(assets_routes(state.assets));

    let mut router = Router::new()
        .route("/health", get(health))
        .nest("/api", api);

    if let Some(dir) = &config.static_dir {
        router = router.nest_service("/audio", ServeDir::new(dir.join("audio")));
    }

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id
                )
            }))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(cors_layer(config))
            .layer(CompressionLayer::new())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            ))),
    )
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    error!(panic = detail, "Handler panicked");
    ApiError::Internal.into_response()
}
