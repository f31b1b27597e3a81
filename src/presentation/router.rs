use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::presentation::config::CorsSettings;
use crate::presentation::error::panic_response;
use crate::presentation::handlers::{
    download_audio_handler, generate_video_summary_handler, health_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState, cors: &CorsSettings) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api = Router::new()
        .route(
            "/generate_video_summary",
            post(generate_video_summary_handler),
        )
        .route("/download_audio", get(download_audio_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(trace_layer)
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Any origin when the list is empty, otherwise only the listed ones.
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if settings.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
