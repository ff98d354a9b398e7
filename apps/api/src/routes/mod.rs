pub mod health;

use axum::{
    http::{header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Headers the browser client is allowed to send, advertised on every response.
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type, \
x-supabase-client-platform, x-supabase-client-platform-version, \
x-supabase-client-runtime, x-supabase-client-runtime-version";

pub fn build_router(state: AppState) -> Router {
    // CorsLayer answers any OPTIONS request itself with an empty 200.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/functions/v1/analyze-sentiment",
            post(handlers::handle_analyze),
        )
        .route("/analyze-sentiment", post(handlers::handle_analyze))
        .with_state(state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
}
