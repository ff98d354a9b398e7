use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Liveness only: answers even when no AI gateway key is configured.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "analysis-gateway"
    }))
}
