//! Axum route handlers for the Analysis API.

use axum::{body::Bytes, extract::State, Json};

use crate::analysis::gateway::analyze;
use crate::analysis::models::{AnalysisKind, AnalysisRequest, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /functions/v1/analyze-sentiment
///
/// Body `{text, type}`. The body is parsed by hand so a malformed payload
/// surfaces as a 500 carrying the parse message, like every other failure.
/// The API key check runs before the type is resolved, so an unconfigured
/// server answers 500 for any input.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, AppError> {
    let request: AnalysisRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedInput(e.to_string()))?;

    let llm = state.llm.as_deref().ok_or_else(|| {
        AppError::Configuration("AI_GATEWAY_API_KEY is not configured".to_string())
    })?;

    let kind: AnalysisKind = request.kind.parse()?;

    let result = analyze(llm, kind, &request.text).await?;
    Ok(Json(result))
}
