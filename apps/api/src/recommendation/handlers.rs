//! Axum route handler for the Recommendation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommendation::models::{RecommendationRequest, RecommendationResponse};
use crate::recommendation::orchestrator::recommend_gifts;
use crate::state::AppState;

/// POST /api/recommendations
///
/// Validates the request, then returns up to five suggestions. Completion API
/// faults never surface here; the orchestrator degrades to local fallbacks.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    request.validate()?;

    let span = info_span!("recommend", request_id = %Uuid::new_v4());
    let response = async move {
        info!(
            "Recommendation request: budget={}, occasion={:?}",
            request.budget, request.occasion
        );

        let outcome = recommend_gifts(state.llm.as_ref(), &state.taxonomy, &request).await;
        let total_found = outcome.suggestions.len();
        info!(source = ?outcome.source, total_found, "Recommendations ready");

        RecommendationResponse {
            success: true,
            recommendations: outcome.suggestions,
            total_found,
        }
    }
    .instrument(span)
    .await;

    Ok(Json(response))
}
