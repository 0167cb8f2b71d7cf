use axum::{response::IntoResponse, Json};
use validator::Validate;

use crate::{
    error::ApiError,
    extractors::AppJson,
    metrics::PRONUNCIATION_SCORES_TOTAL,
    models::pronunciation::ScorePronunciationRequest,
    services::pronunciation_service::score_pronunciation,
};

/// POST /api/v1/pronunciation/score
pub async fn score(
    AppJson(req): AppJson<ScorePronunciationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::validation(format!("Validation error: {}", e)))?;

    let result = score_pronunciation(&req.target, &req.transcript)?;
    tracing::debug!(
        "Pronunciation scored: score={}, words={}",
        result.score,
        result.total_words
    );

    PRONUNCIATION_SCORES_TOTAL
        .with_label_values(&[result.verdict.as_str()])
        .inc();

    Ok(Json(result))
}
