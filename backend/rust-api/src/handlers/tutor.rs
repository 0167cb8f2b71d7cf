use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::{
    error::ApiError,
    extractors::AppJson,
    models::tutor::TutoringRequest,
    services::{tutor_service::TutorService, AppState},
};

/// POST /functions/v1/tutor - one tutoring turn
pub async fn chat(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<TutoringRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let service = TutorService::new(state.gateway.clone(), state.credentials.clone());
    let reply = service.reply(&req).await?;
    Ok(Json(reply))
}
