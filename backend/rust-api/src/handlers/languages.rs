use axum::{extract::Path, response::IntoResponse, Json};

use crate::models::language::{language_list, TargetLanguage};

/// GET /api/v1/languages
pub async fn list_languages() -> impl IntoResponse {
    Json(language_list())
}

/// GET /api/v1/languages/{id} - unknown ids resolve to Spanish
pub async fn get_language(Path(id): Path<String>) -> impl IntoResponse {
    Json(TargetLanguage::resolve(&id).config())
}
