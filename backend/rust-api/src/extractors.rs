use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::error::ApiError;

/// JSON extractor that reports rejections through [`ApiError`] so the caller
/// always gets a JSON `{ "error" }` body.
///
/// Missing `Content-Type: application/json` stays a 415, syntax errors a 400
/// and shape errors a 422.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: serde::de::DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    ApiError::Validation {
        status: rejection.status(),
        message: format!("Failed to parse JSON request body: {}", rejection.body_text()),
    }
}
