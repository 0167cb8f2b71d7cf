use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Every failure the API reports. Rendered as `{ "error", "statusHint" }`.
///
/// User-visible messages are fixed strings; upstream detail stays in the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    #[error("no route for {0}")]
    NotFound(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("AI gateway API key is not configured")]
    Config,

    #[error("AI gateway rate limit exceeded")]
    RateLimited,

    #[error("AI gateway usage limit reached")]
    UsageLimitReached,

    #[error("AI gateway error: {status}")]
    Upstream { status: u16, body: String },

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { status, .. } => *status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::UsageLimitReached => StatusCode::PAYMENT_REQUIRED,
            ApiError::Config | ApiError::Upstream { .. } | ApiError::Unknown(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn status_hint(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validationError",
            ApiError::NotFound(_) => "notFound",
            ApiError::MethodNotAllowed => "methodNotAllowed",
            ApiError::Config => "configError",
            ApiError::RateLimited => "rateLimited",
            ApiError::UsageLimitReached => "usageLimitReached",
            ApiError::Upstream { .. } => "upstreamError",
            ApiError::Unknown(_) => "unknownError",
        }
    }

    /// Message shown to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Validation { message, .. } => message.clone(),
            ApiError::NotFound(path) => format!("No route for {}", path),
            ApiError::MethodNotAllowed => "Method not allowed".to_string(),
            ApiError::RateLimited => "Rate limit exceeded. Please try again later.".to_string(),
            ApiError::UsageLimitReached => {
                "Usage limit reached. Please add credits to continue.".to_string()
            }
            ApiError::Config | ApiError::Upstream { .. } | ApiError::Unknown(_) => {
                "The tutor is unavailable right now. Please try again.".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation { message, .. } => {
                tracing::warn!("Rejected request: {}", message)
            }
            ApiError::NotFound(_) | ApiError::MethodNotAllowed => {
                tracing::debug!("Unroutable request: {}", self)
            }
            ApiError::Upstream { status, body } => {
                tracing::error!(status = *status, body = %body, "AI gateway error")
            }
            ApiError::Unknown(err) => tracing::error!("Tutor error: {:?}", err),
            other => tracing::error!("Tutor error: {}", other),
        }

        let status = self.status_code();
        let body = json!({
            "error": self.public_message(),
            "statusHint": self.status_hint(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::RateLimited.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            ApiError::UsageLimitReached.status_code(),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(ApiError::Config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiError::Upstream {
                status: 503,
                body: String::new()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_routing_errors() {
        let missing = ApiError::NotFound("/nope".to_string());
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.status_hint(), "notFound");
        assert_eq!(missing.public_message(), "No route for /nope");

        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::MethodNotAllowed.status_hint(), "methodNotAllowed");
    }

    #[test]
    fn test_upstream_detail_is_not_public() {
        let err = ApiError::Upstream {
            status: 500,
            body: "internal stack trace from provider".to_string(),
        };
        assert!(!err.public_message().contains("stack trace"));
        assert!(!err.public_message().contains("500"));
    }

    #[test]
    fn test_unknown_error_hides_cause() {
        let err = ApiError::from(anyhow::anyhow!("connection reset by peer at 10.0.0.3"));
        assert_eq!(err.status_hint(), "unknownError");
        assert!(!err.public_message().contains("10.0.0.3"));
    }
}
