use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::ApiError;
pub use services::AppState;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/metrics",
            get(handlers::metrics_handler).layer(middleware::from_fn_with_state(
                app_state.clone(),
                handlers::metrics_auth_middleware,
            )),
        )
        // Path the hosted client already calls, plus the versioned alias
        .route("/functions/v1/tutor", post(handlers::tutor::chat))
        .nest("/api/v1", api_routes())
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(app_state)
        .layer(middleware::from_fn(
            middlewares::metrics::metrics_middleware,
        ))
        // CORS sits outside metrics so preflights are answered first
        .layer(middleware::from_fn(middlewares::cors::cors_middleware))
        .layer(middleware::from_fn(
            middlewares::trace::trace_context_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tutor", post(handlers::tutor::chat))
        .route("/languages", get(handlers::languages::list_languages))
        .route("/languages/{id}", get(handlers::languages::get_language))
        .route(
            "/pronunciation/score",
            post(handlers::pronunciation::score),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed)
}
