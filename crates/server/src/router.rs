use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
///
/// A wrong method on a known route answers 405 with the standard error body
/// rather than the framework's empty default.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/moderate", post(handlers::moderate_handler))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
