//! Router configuration for the gateway.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the gateway serves public, read-only data.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/apod", get(handlers::apod))
        .route("/neo", get(handlers::neo))
        .route("/mars-rover", get(handlers::mars_rover))
        .route("/space-weather", get(handlers::space_weather))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
