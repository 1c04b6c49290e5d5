/// API route modules
pub mod discover;
pub mod health;

use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router.
///
/// Everything lives under `/api/public`; none of it requires authentication.
pub fn create_router(app_state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health))
        .route("/users/discover", get(discover::discover_users));

    Router::new()
        .nest("/api/public", public_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
