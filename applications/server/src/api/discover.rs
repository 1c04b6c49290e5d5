/// Public discovery API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use skillswap_core::{DiscoverResponse, DiscoveryFilter};

/// GET /api/public/users/discover?skill=&search=
///
/// No authentication. Returns at most the configured number of public
/// profiles; a query failure becomes a 500 with the failure message.
pub async fn discover_users(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<DiscoveryFilter>, QueryRejection>,
) -> Result<Json<DiscoverResponse>> {
    let Query(filter) = query.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    tracing::debug!(
        skill = filter.skill(),
        search = filter.search(),
        "Discovery request"
    );

    let response = app_state
        .discovery
        .discover(&filter)
        .await
        .map_err(|e| ServerError::query(&e, app_state.expose_error_details))?;

    Ok(Json(response))
}
