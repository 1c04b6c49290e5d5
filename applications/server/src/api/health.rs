/// Health check API routes
use axum::Json;
use serde::Serialize;

pub const HEALTH_MESSAGE: &str = "Skill Swap Platform API is running";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}

/// GET /api/public/health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    })
}
