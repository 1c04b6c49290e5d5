/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Replaces the failure text when error details are not exposed.
pub const REDACTED_DETAIL: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum ServerError {
    /// Discovery query failed; the payload is what the client will see
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Wrap a discovery failure, keeping or hiding its message.
    pub fn query(err: &skillswap_core::SwapError, expose_details: bool) -> Self {
        tracing::error!("Discovery query failed: {}", err);

        if expose_details {
            ServerError::Query(err.to_string())
        } else {
            ServerError::Query(REDACTED_DETAIL.to_string())
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ServerError::Query(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
            ServerError::BadRequest(msg) => {
                let body = Json(json!({ "message": msg }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": "Server error",
            "error": detail,
        }));

        (status, body).into_response()
    }
}
