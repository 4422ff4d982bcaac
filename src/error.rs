//! Unified error types for the showcase service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::routes::Route;

/// Errors that stop the service from starting.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level errors rendered as JSON responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No route binding matched the request.
    #[error("Route {uri} not found")]
    NotFound {
        /// Request URI as received (path and query).
        uri: String,
    },
}

/// Body of a 404 response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    /// Always "Not Found".
    pub error: String,
    /// Names the requested URI.
    pub message: String,
    /// Every path the route table serves.
    pub available_routes: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { ref uri } => {
                tracing::debug!(%uri, "no route matched");
                let body = NotFoundResponse {
                    error: "Not Found".to_string(),
                    message: self.to_string(),
                    available_routes: Route::paths().into_iter().map(String::from).collect(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
