//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::Uri,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::warn;
use utoipa::ToSchema;

use crate::catalog::{Catalog, FeatureList, ProjectInfo, TechStack, SERVICE_NAME, TECH_DESCRIPTION};
use crate::error::ApiError;
use crate::probe::{self, MemoryUsage};

const LANDING_PAGE: &str = include_str!("../../assets/index.html");

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process start; uptime is measured from here.
    pub started: Instant,
    /// Environment label (e.g. "production").
    pub environment: Arc<str>,
    /// Static records.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create new app state, stamping the deployment time as now.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            started: Instant::now(),
            environment: Arc::from(environment.into()),
            catalog: Arc::new(Catalog::new(OffsetDateTime::now_utc())),
        }
    }

    /// Measure uptime from `started` instead of state construction.
    pub fn started_at(mut self, started: Instant) -> Self {
        self.started = started;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("production")
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: String,
    /// Seconds since process start.
    pub uptime: f64,
    /// Current time, ISO-8601.
    pub timestamp: String,
    /// Service name.
    pub service: String,
    /// Environment label.
    pub environment: String,
}

/// Project info response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    #[serde(flatten)]
    pub project: ProjectInfo,
    /// Whole seconds since start, e.g. "42 seconds".
    pub uptime: String,
    /// Compiler the binary was built with.
    pub runtime_version: String,
    /// Operating system.
    pub platform: String,
    pub memory: MemoryResponse,
}

/// Process memory in megabytes.
#[derive(Debug, Serialize, ToSchema)]
pub struct MemoryResponse {
    /// Resident memory, e.g. "12 MB".
    pub used: String,
    /// Virtual memory, e.g. "300 MB".
    pub total: String,
}

impl From<MemoryUsage> for MemoryResponse {
    fn from(usage: MemoryUsage) -> Self {
        Self {
            used: format!("{} MB", usage.resident_mb()),
            total: format!("{} MB", usage.virtual_mb()),
        }
    }
}

/// Tech stack response.
#[derive(Debug, Serialize, ToSchema)]
pub struct TechResponse {
    pub technologies: TechStack,
    pub description: String,
}

/// Feature list response.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeaturesResponse {
    pub features: FeatureList,
    /// Always equals the length of `features`.
    pub total: usize,
}

impl FeaturesResponse {
    fn new(features: FeatureList) -> Self {
        let total = features.len();
        Self { features, total }
    }
}

/// Landing page handler.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page", body = String, content_type = "text/html")),
    tag = "showcase"
)]
pub async fn home() -> impl IntoResponse {
    Html(LANDING_PAGE)
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "probe"
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime: probe::uptime(state.started).as_secs_f64(),
        timestamp: probe::now_iso(),
        service: SERVICE_NAME.to_string(),
        environment: state.environment.to_string(),
    })
}

/// Project info handler - metadata plus live process figures.
#[utoipa::path(
    get,
    path = "/info",
    responses((status = 200, description = "Project and process information", body = InfoResponse)),
    tag = "showcase"
)]
pub async fn info(State(state): State<AppState>) -> impl IntoResponse {
    let memory = probe::memory_usage().unwrap_or_else(|| {
        warn!("Process memory unavailable, reporting zero");
        MemoryUsage {
            resident_bytes: 0,
            virtual_bytes: 0,
        }
    });

    Json(InfoResponse {
        project: state.catalog.project.clone(),
        uptime: format!("{} seconds", probe::uptime(state.started).as_secs()),
        runtime_version: probe::runtime_version().to_string(),
        platform: probe::platform().to_string(),
        memory: memory.into(),
    })
}

/// Tech stack handler.
#[utoipa::path(
    get,
    path = "/tech",
    responses((status = 200, description = "Technology stack", body = TechResponse)),
    tag = "showcase"
)]
pub async fn tech(State(state): State<AppState>) -> impl IntoResponse {
    Json(TechResponse {
        technologies: state.catalog.tech.clone(),
        description: TECH_DESCRIPTION.to_string(),
    })
}

/// Feature list handler.
#[utoipa::path(
    get,
    path = "/features",
    responses((status = 200, description = "Feature list", body = FeaturesResponse)),
    tag = "showcase"
)]
pub async fn features(State(state): State<AppState>) -> impl IntoResponse {
    Json(FeaturesResponse::new(state.catalog.features.clone()))
}

/// Catch-all handler for anything the route table does not bind.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        uri: uri.to_string(),
    }
}
