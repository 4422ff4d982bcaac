//! OpenAPI document for the showcase routes.

use utoipa::OpenApi;

use super::handlers;
use crate::error::NotFoundResponse;

/// OpenAPI description of every bound route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CI/CD Pipeline Demo",
        description = "Landing page and deployment metadata endpoints"
    ),
    paths(
        handlers::home,
        handlers::health,
        handlers::info,
        handlers::tech,
        handlers::features
    ),
    components(schemas(NotFoundResponse)),
    tags(
        (name = "showcase", description = "Project metadata"),
        (name = "probe", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Render the OpenAPI document as pretty-printed JSON.
pub fn openapi_json() -> serde_json::Result<String> {
    ApiDoc::openapi().to_pretty_json()
}
