//! HTTP API module: route table, handlers and OpenAPI document.

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::AppState;
pub use openapi::ApiDoc;
pub use routes::{create_router, Route};
