//! CI/CD pipeline showcase service.
//!
//! Serves a static landing page and a handful of JSON endpoints describing
//! the deployment: health, project info, tech stack and feature list.
//!
//! # Routes
//!
//! ```text
//! GET /          landing page (HTML)
//! GET /health    liveness, uptime, environment
//! GET /info      project metadata plus process figures
//! GET /tech      technology stack
//! GET /features  feature list and count
//! *              404 JSON naming the requested URI
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`catalog`]: Static project records
//! - [`logging`]: Tracing subscriber setup
//! - [`probe`]: Process introspection
//! - [`api`]: Route table and handlers
//! - [`metrics`]: Request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod probe;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result, ServiceError};
