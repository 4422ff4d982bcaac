//! HTTP API route definitions.

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};
use tower_http::trace::TraceLayer;

use super::handlers::{features, health, home, info, not_found, tech, AppState};
use crate::metrics::track_requests;

/// Route table, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum Route {
    #[strum(serialize = "/")]
    Home,
    #[strum(serialize = "/health")]
    Health,
    #[strum(serialize = "/info")]
    Info,
    #[strum(serialize = "/tech")]
    Tech,
    #[strum(serialize = "/features")]
    Features,
}

impl Route {
    /// Literal path this route answers on.
    pub fn path(self) -> &'static str {
        self.into()
    }

    /// Every bound path, in registration order.
    pub fn paths() -> Vec<&'static str> {
        Self::iter().map(Self::path).collect()
    }

    /// GET binding for this route. Any other method falls through to the catch-all.
    fn binding(self) -> MethodRouter<AppState> {
        let method_router = match self {
            Self::Home => get(home),
            Self::Health => get(health),
            Self::Info => get(info),
            Self::Tech => get(tech),
            Self::Features => get(features),
        };
        method_router.fallback(not_found)
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Route::iter()
        .fold(Router::new(), |router, route| {
            router.route(route.path(), route.binding())
        })
        .fallback(not_found)
        .layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
