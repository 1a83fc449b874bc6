//! Router assembly: common, api and docs routes plus the HTTP layers shared by all of them.

pub mod api;
pub mod common;
pub mod docs;

pub use api::api_routes;
pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};

use crate::config::Settings;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// The full application: every route, any-origin CORS, body size limit and request tracing.
pub fn app(state: AppState, settings: &Settings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .merge(docs_routes())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
