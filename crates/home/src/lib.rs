//! webenv home - landing page linking the environments together.
//!
//! Serves a page of tiles pointing at the recipe, shopping, map and wiki
//! environments, and `/wiki`, which frames the configured wiki page.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use webenv_core::server;

use crate::config::HomeConfig;

/// Build the application router, without the Sentry layers.
pub fn app(config: HomeConfig) -> Router {
    server::with_request_tracing(
        Router::new()
            .route("/health", get(server::health))
            .merge(routes::routes())
            .with_state(Arc::new(config)),
    )
}
