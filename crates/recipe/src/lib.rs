//! webenv recipe - recipe browser.
//!
//! Recipes are loaded in the background at startup and browsed with a
//! search box, diet/difficulty selects and ingredient/equipment checkboxes.
//! The selected recipe is shown one instruction step at a time. As in the
//! shop, the whole view lives in the URL.
//!
//! # Modules
//!
//! - [`recipe`] / [`catalog`] - Recipe records and their background loading
//! - [`filter`] - Search and facet filters
//! - [`browser`] - Browser state, its URL form and the debounced search input
//! - [`debounce`] / [`steps`] - Search debouncing and step navigation
//! - [`routes`] - HTTP handlers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod browser;
pub mod catalog;
pub mod config;
pub mod content;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod recipe;
pub mod routes;
pub mod state;
pub mod steps;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use webenv_core::server;

use crate::state::AppState;

/// Build the application router, without the Sentry layers.
///
/// Anything not matched by a route is served from the static directory.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config().static_dir);

    server::with_request_tracing(
        Router::new()
            .route("/health", get(server::health))
            .merge(routes::routes())
            .fallback_service(static_files)
            .with_state(state),
    )
}
