//! HTTP route handlers for the recipe browser.
//!
//! The page is rendered from the query string alone; filter changes are a
//! plain `GET` form submission and recipe or step changes are links.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing content or results with detail
//! GET  /health                 - Health check
//! GET  /*                      - Static files (images, recipes.json)
//! ```

pub mod browse;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Path of the browser page.
pub const INDEX_PATH: &str = "/";

/// Create all routes for the recipe browser.
pub fn routes() -> Router<AppState> {
    Router::new().route(INDEX_PATH, get(browse::index))
}
