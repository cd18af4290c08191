//! webenv shopping - price-comparison shop.
//!
//! Products are listed for one selected store, with the prices other stores
//! charge and how far away those stores are. The entire view state (store,
//! search, open modal and its options) lives in the URL, so every screen is
//! shareable; only the cart is kept server-side in the session.
//!
//! # Modules
//!
//! - [`catalog`] - Stores and products
//! - [`filter`] - Search filtering and nearby prices
//! - [`view_state`] / [`url_state`] - View state and its URL projection
//! - [`cart`] / [`shop`] - Cart and the per-visitor controller
//! - [`routes`] - HTTP handlers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod middleware;
pub mod rating;
pub mod routes;
pub mod shop;
pub mod state;
pub mod url_state;
pub mod view_state;

use axum::{Router, routing::get};
use webenv_core::server;

use crate::state::AppState;

/// Build the application router, without the Sentry layers.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    server::with_request_tracing(
        Router::new()
            .route("/health", get(server::health))
            .merge(routes::routes())
            .layer(session_layer)
            .with_state(state),
    )
}
