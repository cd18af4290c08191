//! HTTP middleware for the shop.
//!
//! Request IDs, tracing and Sentry come from `webenv_core::server`; the
//! shop adds the session layer holding the cart.

pub mod session;

pub use session::create_session_layer;
