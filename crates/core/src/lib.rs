//! webenv core - shared types library.
//!
//! This crate provides common types used across the webenv applications:
//! - `shopping` - Price-comparison shop with cart and shareable URLs
//! - `recipe` - Recipe browser with filters and step-by-step view
//! - `home` - Landing page linking the environments together
//!
//! # Architecture
//!
//! The core crate contains types and pure functions. HTTP plumbing shared
//! by the binaries sits behind the `server` feature, so the default build
//! stays lightweight.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and quantities
//! - [`geo`] - Coordinates and great-circle distances
//! - [`config`] - Environment-variable parsing helpers
//! - `server` - Shared HTTP plumbing (feature `server`)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod geo;
#[cfg(feature = "server")]
pub mod server;
pub mod types;

pub use config::{ConfigError, Env};
pub use geo::{Coordinates, distance_km, haversine_km};
pub use types::*;
