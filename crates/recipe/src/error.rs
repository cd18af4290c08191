//! Unified error handling with Sentry integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::LoadError;

/// Application-level error type for the recipe browser.
///
/// A failed recipe load is not an error here: the catalog is then ready
/// and empty. Unknown query values are dropped silently.
#[derive(Debug, Error)]
pub enum AppError {
    /// The recipe catalog could not be read.
    #[error("Catalog error: {0}")]
    Catalog(#[from] LoadError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // Don't expose internal error details to clients
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisoned_catalog_is_internal_error() {
        let err = AppError::from(LoadError::Poisoned);
        assert_eq!(err.to_string(), "Catalog error: recipe catalog lock poisoned");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
