//! Application-wide error types using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pointdiff_common::PointDiffError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Loading, transforming or rendering failed.
    #[error("Failed to build dashboard: {0}")]
    Pipeline(#[from] PointDiffError),

    /// The blocking pipeline task panicked or was cancelled.
    #[error("Dashboard task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The bind address could not be parsed.
    #[error("Invalid bind address '{address}': {source}")]
    Address {
        /// Address as configured.
        address: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_pipeline_error_chain() {
        let missing = io::Error::new(io::ErrorKind::NotFound, "No such file");
        let err = AppError::from(PointDiffError::file("scores.csv", missing));

        assert!(err.to_string().starts_with("Failed to build dashboard: Cannot read scores.csv"));

        let mut current: &dyn Error = &err;
        let mut depth = 0;
        while let Some(source) = current.source() {
            current = source;
            depth += 1;
        }
        assert_eq!(depth, 2);
        assert_eq!(current.to_string(), "No such file");
    }

    #[test]
    fn test_error_response_is_500() {
        let err = AppError::from(PointDiffError::data("2024 week 9: A vs B has no final score"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
