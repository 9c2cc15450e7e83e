/**
 * API Error Types
 *
 * This module defines the error type returned by HTTP handlers. Each
 * variant maps to one category of the service's error taxonomy and
 * carries the message exposed to the caller.
 *
 * Upstream and storage failures deliberately expose only a generic
 * message; the underlying cause is logged server-side at the point of
 * failure or during response conversion.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the HTTP API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input error (missing required field, missing API key)
    #[error("{message}")]
    BadRequest {
        /// Message returned to the caller
        message: String,
    },

    /// No task exists with the requested identifier
    #[error("{message}")]
    NotFound {
        /// Message returned to the caller
        message: String,
    },

    /// Weather provider unreachable, timed out, or returned an error status
    #[error("failed to fetch weather data")]
    Upstream,

    /// Storage-layer failure at request time
    #[error("database unavailable")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Create a new bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadRequest` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Upstream` - 500 Internal Server Error
    /// - `Database` - 503 Service Unavailable
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the message exposed to the caller
    ///
    /// For upstream and database errors this is a fixed generic message;
    /// the underlying failure never reaches the response body.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message } | Self::NotFound { message } => message.clone(),
            Self::Upstream => "failed to fetch weather data".to_string(),
            Self::Database(_) => "database unavailable".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_error() {
        let error = ApiError::bad_request("title is required");
        match error {
            ApiError::BadRequest { message } => {
                assert_eq!(message, "title is required");
            }
            _ => panic!("Expected BadRequest"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        let bad_request = ApiError::bad_request("title is required");
        assert_eq!(bad_request.status_code(), StatusCode::BAD_REQUEST);

        let not_found = ApiError::not_found("task not found");
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let upstream = ApiError::Upstream;
        assert_eq!(upstream.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let database = ApiError::Database(sqlx::Error::PoolClosed);
        assert_eq!(database.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_database_error_message_is_generic() {
        let error = ApiError::Database(sqlx::Error::PoolClosed);
        assert_eq!(error.message(), "database unavailable");
    }

    #[test]
    fn test_upstream_error_message_is_generic() {
        let error = ApiError::Upstream;
        assert_eq!(error.message(), "failed to fetch weather data");
    }

    #[test]
    fn test_from_sqlx_error() {
        let api_error: ApiError = sqlx::Error::RowNotFound.into();
        match api_error {
            ApiError::Database(_) => {}
            _ => panic!("Expected Database variant"),
        }
    }
}
