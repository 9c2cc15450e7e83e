/**
 * Error Conversion
 *
 * This module provides the conversion from `ApiError` to an HTTP
 * response, so handlers can return errors directly.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "title is required"
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Storage-layer errors are logged here with their full detail; the
    /// response body only ever carries the generic message.
    fn into_response(self) -> Response {
        if let ApiError::Database(ref err) = self {
            tracing::error!("Database error while handling request: {:?}", err);
        }

        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.message() }));

        (status, body).into_response()
    }
}
