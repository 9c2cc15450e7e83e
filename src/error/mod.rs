//! API Error Module
//!
//! This module defines the error types used by HTTP handlers and their
//! conversion to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (`IntoResponse`)
//!
//! # Error Taxonomy
//!
//! - `BadRequest` - client input errors (missing required field,
//!   missing weather API key) - 400
//! - `NotFound` - operations on a nonexistent task identifier - 404
//! - `Upstream` - weather provider unreachable, timed out, or returned a
//!   non-success status - 500 with a generic body; detail is logged only
//! - `Database` - storage-layer failures at request time - 503 with a
//!   generic body; detail is logged only
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, allowing handlers to return it
//! directly. The error is converted to the appropriate status code and a
//! JSON body of the form `{"error": "<message>"}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
