//! Weather Module
//!
//! This module implements the weather proxy: a single pass-through
//! endpoint that forwards a city query to the configured external
//! weather provider and relays the result.
//!
//! # Behavior
//!
//! - Missing or blank `city`, or an unset API key, is rejected with 400
//!   before any outbound call is made
//! - One outbound GET per request, metric units, bounded by the shared
//!   client's 10-second timeout
//! - A successful provider response is relayed verbatim; every upstream
//!   failure collapses to a 500 with a generic body, with detail logged
//!
//! No retries, no circuit breaking, no caching of weather results.

/// HTTP handler for the weather endpoint
pub mod handlers;

// Re-export commonly used handlers
pub use handlers::get_weather;
