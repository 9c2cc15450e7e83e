//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation: API routes, static assets,
//!   fallback, and state attachment
//! - **`api_routes`** - API endpoints (health, tasks, weather)
//!
//! # Route Organization
//!
//! API routes are added first, then the static asset services for `/`
//! and `/static`, then the 404 fallback for everything else.

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
