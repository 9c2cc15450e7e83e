//! Taskboard - Main Library
//!
//! Taskboard is a small task-tracking REST service built with Axum and SQLite,
//! with an optional weather-lookup proxy endpoint and a static frontend.
//!
//! # Overview
//!
//! This library provides the core functionality for Taskboard, including:
//! - CRUD endpoints over a single `task` entity
//! - SQLite persistence via sqlx with an idempotent startup migration
//! - A pass-through proxy to an external weather provider
//! - Static serving of the frontend entry file
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, and app initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`tasks`** - Task model, database operations, and HTTP handlers
//! - **`weather`** - Weather proxy handler
//! - **`error`** - API error types and HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use taskboard::server::config::Config;
//! use taskboard::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<T, ApiError>`; `ApiError` implements
//! `IntoResponse` and maps each error category to its HTTP status code
//! with a short JSON error body. See `error` for the full taxonomy.

/// Configuration, state, and server initialization
pub mod server;

/// Route configuration
pub mod routes;

/// Task model, persistence, and handlers
pub mod tasks;

/// Weather proxy
pub mod weather;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::init::create_app;
pub use tasks::db::Task;
