/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The shared outbound HTTP client (bounded timeout, built once)
 * - Weather proxy configuration (API key, provider URL)
 *
 * There is no other shared mutable in-process state: every request is an
 * independent request/response cycle, and consistency is delegated to the
 * underlying store.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets task handlers extract just the
 * `SqlitePool` instead of the entire `AppState`, following Axum's
 * recommended pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::server::config::WeatherConfig;

/// Shared application state handed to the router
///
/// All fields are cheap to clone: the pool and client are handles over
/// internally synchronized resources.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Outbound HTTP client used by the weather proxy
    pub http_client: reqwest::Client,
    /// Weather proxy configuration
    pub weather: WeatherConfig,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}
