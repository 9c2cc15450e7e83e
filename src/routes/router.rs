/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the API routes, static asset services, and the fallback handler into
 * a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (health, tasks, weather)
 * 2. Frontend entry file for `/` and static assets under `/static`
 * 3. Fallback handler (404)
 */

use axum::{http::StatusCode, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Path of the frontend entry file, relative to the working directory
const FRONTEND_ENTRY: &str = "static/index.html";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pool, HTTP client,
///   and weather configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## API Routes
///
/// - `GET /health` - Health check
/// - `GET /tasks` - List tasks
/// - `POST /tasks` - Create task
/// - `PUT /tasks/{id}` - Update task
/// - `DELETE /tasks/{id}` - Delete task
/// - `GET /weather` - Weather proxy
///
/// ## Static Files
///
/// The frontend entry file is served for `/`; the remaining frontend
/// assets are served from the static directory.
///
/// ## Fallback
///
/// The fallback handler returns 404 for unknown routes.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);

    // Frontend entry point and static assets
    let router = router
        .route_service("/", ServeFile::new(FRONTEND_ENTRY))
        .nest_service("/static", ServeDir::new("static"));

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Use AppState as router state
    router.with_state(app_state)
}
