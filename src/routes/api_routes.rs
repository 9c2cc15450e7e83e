/**
 * API Route Configuration
 *
 * This module wires the API endpoints to their handlers:
 *
 * - `GET /health` - Health check
 * - `GET /tasks` - List all tasks
 * - `POST /tasks` - Create a task
 * - `PUT /tasks/{id}` - Partially update a task
 * - `DELETE /tasks/{id}` - Delete a task
 * - `GET /weather` - Weather proxy
 *
 * All routes are public; there is no authentication layer.
 */

use axum::Router;

use crate::server::state::AppState;
use crate::tasks::handlers::{create_task, delete_task, health, list_tasks, update_task};
use crate::weather::handlers::get_weather;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Health check endpoint
        .route("/health", axum::routing::get(health))
        // Task endpoints
        .route(
            "/tasks",
            axum::routing::get(list_tasks).post(create_task),
        )
        .route(
            "/tasks/{id}",
            axum::routing::put(update_task).delete(delete_task),
        )
        // Weather proxy endpoint
        .route("/weather", axum::routing::get(get_weather))
}
