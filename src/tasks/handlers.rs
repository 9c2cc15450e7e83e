/**
 * Task HTTP Handlers
 *
 * This module implements the handlers for the task endpoints:
 *
 * - `GET /health` - health check
 * - `GET /tasks` - list all tasks
 * - `POST /tasks` - create a task
 * - `PUT /tasks/{id}` - partially update a task
 * - `DELETE /tasks/{id}` - delete a task
 *
 * # Validation
 *
 * - Create rejects an absent, null, or empty `title` with 400 and
 *   performs no write
 * - Update rejects a present-but-empty `title` with 400, keeping the
 *   non-empty-title invariant intact for persisted tasks
 * - Update and delete return 404 for unknown ids
 *
 * Each mutation commits exactly one change to the store per call.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::tasks::types::{CreateTaskRequest, UpdateTaskRequest};
use super::db::{self, Task};

/// Default status applied when a create request omits `status`
const DEFAULT_STATUS: &str = "pending";

/// Health check handler
///
/// Always returns `{"status": "ok"}`; touches neither the database nor
/// the network.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// List all tasks
///
/// Returns every persisted task in insertion order. No pagination.
pub async fn list_tasks(State(pool): State<SqlitePool>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = db::list_tasks(&pool).await?;
    Ok(Json(tasks))
}

/// Create a task
///
/// # Errors
///
/// * `400 Bad Request` - if `title` is absent, null, or empty; nothing
///   is persisted in that case
pub async fn create_task(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let title = request.title.unwrap_or_default();
    if title.is_empty() {
        tracing::warn!("Create task rejected: missing title");
        return Err(ApiError::bad_request("title is required"));
    }

    let status = request.status.unwrap_or_else(|| DEFAULT_STATUS.to_string());

    let task = db::create_task(&pool, &title, request.description.as_deref(), &status).await?;
    tracing::info!("Created task {} ({:?})", task.id, task.title);

    Ok((StatusCode::CREATED, Json(task)))
}

/// Partially update a task
///
/// Replaces only the fields present in the request body and returns the
/// full updated task. An explicit `"description": null` clears the
/// description; an absent field leaves it unchanged.
///
/// # Errors
///
/// * `404 Not Found` - if no task exists with the given id
/// * `400 Bad Request` - if `title` is present but empty
pub async fn update_task(
    State(pool): State<SqlitePool>,
    Path(task_id): Path<i64>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let existing = db::get_task(&pool, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("task not found"))?;

    if matches!(request.title.as_deref(), Some("")) {
        tracing::warn!("Update task {} rejected: empty title", task_id);
        return Err(ApiError::bad_request("title must not be empty"));
    }

    let title = request.title.unwrap_or(existing.title);
    let description = match request.description {
        Some(description) => description,
        None => existing.description,
    };
    let status = request.status.unwrap_or(existing.status);

    let task = db::update_task(&pool, task_id, &title, description.as_deref(), &status).await?;
    tracing::info!("Updated task {}", task.id);

    Ok(Json(task))
}

/// Delete a task
///
/// Removes the task permanently and returns `{"deleted": <id>}`.
///
/// # Errors
///
/// * `404 Not Found` - if no task exists with the given id
pub async fn delete_task(
    State(pool): State<SqlitePool>,
    Path(task_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = db::delete_task(&pool, task_id).await?;
    if !deleted {
        return Err(ApiError::not_found("task not found"));
    }

    tracing::info!("Deleted task {}", task_id);
    Ok(Json(json!({ "deleted": task_id })))
}
