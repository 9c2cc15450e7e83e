//! Database operations for tasks
//!
//! This module contains the task row model and the SQLite operations
//! behind the task endpoints. Schema creation lives in `migrations/` and
//! runs once at startup.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task struct representing a row in the `tasks` table
///
/// Serialized shape on the wire:
/// `{"id": int, "title": string, "description": string|null, "status": string}`
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, assigned by the store
    pub id: i64,
    /// Task title, never empty once persisted
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Task status, defaults to "pending" at creation
    pub status: String,
}

/// Create a new task
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `title` - Task title (validated non-empty by the handler)
/// * `description` - Optional description
/// * `status` - Initial status
///
/// # Returns
/// The persisted task with its assigned id
pub async fn create_task(
    pool: &SqlitePool,
    title: &str,
    description: Option<&str>,
    status: &str,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (title, description, status)
        VALUES (?, ?, ?)
        RETURNING id, title, description, status
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(status)
    .fetch_one(pool)
    .await
}

/// List all tasks in insertion order
pub async fn list_tasks(pool: &SqlitePool) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, status
        FROM tasks
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get a task by id
///
/// # Returns
/// The task, or `None` if no task exists with that id
pub async fn get_task(pool: &SqlitePool, id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, status
        FROM tasks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Replace all mutable fields of a task
///
/// The handler merges the partial request with the existing row first;
/// this function always writes the full field set in a single statement.
pub async fn update_task(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    description: Option<&str>,
    status: &str,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET title = ?, description = ?, status = ?
        WHERE id = ?
        RETURNING id, title, description, status
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(status)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Delete a task by id
///
/// # Returns
/// `true` if a row was removed, `false` if no task had that id
pub async fn delete_task(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
