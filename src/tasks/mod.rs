//! Tasks Module
//!
//! This module implements the task resource: the persisted model, the
//! database operations over it, and the HTTP handlers for the five task
//! operations (list, create, update, delete, health).
//!
//! # Architecture
//!
//! The tasks module is organized into focused submodules:
//!
//! - **`db`** - Task model and database operations
//! - **`types`** - Request types for create and update
//! - **`handlers`** - HTTP handlers
//!
//! # Module Structure
//!
//! ```text
//! tasks/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Task model and SQLite operations
//! ├── types.rs     - CreateTaskRequest / UpdateTaskRequest
//! └── handlers.rs  - list / create / update / delete / health handlers
//! ```
//!
//! # Lifecycle
//!
//! Tasks are created with a required non-empty title (description and
//! status optional, status defaulting to `"pending"`), mutated only
//! through the partial-update handler, and removed permanently by the
//! delete handler. Each mutation commits exactly one change to the store.

/// Task model and database operations
pub mod db;

/// Request types for the task endpoints
pub mod types;

/// HTTP handlers for the task endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use db::Task;
pub use handlers::{create_task, delete_task, health, list_tasks, update_task};
pub use types::{CreateTaskRequest, UpdateTaskRequest};
