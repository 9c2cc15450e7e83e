/**
 * Task Request Types
 *
 * This module defines the request bodies accepted by the task endpoints.
 * Every field is explicitly optional so the handlers can apply defaults
 * and partial-update semantics themselves instead of relying on dynamic
 * payload inspection.
 */

use serde::{Deserialize, Deserializer};

/// Create request body for `POST /tasks`
///
/// `title` is required in practice but modeled as optional so the
/// handler can reject a missing title with a 400 instead of a
/// deserialization failure.
#[derive(Deserialize, Debug, Default)]
pub struct CreateTaskRequest {
    /// Task title; absent, null, or empty is rejected
    pub title: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Initial status, defaults to "pending" when absent
    pub status: Option<String>,
}

/// Update request body for `PUT /tasks/{id}`
///
/// Fields omitted from the body are left unchanged. For `description`
/// the outer `Option` records whether the field was present at all and
/// the inner `Option` carries its value, so an explicit `null` clears
/// the description while an absent field leaves it alone.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateTaskRequest {
    /// New title; must be non-empty when present
    pub title: Option<String>,
    /// New description; explicit null clears it
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// New status
    pub status: Option<String>,
}

/// Deserialize a field so that presence (even as null) maps to `Some`
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
