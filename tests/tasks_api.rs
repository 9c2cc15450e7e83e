//! Task API integration tests
//!
//! Exercises the task endpoints end-to-end through the real router,
//! backed by a throwaway SQLite database per test.

mod common;

use axum::http::StatusCode;
use common::spawn_app;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn health_returns_ok() {
    let app = spawn_app().await;

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_task_returns_created_task() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/tasks")
        .json(&json!({ "title": "write report" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let task: Value = response.json();
    assert_eq!(task["title"], "write report");
    assert_eq!(task["status"], "pending");
    assert_eq!(task["description"], Value::Null);
    assert!(task["id"].is_i64());

    // The new task shows up in the listing
    let list: Vec<Value> = app.server.get("/tasks").await.json();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], task);
}

#[tokio::test]
async fn create_task_with_all_fields() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/tasks")
        .json(&json!({
            "title": "water plants",
            "description": "the ones on the balcony",
            "status": "done"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let task: Value = response.json();
    assert_eq!(task["description"], "the ones on the balcony");
    assert_eq!(task["status"], "done");
}

#[tokio::test]
async fn create_task_without_title_returns_bad_request() {
    let app = spawn_app().await;

    let response = app.server.post("/tasks").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "title is required" }));

    // Nothing was persisted
    let list: Vec<Value> = app.server.get("/tasks").await.json();
    assert!(list.is_empty());
}

#[tokio::test]
async fn create_task_with_empty_title_returns_bad_request() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/tasks")
        .json(&json!({ "title": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_tasks_preserves_insertion_order() {
    let app = spawn_app().await;

    for title in ["first", "second", "third"] {
        let response = app
            .server
            .post("/tasks")
            .json(&json!({ "title": title }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let list: Vec<Value> = app.server.get("/tasks").await.json();
    let titles: Vec<&str> = list.iter().filter_map(|t| t["title"].as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn update_status_only_keeps_other_fields() {
    let app = spawn_app().await;

    let created: Value = app
        .server
        .post("/tasks")
        .json(&json!({ "title": "refactor", "description": "the router" }))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/tasks/{}", id))
        .json(&json!({ "status": "done" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["status"], "done");
    assert_eq!(updated["title"], "refactor");
    assert_eq!(updated["description"], "the router");
}

#[tokio::test]
async fn update_with_null_description_clears_it() {
    let app = spawn_app().await;

    let created: Value = app
        .server
        .post("/tasks")
        .json(&json!({ "title": "tidy up", "description": "old note" }))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/tasks/{}", id))
        .json(&json!({ "description": null }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["description"], Value::Null);
    assert_eq!(updated["title"], "tidy up");
}

#[tokio::test]
async fn update_with_empty_body_changes_nothing() {
    let app = spawn_app().await;

    let created: Value = app
        .server
        .post("/tasks")
        .json(&json!({ "title": "stay put", "status": "done" }))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/tasks/{}", id))
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn update_with_empty_title_returns_bad_request() {
    let app = spawn_app().await;

    let created: Value = app
        .server
        .post("/tasks")
        .json(&json!({ "title": "keep me" }))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/tasks/{}", id))
        .json(&json!({ "title": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // The task is unchanged
    let list: Vec<Value> = app.server.get("/tasks").await.json();
    assert_eq!(list[0]["title"], "keep me");
}

#[tokio::test]
async fn update_unknown_id_returns_not_found() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/tasks/999")
        .json(&json!({ "status": "done" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_task_removes_it() {
    let app = spawn_app().await;

    let created: Value = app
        .server
        .post("/tasks")
        .json(&json!({ "title": "short lived" }))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = app.server.delete(&format!("/tasks/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "deleted": id }));

    let list: Vec<Value> = app.server.get("/tasks").await.json();
    assert!(list.is_empty());
}

#[tokio::test]
async fn delete_unknown_id_returns_not_found() {
    let app = spawn_app().await;

    let response = app.server.delete("/tasks/999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn root_serves_frontend_entry_file() {
    let app = spawn_app().await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let app = spawn_app().await;

    let response = app.server.get("/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
