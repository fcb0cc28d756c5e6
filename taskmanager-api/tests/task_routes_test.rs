/// Integration tests for the /task route group
///
/// Covers the user-existence check at creation, per-user task listing,
/// cascade on user deletion, and real 404 statuses with `detail` bodies.

mod common;

use axum::http::StatusCode;
use common::{create_test_task, send_request, unique_username, TestContext};
use serde_json::json;
use taskmanager_shared::models::task::Task;
use taskmanager_shared::models::user::{CreateUser, User};
use uuid::Uuid;

#[tokio::test]
async fn test_create_task_for_existing_user() {
    let ctx = TestContext::new().await.unwrap();

    let uri = format!("/task/create?user_id={}", ctx.user.id);
    let (status, body) = send_request(
        &ctx.app,
        "POST",
        &uri,
        Some(json!({
            "title": "Write report",
            "content": "Quarterly numbers",
            "priority": 2
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["transaction"], "Successful");

    let tasks = Task::list_by_user(&ctx.db, ctx.user.id).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Write report");
    assert_eq!(tasks[0].user_id, ctx.user.id);

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_create_task_for_missing_user_inserts_nothing() {
    let ctx = TestContext::new().await.unwrap();

    let title = format!("orphan task {}", Uuid::new_v4());
    let uri = format!("/task/create?user_id={}", i32::MAX);
    let (status, body) = send_request(
        &ctx.app,
        "POST",
        &uri,
        Some(json!({
            "title": title.as_str(),
            "content": "should never exist",
            "priority": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User was not found");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE title = $1")
        .bind(&title)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(count, 0);

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_task_by_id_roundtrip_and_not_found() {
    let ctx = TestContext::new().await.unwrap();
    let task = create_test_task(&ctx, "Fetch me").await.unwrap();

    let uri = format!("/task/{}", task.id);
    let (status, body) = send_request(&ctx.app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], task.id);
    assert_eq!(body["title"], "Fetch me");

    let uri = format!("/task/{}", i32::MAX);
    let (status, body) = send_request(&ctx.app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Task was not found");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_update_task_changes_fields_and_keeps_owner() {
    let ctx = TestContext::new().await.unwrap();
    let task = create_test_task(&ctx, "Before").await.unwrap();

    let uri = format!("/task/update?task_id={}", task.id);
    let (status, body) = send_request(
        &ctx.app,
        "PUT",
        &uri,
        Some(json!({
            "title": "After",
            "content": "new content",
            "priority": 5
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction"], "Task update is successful!");

    let updated = Task::find_by_id(&ctx.db, task.id).await.unwrap().unwrap();
    assert_eq!(updated.title, "After");
    assert_eq!(updated.content, "new content");
    assert_eq!(updated.priority, 5);
    assert_eq!(updated.user_id, ctx.user.id);

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_update_missing_task_returns_404() {
    let ctx = TestContext::new().await.unwrap();

    let uri = format!("/task/update?task_id={}", i32::MAX);
    let (status, body) = send_request(
        &ctx.app,
        "PUT",
        &uri,
        Some(json!({
            "title": "x",
            "content": "y",
            "priority": 0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Task was not found");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_delete_task_then_fetch_returns_404() {
    let ctx = TestContext::new().await.unwrap();
    let task = create_test_task(&ctx, "Delete me").await.unwrap();

    let uri = format!("/task/delete?task_id={}", task.id);
    let (status, body) = send_request(&ctx.app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction"], "The task has been deleted");

    let fetch_uri = format!("/task/{}", task.id);
    let (status, _) = send_request(&ctx.app, "GET", &fetch_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_request(&ctx.app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Task was not found");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_tasks_by_user_returns_exactly_that_users_tasks() {
    let ctx = TestContext::new().await.unwrap();

    let first = create_test_task(&ctx, "First").await.unwrap();
    let second = create_test_task(&ctx, "Second").await.unwrap();

    // A second user with no tasks
    let other = User::create(
        &ctx.db,
        CreateUser {
            username: unique_username(),
            firstname: "Other".to_string(),
            lastname: "User".to_string(),
            age: 25,
        },
    )
    .await
    .unwrap();

    let uri = format!("/task/user/{}/tasks", ctx.user.id);
    let (status, body) = send_request(&ctx.app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first.id as i64, second.id as i64]);

    let uri = format!("/task/user/{}/tasks", other.id);
    let (status, body) = send_request(&ctx.app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    let uri = format!("/task/user/{}/tasks", i32::MAX);
    let (status, body) = send_request(&ctx.app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User was not found");

    User::delete(&ctx.db, other.id).await.unwrap();
    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_deleting_user_cascades_to_tasks() {
    let ctx = TestContext::new().await.unwrap();
    let task = create_test_task(&ctx, "Doomed").await.unwrap();

    let uri = format!("/user/delete?user_id={}", ctx.user.id);
    let (status, _) = send_request(&ctx.app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let gone = Task::find_by_id(&ctx.db, task.id).await.unwrap();
    assert!(gone.is_none(), "task should be removed with its user");
}
