/// Task CRUD endpoints
///
/// # Endpoints
///
/// - `GET /task/` - List all tasks
/// - `GET /task/:task_id` - Get a task by id
/// - `POST /task/create?user_id=<id>` - Create a task for a user
/// - `PUT /task/update?task_id=<id>` - Update a task
/// - `DELETE /task/delete?task_id=<id>` - Delete a task
/// - `GET /task/user/:user_id/tasks` - List a user's tasks

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::user::UserIdQuery,
    routes::StatusResponse,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskmanager_shared::models::task::{CreateTask, Task, UpdateTask};
use taskmanager_shared::models::user::User;

/// Query parameters selecting a task by id
#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    pub task_id: i32,
}

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

/// Update task request
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

/// List all tasks
pub async fn all_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

/// Get a single task by id
///
/// # Errors
///
/// - `404 Not Found`: no task with the given id
pub async fn task_by_id(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(task))
}

/// Create a new task bound to an existing user
///
/// The owning user is selected via the `user_id` query parameter and must
/// exist; nothing is inserted otherwise.
///
/// # Errors
///
/// - `404 Not Found`: referenced user does not exist
pub async fn create_task(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    if User::find_by_id(&state.db, query.user_id).await?.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Task::create(
        &state.db,
        CreateTask {
            title: req.title,
            content: req.content,
            priority: req.priority,
            user_id: query.user_id,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new(StatusCode::CREATED, "Successful")),
    ))
}

/// Update a task's title, content, and priority
///
/// # Errors
///
/// - `404 Not Found`: no task with the given id
pub async fn update_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<StatusResponse>> {
    Task::update(
        &state.db,
        query.task_id,
        UpdateTask {
            title: req.title,
            content: req.content,
            priority: req.priority,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(StatusResponse::new(
        StatusCode::OK,
        "Task update is successful!",
    )))
}

/// Delete a task
///
/// # Errors
///
/// - `404 Not Found`: no task with the given id
pub async fn delete_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<StatusResponse>> {
    let deleted = Task::delete(&state.db, query.task_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(StatusResponse::new(
        StatusCode::OK,
        "The task has been deleted",
    )))
}

/// List all tasks owned by a user
///
/// Returns an empty list for a user with no tasks.
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
pub async fn tasks_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<Task>>> {
    if User::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    let tasks = Task::list_by_user(&state.db, user_id).await?;
    Ok(Json(tasks))
}
