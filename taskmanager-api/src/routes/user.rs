/// User CRUD endpoints
///
/// # Endpoints
///
/// - `GET /user/` - List all users
/// - `GET /user/user_id?user_id=<id>` - Get a user by id
/// - `POST /user/create` - Create a user
/// - `PUT /user/update?user_id=<id>` - Update a user's mutable fields
/// - `DELETE /user/delete?user_id=<id>` - Delete a user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::StatusResponse,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskmanager_shared::models::user::{CreateUser, UpdateUser, User};

/// Query parameters selecting a user by id
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: i32,
}

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Display username (slug is derived from this)
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i32,
}

/// Update user request
///
/// Username (and therefore the slug) cannot be changed after creation.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

/// List all users
///
/// Returns an empty JSON list when no users exist.
pub async fn all_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Get a single user by id
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
pub async fn user_by_id(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, query.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(user))
}

/// Create a new user
///
/// Rejects the request when a user with the exact same username, firstname,
/// lastname, and age already exists. The slug is derived from the username
/// during insertion.
///
/// # Errors
///
/// - `400 Bad Request`: duplicate user
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    let data = CreateUser {
        username: req.username,
        firstname: req.firstname,
        lastname: req.lastname,
        age: req.age,
    };

    if User::find_duplicate(&state.db, &data).await?.is_some() {
        return Err(ApiError::BadRequest(
            "User with this ID or username already exists".to_string(),
        ));
    }

    User::create(&state.db, data).await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new(StatusCode::CREATED, "Successful")),
    ))
}

/// Update a user's firstname, lastname, and age
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<StatusResponse>> {
    User::update(
        &state.db,
        query.user_id,
        UpdateUser {
            firstname: req.firstname,
            lastname: req.lastname,
            age: req.age,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(StatusResponse::new(
        StatusCode::OK,
        "User update is successful!",
    )))
}

/// Delete a user
///
/// The user's tasks are removed along with it.
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<StatusResponse>> {
    let deleted = User::delete(&state.db, query.user_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Ok(Json(StatusResponse::new(
        StatusCode::OK,
        "User delete is successful!",
    )))
}
