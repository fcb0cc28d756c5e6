/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskmanager_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskmanager_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                        # Welcome message
/// ├── GET  /health                  # Health check
/// ├── /user/                        # User route group
/// │   ├── GET    /                  # List all users
/// │   ├── GET    /user_id?user_id=  # Get user by id
/// │   ├── POST   /create            # Create user
/// │   ├── PUT    /update?user_id=   # Update user
/// │   └── DELETE /delete?user_id=   # Delete user
/// └── /task/                        # Task route group
///     ├── GET    /                  # List all tasks
///     ├── GET    /:task_id          # Get task by id
///     ├── POST   /create?user_id=   # Create task for user
///     ├── PUT    /update?task_id=   # Update task
///     ├── DELETE /delete?task_id=   # Delete task
///     └── GET    /user/:user_id/tasks  # List a user's tasks
/// ```
///
/// # Middleware Stack
///
/// 1. Request logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer, origins from configuration)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let user_routes = Router::new()
        .route("/", get(routes::user::all_users))
        .route("/user_id", get(routes::user::user_by_id))
        .route("/create", post(routes::user::create_user))
        .route("/update", put(routes::user::update_user))
        .route("/delete", delete(routes::user::delete_user));

    let task_routes = Router::new()
        .route("/", get(routes::task::all_tasks))
        .route("/create", post(routes::task::create_task))
        .route("/update", put(routes::task::update_task))
        .route("/delete", delete(routes::task::delete_task))
        .route("/:task_id", get(routes::task::task_by_id))
        .route("/user/:user_id/tasks", get(routes::task::tasks_by_user));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
    };

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(routes::health::health_check))
        .nest("/user", user_routes)
        .nest("/task", task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Welcome endpoint at the service root
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to Taskmanager" }))
}
