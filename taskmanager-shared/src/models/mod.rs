/// Database models for Taskmanager
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: User accounts with a unique, username-derived slug
/// - `task`: Tasks owned by a single user
///
/// # Example
///
/// ```no_run
/// use taskmanager_shared::models::user::{CreateUser, User};
/// use taskmanager_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     username: "johndoe".to_string(),
///     firstname: "John".to_string(),
///     lastname: "Doe".to_string(),
///     age: 30,
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
