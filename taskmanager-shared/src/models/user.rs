/// User model and database operations
///
/// This module provides the User model and CRUD operations for managing
/// users. Each user owns zero or more tasks (see `models::task`); deleting
/// a user cascades to its tasks at the schema level.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id SERIAL PRIMARY KEY,
///     username TEXT NOT NULL,
///     firstname TEXT NOT NULL,
///     lastname TEXT NOT NULL,
///     age INTEGER NOT NULL,
///     slug TEXT NOT NULL UNIQUE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
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
/// println!("Created user {} with slug {}", user.id, user.slug);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::slug::slugify_username;

/// User model representing a registered user
///
/// The slug is derived from the username at creation time and is immutable
/// afterwards, as is the username itself.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (auto-incrementing)
    pub id: i32,

    /// Display username (immutable after creation)
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i32,

    /// URL-safe identifier derived from the username
    ///
    /// Unique across all users
    pub slug: String,

    /// When the user was created
    pub created_at: DateTime<Utc>,

    /// When the user was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
///
/// The slug is computed from `username` during `User::create`, not supplied
/// by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display username
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i32,
}

/// Input for updating an existing user
///
/// Username and slug cannot be updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New first name
    pub firstname: String,

    /// New last name
    pub lastname: String,

    /// New age
    pub age: i32,
}

impl User {
    /// Creates a new user in the database
    ///
    /// The slug is derived from the username via slugification before the
    /// insert.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Another user already holds the derived slug (unique constraint)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let slug = slugify_username(&data.username);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, firstname, lastname, age, slug)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, firstname, lastname, age, slug, created_at, updated_at
            "#,
        )
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(slug)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user exactly matching the given creation payload
    ///
    /// Used by the create endpoint to reject duplicates: a duplicate is a
    /// row agreeing on username, firstname, lastname, and age.
    pub async fn find_duplicate(
        pool: &PgPool,
        data: &CreateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug, created_at, updated_at
            FROM users
            WHERE username = $1 AND firstname = $2 AND lastname = $3 AND age = $4
            "#,
        )
        .bind(&data.username)
        .bind(&data.firstname)
        .bind(&data.lastname)
        .bind(data.age)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Updates an existing user
    ///
    /// Only firstname, lastname, and age change; username and slug stay as
    /// they were at creation. The `updated_at` timestamp is refreshed.
    ///
    /// # Returns
    ///
    /// The updated user if found, None if the user doesn't exist
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET firstname = $2,
                lastname = $3,
                age = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, firstname, lastname, age, slug, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user by ID
    ///
    /// The user's tasks are removed by the ON DELETE CASCADE constraint.
    ///
    /// # Returns
    ///
    /// True if a user was deleted, false if no such user existed
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists all users
    ///
    /// Returns an empty vector when no users exist.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}
