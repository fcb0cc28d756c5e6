/// Task model and database operations
///
/// Tasks belong to exactly one user via `user_id`. The owning user must
/// exist when a task is created; the foreign key carries ON DELETE CASCADE
/// so a user's tasks disappear with the user.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id SERIAL PRIMARY KEY,
///     title TEXT NOT NULL,
///     content TEXT NOT NULL,
///     priority INTEGER NOT NULL,
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task model representing a single user-owned task
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (auto-incrementing)
    pub id: i32,

    /// Short title
    pub title: String,

    /// Task body
    pub content: String,

    /// Numeric priority
    pub priority: i32,

    /// Owning user
    pub user_id: i32,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Short title
    pub title: String,

    /// Task body
    pub content: String,

    /// Numeric priority
    pub priority: i32,

    /// Owning user (must exist)
    pub user_id: i32,
}

/// Input for updating a task
///
/// Ownership cannot be transferred; `user_id` is not part of the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: String,

    /// New body
    pub content: String,

    /// New priority
    pub priority: i32,
}

impl Task {
    /// Creates a new task bound to the given user
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, content, priority, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, priority, user_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Updates a task's title, content, and priority
    ///
    /// Returns the updated task if found, None if the task doesn't exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $2,
                content = $3,
                priority = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, priority, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task by ID
    ///
    /// Returns true if a task was deleted, false if no such task existed.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists all tasks
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id, created_at, updated_at
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists all tasks owned by the given user
    ///
    /// Returns an empty vector for a user with no tasks. Callers are
    /// responsible for checking that the user itself exists.
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id, created_at, updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_struct() {
        let create_task = CreateTask {
            title: "Write report".to_string(),
            content: "Quarterly numbers".to_string(),
            priority: 2,
            user_id: 1,
        };

        assert_eq!(create_task.title, "Write report");
        assert_eq!(create_task.user_id, 1);
    }

    #[test]
    fn test_update_task_struct_has_no_owner() {
        let update = UpdateTask {
            title: "Write report".to_string(),
            content: "Final numbers".to_string(),
            priority: 1,
        };

        assert_eq!(update.priority, 1);
    }

    // Integration tests for database operations are in tests/models_tests.rs
}
