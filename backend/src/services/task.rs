//! Task service for the personal task manager

use shared::{CreateTaskInput, DeleteResult, Task, UpdateTaskInput};
use sqlx::PgPool;
use validator::Validate;

use crate::error::AppResult;

/// Task service for managing tasks
#[derive(Clone)]
pub struct TaskService {
    db: PgPool,
}

impl TaskService {
    /// Create a new TaskService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a task. Both timestamps come from the same `NOW()`.
    pub async fn create_task(&self, input: CreateTaskInput) -> AppResult<Task> {
        input.validate()?;

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description, created_at, updated_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(task_id = task.id, "Task created");
        Ok(task)
    }

    /// Get a task by ID, `None` when it does not exist
    pub async fn get_task(&self, task_id: i32) -> AppResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(task_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(task)
    }

    /// Get all tasks, newest first
    pub async fn get_tasks(&self) -> AppResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, created_at, updated_at
            FROM tasks
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(tasks)
    }

    /// Update the provided fields of a task.
    ///
    /// `updated_at` is refreshed even when no field is provided. Returns
    /// `None` when the task does not exist.
    pub async fn update_task(
        &self,
        task_id: i32,
        input: UpdateTaskInput,
    ) -> AppResult<Option<Task>> {
        input.validate()?;

        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1
            RETURNING id, title, description, created_at, updated_at
            "#,
        )
        .bind(task_id)
        .bind(&input.title)
        .bind(&input.description)
        .fetch_optional(&self.db)
        .await?;

        match &task {
            Some(task) => tracing::info!(task_id = task.id, "Task updated"),
            None => tracing::debug!(task_id, "Update skipped, task not found"),
        }

        Ok(task)
    }

    /// Delete a task. `success` is false when nothing was deleted.
    pub async fn delete_task(&self, task_id: i32) -> AppResult<DeleteResult> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task_id)
            .execute(&self.db)
            .await?;

        let success = result.rows_affected() > 0;
        if success {
            tracing::info!(task_id, "Task deleted");
        }

        Ok(DeleteResult { success })
    }
}
