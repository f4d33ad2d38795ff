//! Task HTTP handlers
//!
//! Missing tasks are reported in the body (`null`, `{"success": false}`)
//! rather than with a 404.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::{CreateTaskInput, DeleteResult, Task, UpdateTaskInput};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::services::TaskService;
use crate::AppState;

/// List all tasks, newest first
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let service = TaskService::new(state.db);
    let tasks = service.get_tasks().await?;
    Ok(Json(tasks))
}

/// Get a task by ID
pub async fn get_task(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
) -> AppResult<Json<Option<Task>>> {
    let service = TaskService::new(state.db);
    let task = service.get_task(task_id).await?;
    Ok(Json(task))
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTaskInput>,
) -> AppResult<impl IntoResponse> {
    let service = TaskService::new(state.db);
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task's title and/or description
pub async fn update_task(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
    ApiJson(input): ApiJson<UpdateTaskInput>,
) -> AppResult<Json<Option<Task>>> {
    let service = TaskService::new(state.db);
    let task = service.update_task(task_id, input).await?;
    Ok(Json(task))
}

/// Delete a task
pub async fn delete_task(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
) -> AppResult<Json<DeleteResult>> {
    let service = TaskService::new(state.db);
    let result = service.delete_task(task_id).await?;
    Ok(Json(result))
}
