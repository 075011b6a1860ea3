//! Task route handlers.

use super::error::ApiError;
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{TaskPayload, TaskService},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mockable::Clock;
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::Arc;

const MESSAGE_TASK_CREATED: &str = "Task created successfully";
const MESSAGE_TASK_UPDATED: &str = "Task updated successfully";
const MESSAGE_TASK_DELETED: &str = "Task deleted successfully";

/// Parses a raw path segment into a task identifier.
///
/// A malformed identifier maps to not-found: such a task cannot exist.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::from_str(raw).map_err(|_| ApiError::NotFound("Task"))
}

/// Lists all tasks for `GET /api/v1/tasks`.
pub async fn list_tasks<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = service.get_tasks().await?;
    let count = tasks.len();
    Ok(Json(json!({ "data": tasks, "count": count })))
}

/// Retrieves a single task for `GET /api/v1/tasks/{id}`.
pub async fn get_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = parse_task_id(&id)?;
    let task = service.get_task(task_id).await?;
    Ok(Json(json!({ "data": task })))
}

/// Creates a new task for `POST /api/v1/tasks`.
pub async fn create_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let created = service.create_task(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "data": created, "message": MESSAGE_TASK_CREATED })),
    ))
}

/// Updates an existing task for `PUT /api/v1/tasks/{id}`.
pub async fn update_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Path(id): Path<String>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = parse_task_id(&id)?;
    let updated = service.update_task(task_id, payload).await?;
    Ok(Json(json!({ "data": updated, "message": MESSAGE_TASK_UPDATED })))
}

/// Removes a task for `DELETE /api/v1/tasks/{id}`.
pub async fn delete_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = parse_task_id(&id)?;
    service.delete_task(task_id).await?;
    Ok(Json(json!({ "message": MESSAGE_TASK_DELETED })))
}
