use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response, Json},
    http::StatusCode,
};
use crate::errors::{AppError, AppResult};
use crate::models::{TaskFilter, TaskForm, TaskPatch};
use crate::services::{TaskRegistry, UserStore};

pub async fn create_task(
    State((registry, _)): State<(TaskRegistry, UserStore)>,
    Json(form): Json<TaskForm>,
) -> AppResult<Response> {
    let task = registry.create(form).await;

    tracing::info!("Created task {}", task.id);
    Ok((StatusCode::CREATED, Json(task)).into_response())
}

pub async fn get_task(
    State((registry, _)): State<(TaskRegistry, UserStore)>,
    Path(task_id): Path<u64>,
) -> AppResult<Response> {
    tracing::debug!("Fetching task {}", task_id);

    let task = registry
        .get(task_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Task {} not found", task_id)))?;

    Ok(Json(task).into_response())
}

pub async fn update_task(
    State((registry, _)): State<(TaskRegistry, UserStore)>,
    Path(task_id): Path<u64>,
    Json(patch): Json<TaskPatch>,
) -> AppResult<Response> {
    let task = registry
        .update(task_id, patch)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Task {} not found", task_id)))?;

    tracing::info!("Updated task {}", task_id);
    Ok(Json(task).into_response())
}

pub async fn delete_task(
    State((registry, _)): State<(TaskRegistry, UserStore)>,
    Path(task_id): Path<u64>,
) -> AppResult<Response> {
    if !registry.remove(task_id).await {
        return Err(AppError::NotFound(format!("Task {} not found", task_id)));
    }

    tracing::info!("Deleted task {}", task_id);
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn list_tasks(
    State((registry, _)): State<(TaskRegistry, UserStore)>,
    Query(filter): Query<TaskFilter>,
) -> AppResult<Response> {
    let tasks = registry.list(filter).await;

    tracing::debug!("Listing {} tasks", tasks.len());
    Ok(Json(tasks).into_response())
}
