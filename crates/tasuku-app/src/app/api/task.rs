//! Task CRUD and completion handlers.

use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};
use serde::Serialize;
use serde_json::{Value, json};
use tasuku_service::task::Task;

use super::{TASK_ROUTE_COMPONENT, TASKS_ROUTE_COMPONENT};
use crate::app::today;
use crate::depot::{settings_from_depot, tasks_from_depot};
use crate::error::{AppError, AppResult};

/// ## Summary
/// Task list response payload
#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

/// ## Summary
/// Created task response payload
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

fn id_param(req: &Request) -> String {
    req.query::<String>("id").unwrap_or_default()
}

async fn task_body(req: &mut Request) -> AppResult<Task> {
    req.parse_json::<Task>()
        .await
        .map_err(|err| AppError::BadRequest(format!("JSON deserialization failed: {err}")))
}

/// ## Summary
/// GET /api/tasks?search= - Lists tasks, bounded by `limits.tasks_limit`.
///
/// ## Errors
/// Returns HTTP 500 if the depot is missing its state or the store fails.
#[handler]
async fn list_tasks(req: &mut Request, depot: &mut Depot) -> AppResult<Json<TasksResponse>> {
    let settings = settings_from_depot(depot)?;
    let service = tasks_from_depot(depot)?;
    let search = req.query::<String>("search").unwrap_or_default();

    let tasks = service.list(&search, settings.limits.tasks_limit).await?;
    Ok(Json(TasksResponse { tasks }))
}

/// ## Summary
/// POST /api/task - Creates a task from a JSON body.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body, a missing title, a bad date or an
/// invalid repeat rule.
#[handler]
async fn add_task(req: &mut Request, depot: &mut Depot) -> AppResult<Json<CreatedResponse>> {
    let service = tasks_from_depot(depot)?;
    let task = task_body(req).await?;

    let id = service.add(task, today()).await?;
    Ok(Json(CreatedResponse { id }))
}

/// ## Summary
/// GET /api/task?id= - Fetches a single task.
///
/// ## Errors
/// Returns HTTP 400 for an empty id and HTTP 404 for an unknown one.
#[handler]
async fn get_task(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Task>> {
    let service = tasks_from_depot(depot)?;
    let task = service.get(&id_param(req)).await?;
    Ok(Json(task))
}

/// ## Summary
/// PUT /api/task - Replaces a task with the JSON body, matched by its `id`.
///
/// ## Errors
/// Returns HTTP 400 for invalid input and HTTP 404 for an unknown id.
#[handler]
async fn update_task(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Value>> {
    let service = tasks_from_depot(depot)?;
    let task = task_body(req).await?;

    service.update(task, today()).await?;
    Ok(Json(json!({})))
}

/// ## Summary
/// DELETE /api/task?id= - Removes a task.
///
/// ## Errors
/// Returns HTTP 400 for an empty id and HTTP 404 for an unknown one.
#[handler]
async fn delete_task(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Value>> {
    let service = tasks_from_depot(depot)?;
    service.delete(&id_param(req)).await?;
    Ok(Json(json!({})))
}

/// ## Summary
/// POST /api/task/done?id= - Marks a task done.
///
/// One-off tasks are deleted; repeating tasks move to their next date.
///
/// ## Errors
/// Returns HTTP 400 for an empty id or a rule that can't advance and HTTP
/// 404 for an unknown id.
#[handler]
async fn complete_task(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Value>> {
    let service = tasks_from_depot(depot)?;
    let id = id_param(req);

    let outcome = service.complete(&id, today()).await?;
    tracing::debug!(%id, ?outcome, "Task done");
    Ok(Json(json!({})))
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path(TASKS_ROUTE_COMPONENT).get(list_tasks))
        .push(
            Router::with_path(TASK_ROUTE_COMPONENT)
                .get(get_task)
                .post(add_task)
                .put(update_task)
                .delete(delete_task)
                .push(Router::with_path("done").post(complete_task)),
        )
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
