use futures::future::BoxFuture;

use super::filter::TaskFilter;
use super::model::Task;
use crate::error::{ServiceError, ServiceResult};

/// Persistence seam for tasks.
///
/// Ids are opaque strings to callers. An empty id is rejected with
/// [`ServiceError::EmptyId`](crate::error::ServiceError::EmptyId) and an id
/// the store doesn't know with
/// [`ServiceError::TaskNotFound`](crate::error::ServiceError::TaskNotFound).
pub trait TaskStore: Send + Sync {
    /// Tasks matching `filter`, ordered by date then id, at most `limit` of them.
    fn list<'a>(
        &'a self,
        limit: usize,
        filter: &'a TaskFilter,
    ) -> BoxFuture<'a, ServiceResult<Vec<Task>>>;

    fn get<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ServiceResult<Task>>;

    /// Stores a new task, ignoring any id it carries, and returns the assigned id.
    fn insert(&self, task: Task) -> BoxFuture<'_, ServiceResult<String>>;

    /// Replaces every field of the task with the same id.
    fn update(&self, task: Task) -> BoxFuture<'_, ServiceResult<()>>;

    fn update_date<'a>(&'a self, id: &'a str, date: &'a str) -> BoxFuture<'a, ServiceResult<()>>;

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ServiceResult<()>>;
}

/// Parses a store id; anything that isn't a number can't name a stored task.
pub(crate) fn parse_id<T: std::str::FromStr>(id: &str) -> ServiceResult<T> {
    if id.is_empty() {
        return Err(ServiceError::EmptyId);
    }
    id.parse()
        .map_err(|_err| ServiceError::TaskNotFound(id.to_string()))
}
