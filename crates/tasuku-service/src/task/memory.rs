use std::collections::BTreeMap;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use super::filter::TaskFilter;
use super::model::Task;
use super::store::{TaskStore, parse_id};
use crate::error::{ServiceError, ServiceResult};

/// Process-local [`TaskStore`] keyed by a monotonically increasing id.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    inner: RwLock<Tasks>,
}

#[derive(Debug, Default)]
struct Tasks {
    last_id: u64,
    by_id: BTreeMap<u64, Task>,
}

impl InMemoryTaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn list<'a>(
        &'a self,
        limit: usize,
        filter: &'a TaskFilter,
    ) -> BoxFuture<'a, ServiceResult<Vec<Task>>> {
        Box::pin(async move {
            let tasks = self.inner.read().await;
            // by_id iterates in id order and the sort is stable
            let mut matching: Vec<Task> = tasks
                .by_id
                .values()
                .filter(|task| filter.matches(task))
                .cloned()
                .collect();
            matching.sort_by(|a, b| a.date.cmp(&b.date));
            matching.truncate(limit);
            Ok(matching)
        })
    }

    fn get<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ServiceResult<Task>> {
        Box::pin(async move {
            let key: u64 = parse_id(id)?;
            self.inner
                .read()
                .await
                .by_id
                .get(&key)
                .cloned()
                .ok_or_else(|| ServiceError::TaskNotFound(id.to_string()))
        })
    }

    fn insert(&self, mut task: Task) -> BoxFuture<'_, ServiceResult<String>> {
        Box::pin(async move {
            let mut tasks = self.inner.write().await;
            tasks.last_id += 1;
            let key = tasks.last_id;
            task.id = key.to_string();
            tasks.by_id.insert(key, task);

            tracing::debug!(id = key, "Task inserted");
            Ok(key.to_string())
        })
    }

    fn update(&self, task: Task) -> BoxFuture<'_, ServiceResult<()>> {
        Box::pin(async move {
            let key: u64 = parse_id(&task.id)?;
            let mut tasks = self.inner.write().await;
            let slot = tasks
                .by_id
                .get_mut(&key)
                .ok_or_else(|| ServiceError::TaskNotFound(task.id.clone()))?;
            *slot = task;
            Ok(())
        })
    }

    fn update_date<'a>(&'a self, id: &'a str, date: &'a str) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let key: u64 = parse_id(id)?;
            let mut tasks = self.inner.write().await;
            let task = tasks
                .by_id
                .get_mut(&key)
                .ok_or_else(|| ServiceError::TaskNotFound(id.to_string()))?;
            date.clone_into(&mut task.date);
            Ok(())
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let key: u64 = parse_id(id)?;
            self.inner
                .write()
                .await
                .by_id
                .remove(&key)
                .map(|_task| ())
                .ok_or_else(|| ServiceError::TaskNotFound(id.to_string()))
        })
    }
}
