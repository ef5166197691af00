use std::sync::Arc;

use chrono::NaiveDate;
use tasuku_rule::next_date;
use tasuku_rule::rule::date::{format_date, parse_date_str};

use super::filter::TaskFilter;
use super::model::Task;
use super::store::TaskStore;
use crate::error::{ServiceError, ServiceResult};

/// Outcome of marking a task done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// One-off task, removed from the store.
    Deleted,
    /// Repeating task, moved to the contained `YYYYMMDD` date.
    Rescheduled(String),
}

/// Task operations on top of a [`TaskStore`].
///
/// Operations that depend on the current day take it as `today` so callers
/// decide which clock applies.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService").finish_non_exhaustive()
    }
}

impl TaskService {
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// ## Summary
    /// Validates a task and fills in its scheduling fields.
    ///
    /// An empty date becomes `today`. A repeating task's rule is always
    /// evaluated, and a date before `today` moves to the next occurrence
    /// (repeating) or to `today` (one-off).
    ///
    /// ## Errors
    /// Returns `ValidationError` for a missing title, `InvalidDate` for a
    /// malformed date, and `RuleError` when the repeat rule can't produce a
    /// next date.
    pub fn normalize(task: &mut Task, today: NaiveDate) -> ServiceResult<()> {
        if task.title.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "task title is required".to_string(),
            ));
        }

        if task.date.trim().is_empty() {
            task.date = format_date(today);
        }

        let date = parse_date_str(&task.date)
            .map_err(|_err| ServiceError::InvalidDate(task.date.clone()))?;

        let next = if task.is_repeating() {
            Some(next_date(today, &task.date, &task.repeat)?)
        } else {
            None
        };

        if date < today {
            task.date = next.unwrap_or_else(|| format_date(today));
        }

        Ok(())
    }

    /// ## Summary
    /// Normalizes and stores a new task.
    ///
    /// ## Errors
    /// Propagates normalization and store failures.
    #[tracing::instrument(skip(self, task), fields(title = %task.title))]
    pub async fn add(&self, mut task: Task, today: NaiveDate) -> ServiceResult<String> {
        Self::normalize(&mut task, today)?;
        let id = self.store.insert(task).await?;
        tracing::info!(id = %id, "Task added");
        Ok(id)
    }

    /// ## Summary
    /// Normalizes a task and replaces the stored one with the same id.
    ///
    /// ## Errors
    /// Propagates normalization failures, then `EmptyId` or `TaskNotFound`
    /// from the store.
    #[tracing::instrument(skip(self, task), fields(id = %task.id))]
    pub async fn update(&self, mut task: Task, today: NaiveDate) -> ServiceResult<()> {
        Self::normalize(&mut task, today)?;
        self.store.update(task).await
    }

    /// ## Errors
    /// Returns `EmptyId` or `TaskNotFound`.
    pub async fn get(&self, id: &str) -> ServiceResult<Task> {
        self.store.get(id).await
    }

    /// ## Summary
    /// Lists at most `limit` tasks matching a search box value.
    ///
    /// ## Errors
    /// Propagates store failures.
    pub async fn list(&self, search: &str, limit: usize) -> ServiceResult<Vec<Task>> {
        let filter = TaskFilter::from_search(search);
        tracing::trace!(?filter, limit, "Listing tasks");
        self.store.list(limit, &filter).await
    }

    /// ## Errors
    /// Returns `EmptyId` or `TaskNotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.store.delete(id).await
    }

    /// ## Summary
    /// Marks a task done: one-off tasks are deleted, repeating tasks move to
    /// their next date after `today`.
    ///
    /// ## Errors
    /// Returns `EmptyId` or `TaskNotFound` for a bad id and `RuleError` when
    /// the stored rule can't produce a next date.
    #[tracing::instrument(skip(self))]
    pub async fn complete(&self, id: &str, today: NaiveDate) -> ServiceResult<Completion> {
        let task = self.store.get(id).await?;

        if !task.is_repeating() {
            self.store.delete(id).await?;
            tracing::debug!("One-off task completed and removed");
            return Ok(Completion::Deleted);
        }

        let next = next_date(today, &task.date, &task.repeat)?;
        self.store.update_date(id, &next).await?;
        tracing::debug!(next = %next, "Repeating task rescheduled");
        Ok(Completion::Rescheduled(next))
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
