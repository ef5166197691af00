use futures::future::BoxFuture;
use tasuku_db::db::connection::DbPool;
use tasuku_db::db::query::task as query;
use tasuku_db::error::DbError;
use tasuku_db::model::task::{TaskFields, TaskRow};

use super::filter::TaskFilter;
use super::model::Task;
use super::store::{TaskStore, parse_id};
use crate::error::{ServiceError, ServiceResult};

/// [`TaskStore`] backed by the SQLite `scheduler` table.
#[derive(Clone)]
pub struct SqliteTaskStore {
    pool: DbPool,
}

impl SqliteTaskStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id.to_string(),
            date: row.date,
            title: row.title,
            comment: row.comment,
            repeat: row.repeat,
        }
    }
}

fn fields(task: Task) -> TaskFields {
    TaskFields {
        date: task.date,
        title: task.title,
        comment: task.comment,
        repeat: task.repeat,
    }
}

/// Maps an affected-row count to `TaskNotFound` when nothing matched.
fn expect_one(count: usize, id: &str) -> ServiceResult<()> {
    if count == 1 {
        Ok(())
    } else {
        Err(ServiceError::TaskNotFound(id.to_string()))
    }
}

impl TaskStore for SqliteTaskStore {
    fn list<'a>(
        &'a self,
        limit: usize,
        filter: &'a TaskFilter,
    ) -> BoxFuture<'a, ServiceResult<Vec<Task>>> {
        Box::pin(async move {
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);
            let mut conn = self.pool.get().await.map_err(DbError::from)?;

            let rows = match filter {
                TaskFilter::All => query::list_all(&mut conn, limit).await?,
                TaskFilter::Date(date) => query::list_by_date(&mut conn, date, limit).await?,
                TaskFilter::Text(text) => query::list_by_text(&mut conn, text, limit).await?,
            };
            Ok(rows.into_iter().map(Task::from).collect())
        })
    }

    fn get<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ServiceResult<Task>> {
        Box::pin(async move {
            let key: i64 = parse_id(id)?;
            let mut conn = self.pool.get().await.map_err(DbError::from)?;

            query::find(&mut conn, key)
                .await?
                .map(Task::from)
                .ok_or_else(|| ServiceError::TaskNotFound(id.to_string()))
        })
    }

    fn insert(&self, task: Task) -> BoxFuture<'_, ServiceResult<String>> {
        Box::pin(async move {
            let mut conn = self.pool.get().await.map_err(DbError::from)?;
            let id = query::insert(&mut conn, fields(task)).await?;

            tracing::debug!(id, "Task inserted");
            Ok(id.to_string())
        })
    }

    fn update(&self, task: Task) -> BoxFuture<'_, ServiceResult<()>> {
        Box::pin(async move {
            let key: i64 = parse_id(&task.id)?;
            let id = task.id.clone();
            let mut conn = self.pool.get().await.map_err(DbError::from)?;

            let count = query::update(&mut conn, key, fields(task)).await?;
            expect_one(count, &id)
        })
    }

    fn update_date<'a>(&'a self, id: &'a str, date: &'a str) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let key: i64 = parse_id(id)?;
            let mut conn = self.pool.get().await.map_err(DbError::from)?;

            let count = query::update_date(&mut conn, key, date).await?;
            expect_one(count, id)
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let key: i64 = parse_id(id)?;
            let mut conn = self.pool.get().await.map_err(DbError::from)?;

            let count = query::delete(&mut conn, key).await?;
            expect_one(count, id)
        })
    }
}

#[cfg(test)]
#[path = "sqlite_tests.rs"]
mod tests;
