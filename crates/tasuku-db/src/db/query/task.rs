//! Queries on the `scheduler` table.
//!
//! Listings are ordered by date, then id, and capped at `limit` rows.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::SqliteAsync;
use crate::db::schema::scheduler;
use crate::error::DbResult;
use crate::model::task::{TaskFields, TaskRow};

fn ordered(limit: i64) -> scheduler::BoxedQuery<'static, diesel::sqlite::Sqlite> {
    scheduler::table
        .order((scheduler::date.asc(), scheduler::id.asc()))
        .limit(limit)
        .into_boxed()
}

/// ## Errors
/// Returns an error if the query fails.
pub async fn list_all(conn: &mut SqliteAsync, limit: i64) -> DbResult<Vec<TaskRow>> {
    Ok(ordered(limit)
        .select(TaskRow::as_select())
        .load(conn)
        .await?)
}

/// ## Summary
/// Tasks scheduled on exactly `date` (`YYYYMMDD`).
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn list_by_date(conn: &mut SqliteAsync, date: &str, limit: i64) -> DbResult<Vec<TaskRow>> {
    Ok(ordered(limit)
        .filter(scheduler::date.eq(date.to_owned()))
        .select(TaskRow::as_select())
        .load(conn)
        .await?)
}

/// ## Summary
/// Tasks whose title or comment contains `text`. SQLite `LIKE` ignores
/// ASCII case.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn list_by_text(conn: &mut SqliteAsync, text: &str, limit: i64) -> DbResult<Vec<TaskRow>> {
    let pattern = format!("%{text}%");
    Ok(ordered(limit)
        .filter(
            scheduler::title
                .like(pattern.clone())
                .or(scheduler::comment.like(pattern)),
        )
        .select(TaskRow::as_select())
        .load(conn)
        .await?)
}

/// ## Errors
/// Returns an error if the query fails.
pub async fn find(conn: &mut SqliteAsync, id: i64) -> DbResult<Option<TaskRow>> {
    Ok(scheduler::table
        .find(id)
        .select(TaskRow::as_select())
        .first(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Inserts a task and returns its new id.
///
/// ## Errors
/// Returns an error if the insert fails.
pub async fn insert(conn: &mut SqliteAsync, fields: TaskFields) -> DbResult<i64> {
    Ok(diesel::insert_into(scheduler::table)
        .values((
            scheduler::date.eq(fields.date),
            scheduler::title.eq(fields.title),
            scheduler::comment.eq(fields.comment),
            scheduler::repeat.eq(fields.repeat),
        ))
        .returning(scheduler::id)
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Overwrites every column of task `id`. Returns the number of rows changed.
///
/// ## Errors
/// Returns an error if the update fails.
pub async fn update(conn: &mut SqliteAsync, id: i64, fields: TaskFields) -> DbResult<usize> {
    Ok(diesel::update(scheduler::table.find(id))
        .set((
            scheduler::date.eq(fields.date),
            scheduler::title.eq(fields.title),
            scheduler::comment.eq(fields.comment),
            scheduler::repeat.eq(fields.repeat),
        ))
        .execute(conn)
        .await?)
}

/// ## Summary
/// Moves task `id` to `date`. Returns the number of rows changed.
///
/// ## Errors
/// Returns an error if the update fails.
pub async fn update_date(conn: &mut SqliteAsync, id: i64, date: &str) -> DbResult<usize> {
    Ok(diesel::update(scheduler::table.find(id))
        .set(scheduler::date.eq(date.to_owned()))
        .execute(conn)
        .await?)
}

/// ## Summary
/// Deletes task `id`. Returns the number of rows removed.
///
/// ## Errors
/// Returns an error if the delete fails.
pub async fn delete(conn: &mut SqliteAsync, id: i64) -> DbResult<usize> {
    Ok(diesel::delete(scheduler::table.find(id))
        .execute(conn)
        .await?)
}
