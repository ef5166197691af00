use diesel::prelude::*;

use crate::db::schema::scheduler;

/// A row of the `scheduler` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = scheduler)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Column values of a task without its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}
