//! SQLite persistence for tasks.

pub mod db;
pub mod error;
pub mod model;
