//! Tasks, their storage seam, and the operations the HTTP layer exposes.

pub mod filter;
pub mod memory;
pub mod model;
pub mod service;
pub mod sqlite;
pub mod store;

pub use filter::TaskFilter;
pub use memory::InMemoryTaskStore;
pub use model::Task;
pub use service::{Completion, TaskService};
pub use sqlite::SqliteTaskStore;
pub use store::TaskStore;
