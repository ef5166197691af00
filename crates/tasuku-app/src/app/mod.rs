pub mod api;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use salvo::Router;
use salvo::logging::Logger;
use salvo::size_limiter::max_size;
use tasuku_core::config::Settings;
use tasuku_rule::rule::date::midnight;
use tasuku_service::task::{TaskService, TaskStore};

use crate::depot::{SettingsHandler, TaskServiceHandler};

/// ## Summary
/// Builds the root router, placing the logging, depot and body size hoops
/// in front of the API routes.
#[must_use]
pub fn router(settings: Settings, store: Arc<dyn TaskStore>) -> Router {
    let max_upload_size = settings.limits.max_upload_size;

    Router::new()
        .hoop(Logger::new())
        .hoop(SettingsHandler {
            settings: Arc::new(settings),
        })
        .hoop(TaskServiceHandler {
            service: TaskService::new(store),
        })
        .hoop(max_size(max_upload_size))
        .push(api::routes())
}

/// Current UTC calendar day, the reference for every scheduling decision.
#[must_use]
pub fn today() -> NaiveDate {
    midnight(&Utc::now())
}
