//! Hoops that make shared state available to handlers through the depot.

use std::sync::Arc;

use salvo::async_trait;
use tasuku_core::config::Settings;
use tasuku_core::error::CoreError;
use tasuku_service::task::TaskService;

use crate::error::AppResult;

pub struct SettingsHandler {
    pub settings: Arc<Settings>,
}

#[async_trait]
impl salvo::Handler for SettingsHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

pub struct TaskServiceHandler {
    pub service: TaskService,
}

#[async_trait]
impl salvo::Handler for TaskServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // TaskService clones share the same store
        depot.inject(self.service.clone());
    }
}

/// ## Summary
/// Retrieves the application settings from the depot.
///
/// ## Errors
/// Returns an error if `SettingsHandler` did not run for this request.
pub fn settings_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot
        .obtain::<Arc<Settings>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Settings not found in depot").into())
}

/// ## Summary
/// Retrieves the task service from the depot.
///
/// ## Errors
/// Returns an error if `TaskServiceHandler` did not run for this request.
pub fn tasks_from_depot(depot: &salvo::Depot) -> AppResult<TaskService> {
    depot
        .obtain::<TaskService>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Task service not found in depot").into())
}
