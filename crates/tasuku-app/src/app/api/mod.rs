mod health;
mod nextdate;
mod signin;
mod task;

#[cfg(test)]
mod test_support;

use salvo::Router;

pub use tasuku_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, NEXTDATE_ROUTE_COMPONENT, SIGNIN_ROUTE_COMPONENT,
    TASK_ROUTE_COMPONENT, TASK_ROUTE_PREFIX, TASKS_ROUTE_COMPONENT,
};

use crate::middleware::auth::AuthMiddleware;

/// ## Summary
/// Constructs the API router. Task routes sit behind [`AuthMiddleware`];
/// health, sign-in and the rule calculator stay open.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(health::routes())
        .push(signin::routes())
        .push(nextdate::routes())
        .push(task::routes().hoop(AuthMiddleware))
}
