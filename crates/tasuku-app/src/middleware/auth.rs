use salvo::{Depot, Request, Writer};
use tasuku_core::config::AuthConfig;
use tasuku_core::constants::AUTH_TOKEN_COOKIE;

use crate::auth::verify_token;
use crate::depot::settings_from_depot;
use crate::error::{AppError, AppResult};

pub struct AuthMiddleware;

/// ## Summary
/// Guards task routes with the session token cookie issued by sign-in.
/// Requests pass through untouched while no password is configured.
///
/// ## Errors
/// Responds with HTTP 401 when the cookie is missing or its token is invalid.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let result = settings_from_depot(depot).and_then(|settings| authorize(req, &settings.auth));
        if let Err(err) = result {
            err.write(req, depot, res).await;
            ctrl.skip_rest();
        }
    }
}

fn authorize(req: &Request, auth: &AuthConfig) -> AppResult<()> {
    if !auth.is_enabled() {
        return Ok(());
    }

    let token = req
        .cookie(AUTH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_string()))?;

    verify_token(auth, &token)
}
