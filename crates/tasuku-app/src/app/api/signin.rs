//! Password sign-in issuing session tokens.

use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};
use serde::{Deserialize, Serialize};
use tasuku_core::error::CoreError;

use super::SIGNIN_ROUTE_COMPONENT;
use crate::auth::issue_token;
use crate::depot::settings_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Sign-in request payload
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub password: String,
}

/// ## Summary
/// Sign-in response payload
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: String,
}

/// ## Summary
/// POST /api/signin - Exchanges the configured password for a session token.
///
/// The client stores the token in the `token` cookie.
///
/// ## Errors
/// Returns HTTP 401 for a wrong password, HTTP 400 for a malformed body and
/// HTTP 500 when no password is configured.
#[handler]
async fn sign_in(req: &mut Request, depot: &mut Depot) -> AppResult<Json<SignInResponse>> {
    let settings = settings_from_depot(depot)?;
    let auth = &settings.auth;

    if !auth.is_enabled() {
        return Err(CoreError::InvalidConfiguration(
            "sign-in requires auth.password".to_string(),
        )
        .into());
    }

    let body = req
        .parse_json::<SignInRequest>()
        .await
        .map_err(|err| AppError::BadRequest(format!("JSON deserialization failed: {err}")))?;

    if body.password != auth.password {
        tracing::info!("Sign-in rejected");
        return Err(AppError::Unauthorized("incorrect password".to_string()));
    }

    let token = issue_token(auth, jsonwebtoken::get_current_timestamp())?;
    tracing::info!("Sign-in succeeded");
    Ok(Json(SignInResponse { token }))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(SIGNIN_ROUTE_COMPONENT).post(sign_in)
}

#[cfg(test)]
#[path = "signin_tests.rs"]
mod tests;
