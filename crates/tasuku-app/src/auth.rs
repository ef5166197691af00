//! Session tokens for the single shared password.
//!
//! A token is an HS256 JWT signed with `auth.secret_key`. Besides the usual
//! `exp`/`iat` claims it carries the SHA-512 of the password it was issued
//! for, so changing the password invalidates every outstanding token.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use tasuku_core::config::AuthConfig;

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    exp: u64,
    iat: u64,
    pass_hash: String,
}

/// Hex encoded SHA-512 of `password`.
#[must_use]
pub fn password_hash(password: &str) -> String {
    hex::encode(Sha512::digest(password.as_bytes()))
}

/// ## Summary
/// Signs a token valid for `auth.token_ttl_secs` from `issued_at` (seconds
/// since the epoch).
///
/// ## Errors
/// Returns `TokenError` if the token cannot be encoded.
pub fn issue_token(auth: &AuthConfig, issued_at: u64) -> AppResult<String> {
    let claims = Claims {
        exp: issued_at.saturating_add(auth.token_ttl_secs),
        iat: issued_at,
        pass_hash: password_hash(&auth.password),
    };

    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(auth.secret_key.as_bytes()),
    )?;
    Ok(token)
}

/// ## Summary
/// Checks the signature, expiry and password hash of a token.
///
/// ## Errors
/// Returns `Unauthorized` for a token that is malformed, expired, signed
/// with another key or issued for another password.
pub fn verify_token(auth: &AuthConfig, token: &str) -> AppResult<()> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.secret_key.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|err| {
        tracing::debug!(error = %err, "Token rejected");
        AppError::Unauthorized("invalid token".to_string())
    })?;

    if data.claims.pass_hash != password_hash(&auth.password) {
        tracing::debug!("Token issued for a different password");
        return Err(AppError::Unauthorized("invalid token".to_string()));
    }

    Ok(())
}
