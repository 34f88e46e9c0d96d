//! Bearer token guard for protected routes.
//!
//! `AuthenticatedUser` is an Actix extractor: adding it to a handler's
//! arguments rejects the request with 401 unless the `Authorization` header
//! carries a token the configured [`TokenService`] accepts.
//!
//! [`TokenService`]: crate::domain::ports::TokenService

use actix_web::dev::Payload;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::{Error, TokenClaims};

use super::state::HttpState;

/// Message for a missing or non-bearer `Authorization` header.
pub const MISSING_TOKEN_MESSAGE: &str = "Authorization header missing or invalid";
/// Message for a token that fails verification.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

const BEARER_PREFIX: &str = "Bearer ";

/// Claims of the caller, available to handlers behind the bearer guard.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(TokenClaims);

impl AuthenticatedUser {
    /// Verified token claims.
    pub fn claims(&self) -> &TokenClaims {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not configured"))?;
    let token = bearer_token(req.headers())?;
    let claims = state.tokens.verify(token).map_err(|err| {
        debug!(error = %err, "bearer token rejected");
        Error::unauthorized(INVALID_TOKEN_MESSAGE)
    })?;
    Ok(AuthenticatedUser(claims))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, Error> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::unauthorized(MISSING_TOKEN_MESSAGE))
}
