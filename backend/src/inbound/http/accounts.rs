//! Registration and login handlers.
//!
//! ```text
//! POST /api/auth/register {"email":"a@b.com","password":"pw123456"}
//! POST /api/auth/login    {"email":"a@b.com","password":"pw123456"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{ApiResult, Credentials, CredentialsValidationError, Error, User};

use super::state::HttpState;

/// Message returned after a successful registration.
pub const REGISTERED_MESSAGE: &str = "User created successfully";
/// Message returned after a successful login.
pub const LOGGED_IN_MESSAGE: &str = "Login successful";

/// Request body shared by register and login.
///
/// Absent fields deserialise as empty strings so they fail validation with
/// the same message as blank ones.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl TryFrom<CredentialsRequest> for Credentials {
    type Error = CredentialsValidationError;

    fn try_from(value: CredentialsRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

/// Successful authentication response.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

fn map_credentials_validation_error(err: CredentialsValidationError) -> Error {
    let field = match &err {
        CredentialsValidationError::MissingPassword => "password",
        CredentialsValidationError::MissingEmail | CredentialsValidationError::InvalidEmail(_) => {
            "email"
        }
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

fn signed_response(state: &HttpState, user: User, message: &str) -> ApiResult<AuthResponse> {
    let token = state
        .tokens
        .issue(&user)
        .map_err(|err| Error::internal(format!("failed to issue token: {err}")))?;
    Ok(AuthResponse {
        message: message.to_owned(),
        token,
        user,
    })
}

/// Register a new identity and return a bearer token for it.
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        Credentials::try_from(payload.into_inner()).map_err(map_credentials_validation_error)?;
    let user = state.credentials.create(&credentials).await?;
    let body = signed_response(&state, user, REGISTERED_MESSAGE)?;
    Ok(HttpResponse::Created().json(body))
}

/// Check credentials and return a fresh bearer token.
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        Credentials::try_from(payload.into_inner()).map_err(map_credentials_validation_error)?;
    let user = state.credentials.verify(&credentials).await?;
    let body = signed_response(&state, user, LOGGED_IN_MESSAGE)?;
    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
mod tests;
