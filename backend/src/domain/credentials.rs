//! Credential store service: registration and login over any user backing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    CredentialStore, PasswordHashError, PasswordHasher, UserPersistenceError, UserRepository,
};
use crate::domain::{CredentialRecord, Credentials, Error, User, UserId};

/// Message returned when registering an email that is already taken.
pub const USER_EXISTS_MESSAGE: &str = "User already exists";
/// Message returned for any login mismatch.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid email or password";

/// Credential service implementing the [`CredentialStore`] driving port.
#[derive(Clone)]
pub struct CredentialService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> CredentialService<U, H> {
    /// Create a new service over a user repository and password hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::DuplicateEmail { .. } => Error::conflict(USER_EXISTS_MESSAGE),
        UserPersistenceError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

#[async_trait]
impl<U, H> CredentialStore for CredentialService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn create(&self, credentials: &Credentials) -> Result<User, Error> {
        let existing = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?;
        if existing.is_some() {
            return Err(Error::conflict(USER_EXISTS_MESSAGE));
        }

        let password_hash = self
            .hasher
            .hash(credentials.password())
            .await
            .map_err(map_hash_error)?;
        let user = User::new(UserId::random(), credentials.email().clone());
        let record = CredentialRecord::new(user.clone(), password_hash);
        // A concurrent registration can still win the race; adapters report it
        // as a duplicate and it surfaces as the same conflict.
        self.users.insert(&record).await.map_err(map_user_error)?;

        info!(user_id = %user.id(), "registered user");
        Ok(user)
    }

    async fn verify(&self, credentials: &Credentials) -> Result<User, Error> {
        let Some(record) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
        else {
            return Err(Error::invalid_credentials(INVALID_LOGIN_MESSAGE));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), record.password_hash())
            .await
            .map_err(map_hash_error)?;
        if !matches {
            return Err(Error::invalid_credentials(INVALID_LOGIN_MESSAGE));
        }
        Ok(record.into_user())
    }
}
