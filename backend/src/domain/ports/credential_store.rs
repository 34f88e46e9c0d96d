//! Driving port for registration and login.
//!
//! Inbound adapters call this port without knowing which backing serves the
//! request, which keeps handler tests free of persistence wiring.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, User};

/// Domain use-case port for identity management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Register a new identity. Fails with a conflict when the email is taken.
    async fn create(&self, credentials: &Credentials) -> Result<User, Error>;

    /// Check credentials and return the matching identity.
    async fn verify(&self, credentials: &Credentials) -> Result<User, Error>;
}
