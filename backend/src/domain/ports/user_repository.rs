//! Port abstraction for credential persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{CredentialRecord, Email};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// An identity with the same email already exists.
        DuplicateEmail { email: String } => "user with email {email} already exists",
    }
}

/// Storage for registered identities keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the stored identity for `email`, if any.
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<CredentialRecord>, UserPersistenceError>;

    /// Insert a new identity.
    ///
    /// Adapters must reject a second record for the same email with
    /// [`UserPersistenceError::DuplicateEmail`].
    async fn insert(&self, record: &CredentialRecord) -> Result<(), UserPersistenceError>;
}
