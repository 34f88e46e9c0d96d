//! In-memory `UserRepository`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{CredentialRecord, Email};

/// Identities keyed by email.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    records: RwLock<HashMap<String, CredentialRecord>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<CredentialRecord>, UserPersistenceError> {
        Ok(self.records.read().await.get(email.as_ref()).cloned())
    }

    async fn insert(&self, record: &CredentialRecord) -> Result<(), UserPersistenceError> {
        let email = record.user().email().as_ref();
        let mut records = self.records.write().await;
        if records.contains_key(email) {
            return Err(UserPersistenceError::duplicate_email(email));
        }
        records.insert(email.to_owned(), record.clone());
        Ok(())
    }
}
