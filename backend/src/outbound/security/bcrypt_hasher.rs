//! `PasswordHasher` backed by bcrypt.
//!
//! bcrypt is CPU-bound, so both hashing and verification run on Tokio's
//! blocking pool.

use async_trait::async_trait;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Work factor used for stored passwords.
pub const BCRYPT_COST: u32 = 10;

/// bcrypt adapter with a configurable cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: BCRYPT_COST }
    }
}

impl BcryptPasswordHasher {
    /// Hasher with an explicit cost. Low costs are only meant for tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

fn join_error(err: tokio::task::JoinError) -> PasswordHashError {
    PasswordHashError::hash(format!("hashing task failed: {err}"))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || {
            bcrypt::hash(password, cost).map_err(|err| PasswordHashError::hash(err.to_string()))
        })
        .await
        .map_err(join_error)?
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || {
            bcrypt::verify(password, &hash).map_err(|err| PasswordHashError::hash(err.to_string()))
        })
        .await
        .map_err(join_error)?
    }
}
