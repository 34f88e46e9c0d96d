//! Port abstraction for car inventory persistence.
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Car, CarId, CarPatch, CarStatus};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by car repository adapters.
    pub enum CarPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "car repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "car repository query failed: {message}",
    }
}

/// Storage for car records.
///
/// Listing order is newest-created first for every adapter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// List cars, optionally restricted to one status.
    async fn list(&self, status: Option<CarStatus>) -> Result<Vec<Car>, CarPersistenceError>;

    /// Fetch a car by identifier.
    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>, CarPersistenceError>;

    /// Persist a new car record.
    async fn insert(&self, car: &Car) -> Result<(), CarPersistenceError>;

    /// Merge `patch` into the stored record and stamp `updated_at`.
    ///
    /// Returns `None` when no record has the identifier.
    async fn update(
        &self,
        id: &CarId,
        patch: &CarPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Car>, CarPersistenceError>;

    /// Remove a record. Returns `false` when nothing was deleted.
    async fn delete(&self, id: &CarId) -> Result<bool, CarPersistenceError>;
}
