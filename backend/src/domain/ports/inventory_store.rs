//! Driving port for car inventory use-cases.

use async_trait::async_trait;

use crate::domain::{Car, CarId, CarPatch, Error, NewCar};

/// Domain use-case port for the car inventory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// All cars, newest first.
    async fn list(&self) -> Result<Vec<Car>, Error>;

    /// Cars whose status is `Available`, newest first.
    async fn list_available(&self) -> Result<Vec<Car>, Error>;

    /// Fetch one car or fail with not found.
    async fn get(&self, id: &CarId) -> Result<Car, Error>;

    /// Store a new car and return the stored record.
    async fn create(&self, fields: NewCar) -> Result<Car, Error>;

    /// Merge a partial update and return the merged record.
    async fn update(&self, id: &CarId, patch: &CarPatch) -> Result<Car, Error>;

    /// Remove a car or fail with not found.
    async fn delete(&self, id: &CarId) -> Result<(), Error>;
}
