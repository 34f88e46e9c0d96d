//! Inventory service: car CRUD over any car backing.
//!
//! The service owns system-managed fields (identifier and timestamps) so the
//! backing adapters only store what they are handed.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{CarPersistenceError, CarRepository, InventoryStore};
use crate::domain::{Car, CarId, CarPatch, CarStatus, Error, NewCar};

/// Message returned when a car identifier does not resolve.
pub const CAR_NOT_FOUND_MESSAGE: &str = "Car not found";

/// Inventory service implementing the [`InventoryStore`] driving port.
#[derive(Clone)]
pub struct InventoryService<C> {
    cars: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<C> InventoryService<C> {
    /// Create a new service with the given repository and clock.
    pub fn new(cars: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self { cars, clock }
    }
}

fn map_car_error(error: CarPersistenceError) -> Error {
    match error {
        CarPersistenceError::Connection { message } => {
            Error::internal(format!("car repository unavailable: {message}"))
        }
        CarPersistenceError::Query { message } => {
            Error::internal(format!("car repository error: {message}"))
        }
    }
}

fn not_found() -> Error {
    Error::not_found(CAR_NOT_FOUND_MESSAGE)
}

#[async_trait]
impl<C> InventoryStore for InventoryService<C>
where
    C: CarRepository,
{
    async fn list(&self) -> Result<Vec<Car>, Error> {
        self.cars.list(None).await.map_err(map_car_error)
    }

    async fn list_available(&self) -> Result<Vec<Car>, Error> {
        self.cars
            .list(Some(CarStatus::Available))
            .await
            .map_err(map_car_error)
    }

    async fn get(&self, id: &CarId) -> Result<Car, Error> {
        self.cars
            .find_by_id(id)
            .await
            .map_err(map_car_error)?
            .ok_or_else(not_found)
    }

    async fn create(&self, fields: NewCar) -> Result<Car, Error> {
        let car = Car::create(CarId::random(), fields, self.clock.utc());
        self.cars.insert(&car).await.map_err(map_car_error)?;
        info!(car_id = %car.id(), status = %car.status(), "created car");
        Ok(car)
    }

    async fn update(&self, id: &CarId, patch: &CarPatch) -> Result<Car, Error> {
        self.cars
            .update(id, patch, self.clock.utc())
            .await
            .map_err(map_car_error)?
            .ok_or_else(not_found)
    }

    async fn delete(&self, id: &CarId) -> Result<(), Error> {
        let removed = self.cars.delete(id).await.map_err(map_car_error)?;
        if !removed {
            return Err(not_found());
        }
        info!(car_id = %id, "deleted car");
        Ok(())
    }
}
