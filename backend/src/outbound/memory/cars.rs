//! In-memory `CarRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::ports::{CarPersistenceError, CarRepository};
use crate::domain::{Car, CarId, CarPatch, CarStatus};

/// Cars in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCarRepository {
    cars: RwLock<Vec<Car>>,
}

/// Newest-created first; ties keep the later insertion first.
fn newest_first<'a>(cars: impl DoubleEndedIterator<Item = &'a Car>) -> Vec<Car> {
    let mut listed: Vec<Car> = cars.rev().cloned().collect();
    listed.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    listed
}

#[async_trait]
impl CarRepository for MemoryCarRepository {
    async fn list(&self, status: Option<CarStatus>) -> Result<Vec<Car>, CarPersistenceError> {
        let cars = self.cars.read().await;
        let matching = cars
            .iter()
            .filter(|car| status.is_none_or(|wanted| car.status() == wanted));
        Ok(newest_first(matching))
    }

    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>, CarPersistenceError> {
        let cars = self.cars.read().await;
        Ok(cars.iter().find(|car| car.id() == id).cloned())
    }

    async fn insert(&self, car: &Car) -> Result<(), CarPersistenceError> {
        self.cars.write().await.push(car.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &CarId,
        patch: &CarPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Car>, CarPersistenceError> {
        let mut cars = self.cars.write().await;
        let Some(car) = cars.iter_mut().find(|car| car.id() == id) else {
            return Ok(None);
        };
        car.apply(patch, updated_at);
        Ok(Some(car.clone()))
    }

    async fn delete(&self, id: &CarId) -> Result<bool, CarPersistenceError> {
        let mut cars = self.cars.write().await;
        let before = cars.len();
        cars.retain(|car| car.id() != id);
        Ok(cars.len() < before)
    }
}
