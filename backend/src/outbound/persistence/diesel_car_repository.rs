//! PostgreSQL-backed `CarRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CarPersistenceError, CarRepository};
use crate::domain::{Car, CarId, CarParts, CarPatch, CarStatus};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CarChangeset, CarRow, NewCarRow};
use super::pool::{DbPool, PoolError};
use super::schema::cars;

/// Diesel-backed implementation of the `CarRepository` port.
#[derive(Clone)]
pub struct DieselCarRepository {
    pool: DbPool,
}

impl DieselCarRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CarPersistenceError {
    map_basic_pool_error(error, CarPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CarPersistenceError {
    map_basic_diesel_error(
        error,
        CarPersistenceError::query,
        CarPersistenceError::connection,
    )
}

fn row_to_car(row: CarRow) -> Result<Car, CarPersistenceError> {
    let status: CarStatus = row
        .status
        .parse()
        .map_err(|err| CarPersistenceError::query(format!("stored car invalid: {err}")))?;
    Ok(Car::from_parts(CarParts {
        id: CarId::from_uuid(row.id),
        model: row.model,
        car_type: row.car_type,
        year: row.year,
        daily_rate: row.daily_rate,
        status,
        description: row.description,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

fn rows_to_cars(rows: Vec<CarRow>) -> Result<Vec<Car>, CarPersistenceError> {
    rows.into_iter().map(row_to_car).collect()
}

fn changeset(patch: &CarPatch, updated_at: DateTime<Utc>) -> CarChangeset<'_> {
    CarChangeset {
        model: patch.model(),
        car_type: patch.car_type(),
        year: patch.year(),
        daily_rate: patch.daily_rate(),
        status: patch.status().map(CarStatus::as_str),
        description: patch.description(),
        updated_at,
    }
}

#[async_trait]
impl CarRepository for DieselCarRepository {
    async fn list(&self, status: Option<CarStatus>) -> Result<Vec<Car>, CarPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = cars::table
            .select(CarRow::as_select())
            .order(cars::created_at.desc())
            .into_boxed();
        if let Some(status) = status {
            query = query.filter(cars::status.eq(status.as_str()));
        }

        let rows: Vec<CarRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows_to_cars(rows)
    }

    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>, CarPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CarRow> = cars::table
            .find(*id.as_uuid())
            .select(CarRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_car).transpose()
    }

    async fn insert(&self, car: &Car) -> Result<(), CarPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewCarRow {
            id: *car.id().as_uuid(),
            model: car.model(),
            car_type: car.car_type(),
            year: car.year(),
            daily_rate: car.daily_rate(),
            status: car.status().as_str(),
            description: car.description(),
            created_at: car.created_at(),
            updated_at: car.updated_at(),
        };

        diesel::insert_into(cars::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        id: &CarId,
        patch: &CarPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Car>, CarPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CarRow> = diesel::update(cars::table.find(*id.as_uuid()))
            .set(&changeset(patch, updated_at))
            .returning(CarRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_car).transpose()
    }

    async fn delete(&self, id: &CarId) -> Result<bool, CarPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(cars::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
