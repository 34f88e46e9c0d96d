//! Routes every store call to the durable backing or the in-memory fallback.
//!
//! The decision is taken per call from the live probe state. Data written to
//! one backing is never copied to the other.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::ports::{
    BackendState, CarPersistenceError, CarRepository, DurableStoreProbe, NoDurableStore,
    UserPersistenceError, UserRepository,
};
use crate::domain::{Car, CarId, CarPatch, CarStatus, CredentialRecord, Email};

/// One complete backing: identities plus cars.
#[derive(Clone)]
pub struct StorageBacking {
    users: Arc<dyn UserRepository>,
    cars: Arc<dyn CarRepository>,
}

impl StorageBacking {
    pub fn new(users: Arc<dyn UserRepository>, cars: Arc<dyn CarRepository>) -> Self {
        Self { users, cars }
    }
}

const MODE_UNKNOWN: u8 = u8::MAX;

/// Storage selector implementing both repository ports.
///
/// ## Invariants
/// - With no durable backing configured every call goes to the fallback.
/// - Errors raised by the active backing propagate unchanged.
pub struct StorageSelector {
    probe: Arc<dyn DurableStoreProbe>,
    durable: Option<StorageBacking>,
    fallback: StorageBacking,
    last_mode: AtomicU8,
}

impl StorageSelector {
    /// Build a selector over a durable backing guarded by `probe`.
    pub fn new(
        probe: Arc<dyn DurableStoreProbe>,
        durable: Option<StorageBacking>,
        fallback: StorageBacking,
    ) -> Self {
        Self {
            probe,
            durable,
            fallback,
            last_mode: AtomicU8::new(MODE_UNKNOWN),
        }
    }

    /// Selector that always serves from `fallback`.
    pub fn in_memory(fallback: StorageBacking) -> Self {
        Self::new(Arc::new(NoDurableStore), None, fallback)
    }

    /// Live state of the durable backing.
    pub fn backend_state(&self) -> BackendState {
        match self.durable {
            Some(_) => self.probe.state(),
            None => BackendState::Disconnected,
        }
    }

    /// True when the next call would be served by the durable backing.
    pub fn is_durable_store_available(&self) -> bool {
        self.backend_state().is_available()
    }

    fn active(&self) -> &StorageBacking {
        let durable = self
            .durable
            .as_ref()
            .filter(|_| self.probe.state().is_available());
        self.note_mode(durable.is_some());
        durable.unwrap_or(&self.fallback)
    }

    fn note_mode(&self, durable: bool) {
        let mode = u8::from(durable);
        let previous = self.last_mode.swap(mode, Ordering::Relaxed);
        if previous == mode {
            return;
        }
        if durable {
            info!("routing storage to the durable backend");
        } else if previous == MODE_UNKNOWN {
            info!("routing storage to in-memory fallback");
        } else {
            warn!("durable backend unavailable; routing storage to in-memory fallback");
        }
    }
}

impl DurableStoreProbe for StorageSelector {
    fn state(&self) -> BackendState {
        self.backend_state()
    }
}

#[async_trait]
impl UserRepository for StorageSelector {
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<CredentialRecord>, UserPersistenceError> {
        self.active().users.find_by_email(email).await
    }

    async fn insert(&self, record: &CredentialRecord) -> Result<(), UserPersistenceError> {
        self.active().users.insert(record).await
    }
}

#[async_trait]
impl CarRepository for StorageSelector {
    async fn list(&self, status: Option<CarStatus>) -> Result<Vec<Car>, CarPersistenceError> {
        self.active().cars.list(status).await
    }

    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>, CarPersistenceError> {
        self.active().cars.find_by_id(id).await
    }

    async fn insert(&self, car: &Car) -> Result<(), CarPersistenceError> {
        self.active().cars.insert(car).await
    }

    async fn update(
        &self,
        id: &CarId,
        patch: &CarPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Car>, CarPersistenceError> {
        self.active().cars.update(id, patch, updated_at).await
    }

    async fn delete(&self, id: &CarId) -> Result<bool, CarPersistenceError> {
        self.active().cars.delete(id).await
    }
}
