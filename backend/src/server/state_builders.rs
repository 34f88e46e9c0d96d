//! Builders for storage routing and HTTP handler state.

use std::sync::Arc;

use mockable::Clock;

use backend::domain::{CredentialService, InventoryService, StorageBacking, StorageSelector};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::memory::memory_backing;
use backend::outbound::persistence::{DieselCarRepository, DieselUserRepository};
use backend::outbound::security::{BcryptPasswordHasher, JwtTokenService};

use super::ServerConfig;

/// Route storage to PostgreSQL when a pool is configured, with an in-memory
/// fallback either way.
pub fn build_storage(config: &ServerConfig) -> Arc<StorageSelector> {
    let fallback = memory_backing();
    let selector = match &config.db_pool {
        Some(gate) => {
            let durable = StorageBacking::new(
                Arc::new(DieselUserRepository::new(gate.pool().clone())),
                Arc::new(DieselCarRepository::new(gate.pool().clone())),
            );
            StorageSelector::new(Arc::new(gate.clone()), Some(durable), fallback)
        }
        None => StorageSelector::in_memory(fallback),
    };
    Arc::new(selector)
}

/// Assemble handler state over `storage`.
pub fn build_http_state(
    config: &ServerConfig,
    storage: Arc<StorageSelector>,
    clock: Arc<dyn Clock>,
) -> HttpState {
    HttpState::new(
        HttpStatePorts {
            credentials: Arc::new(CredentialService::new(
                storage.clone(),
                Arc::new(BcryptPasswordHasher::default()),
            )),
            inventory: Arc::new(InventoryService::new(storage.clone(), clock.clone())),
            tokens: Arc::new(JwtTokenService::new(&config.jwt_secret, clock.clone())),
            storage,
        },
        clock,
    )
}
