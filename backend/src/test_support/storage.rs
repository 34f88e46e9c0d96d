//! Storage doubles: a probe flipped by hand and ready-made handler state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use mockable::Clock;

use crate::domain::ports::{BackendState, DurableStoreProbe};
use crate::domain::{CredentialService, InventoryService, StorageBacking, StorageSelector};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::memory_backing;
use crate::outbound::security::{BcryptPasswordHasher, JwtTokenService};

/// Probe whose reported state is set by the test.
#[derive(Debug)]
pub struct SwitchableProbe(AtomicU8);

impl SwitchableProbe {
    pub fn new(state: BackendState) -> Self {
        Self(AtomicU8::new(state.code()))
    }

    pub fn set(&self, state: BackendState) {
        self.0.store(state.code(), Ordering::SeqCst);
    }
}

impl DurableStoreProbe for SwitchableProbe {
    fn state(&self) -> BackendState {
        match self.0.load(Ordering::SeqCst) {
            1 => BackendState::Connected,
            2 => BackendState::Connecting,
            _ => BackendState::Disconnected,
        }
    }
}

/// Selector over two in-memory backings, the first standing in for the
/// durable one. The probe decides which is active.
pub fn switchable_storage(probe: Arc<SwitchableProbe>) -> Arc<StorageSelector> {
    let durable: StorageBacking = memory_backing();
    Arc::new(StorageSelector::new(probe, Some(durable), memory_backing()))
}

/// Handler state over `storage`, signing tokens with `secret`.
///
/// Passwords are hashed at the minimum bcrypt cost.
pub fn memory_http_state(
    storage: Arc<StorageSelector>,
    secret: &str,
    clock: Arc<dyn Clock>,
) -> HttpState {
    HttpState::new(
        HttpStatePorts {
            credentials: Arc::new(CredentialService::new(
                storage.clone(),
                Arc::new(BcryptPasswordHasher::with_cost(4)),
            )),
            inventory: Arc::new(InventoryService::new(storage.clone(), clock.clone())),
            tokens: Arc::new(JwtTokenService::new(secret, clock.clone())),
            storage,
        },
        clock,
    )
}
