//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::domain::ports::NoDurableStore;
use crate::domain::{CredentialService, Credentials, InventoryService, StorageSelector};
use crate::outbound::memory::memory_backing;
use crate::outbound::security::{BcryptPasswordHasher, JwtTokenService};

use super::state::{HttpState, HttpStatePorts};

/// Signing secret shared by handler tests.
pub const TEST_SECRET: &str = "handler-test-secret";

/// Password used by [`registered_token`].
pub const TEST_PASSWORD: &str = "pw123456";

/// Build handler state over a fresh in-memory backing.
///
/// Uses the lowest bcrypt cost to keep the suite fast.
pub fn test_state() -> HttpState {
    test_state_with(|_| {})
}

/// Like [`test_state`], letting a test swap individual ports for mocks.
pub fn test_state_with(customise: impl FnOnce(&mut HttpStatePorts)) -> HttpState {
    let clock = Arc::new(DefaultClock);
    let storage = Arc::new(StorageSelector::in_memory(memory_backing()));
    let mut ports = HttpStatePorts {
        credentials: Arc::new(CredentialService::new(
            storage.clone(),
            Arc::new(BcryptPasswordHasher::with_cost(4)),
        )),
        inventory: Arc::new(InventoryService::new(storage, clock.clone())),
        tokens: Arc::new(JwtTokenService::new(TEST_SECRET, clock.clone())),
        storage: Arc::new(NoDurableStore),
    };
    customise(&mut ports);
    HttpState::new(ports, clock)
}

/// Register `email` directly through the state's ports and return a token.
pub async fn registered_token(state: &HttpState, email: &str) -> String {
    let credentials = Credentials::try_from_parts(email, TEST_PASSWORD).expect("credentials");
    let user = state
        .credentials
        .create(&credentials)
        .await
        .expect("registration succeeds");
    state.tokens.issue(&user).expect("token issued")
}
