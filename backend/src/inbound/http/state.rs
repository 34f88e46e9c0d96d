//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{CredentialStore, DurableStoreProbe, InventoryStore, TokenService};

/// Parameter object bundling the port implementations used by handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub credentials: Arc<dyn CredentialStore>,
    pub inventory: Arc<dyn InventoryStore>,
    pub tokens: Arc<dyn TokenService>,
    pub storage: Arc<dyn DurableStoreProbe>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub credentials: Arc<dyn CredentialStore>,
    pub inventory: Arc<dyn InventoryStore>,
    pub tokens: Arc<dyn TokenService>,
    pub storage: Arc<dyn DurableStoreProbe>,
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Construct state from the ports bundle and the clock used for
    /// response timestamps.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::NoDurableStore;
    /// use backend::domain::{CredentialService, InventoryService, StorageSelector};
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use backend::outbound::memory::memory_backing;
    /// use backend::outbound::security::{BcryptPasswordHasher, JwtTokenService};
    /// use mockable::DefaultClock;
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let storage = Arc::new(StorageSelector::in_memory(memory_backing()));
    /// let state = HttpState::new(
    ///     HttpStatePorts {
    ///         credentials: Arc::new(CredentialService::new(
    ///             storage.clone(),
    ///             Arc::new(BcryptPasswordHasher::default()),
    ///         )),
    ///         inventory: Arc::new(InventoryService::new(storage.clone(), clock.clone())),
    ///         tokens: Arc::new(JwtTokenService::new("secret", clock.clone())),
    ///         storage: Arc::new(NoDurableStore),
    ///     },
    ///     clock,
    /// );
    /// let _tokens = state.tokens.clone();
    /// ```
    pub fn new(ports: HttpStatePorts, clock: Arc<dyn Clock>) -> Self {
        let HttpStatePorts {
            credentials,
            inventory,
            tokens,
            storage,
        } = ports;
        Self {
            credentials,
            inventory,
            tokens,
            storage,
            clock,
        }
    }
}
