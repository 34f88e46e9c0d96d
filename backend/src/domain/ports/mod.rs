//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod car_repository;
mod credential_store;
mod inventory_store;
mod password_hasher;
mod storage_probe;
mod token_service;
mod user_repository;

#[cfg(test)]
pub use car_repository::MockCarRepository;
pub use car_repository::{CarPersistenceError, CarRepository};
#[cfg(test)]
pub use credential_store::MockCredentialStore;
pub use credential_store::CredentialStore;
#[cfg(test)]
pub use inventory_store::MockInventoryStore;
pub use inventory_store::InventoryStore;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use storage_probe::MockDurableStoreProbe;
pub use storage_probe::{BackendState, DurableStoreProbe, NoDurableStore};
#[cfg(test)]
pub use token_service::MockTokenService;
pub use token_service::{TokenError, TokenService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};

#[cfg(test)]
mod tests;
