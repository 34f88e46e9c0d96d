//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed entities used by the API and persistence
//! layers, and the services that implement the driving ports. Types document
//! their invariants and serialisation contracts in Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifier.
//! - User, Email, Credentials, TokenClaims: identity and authentication.
//! - Car, NewCar, CarPatch: inventory records and validated inputs.
//! - CredentialService, InventoryService: driving port implementations.
//! - StorageSelector: durable-or-memory routing for both repositories.

pub mod auth;
pub mod car;
pub mod credentials;
pub mod error;
pub mod inventory;
pub mod ports;
pub mod storage_selector;
pub mod user;

pub use self::auth::{
    Credentials, CredentialsValidationError, TOKEN_LIFETIME_DAYS, TokenClaims, token_lifetime,
};
pub use self::car::{
    Car, CarDraft, CarId, CarParts, CarPatch, CarStatus, CarValidationError, MAX_CAR_TEXT_LEN,
    NewCar,
};
pub use self::credentials::{CredentialService, INVALID_LOGIN_MESSAGE, USER_EXISTS_MESSAGE};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::inventory::{CAR_NOT_FOUND_MESSAGE, InventoryService};
pub use self::storage_selector::{StorageBacking, StorageSelector};
pub use self::user::{CredentialRecord, Email, User, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Car not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
