//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and `bb8`
//! connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and schema definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database errors are mapped to the port error
//!   enums.
//!
//! # Example
//!
//! ```no_run
//! use backend::outbound::persistence::{DbPool, DieselCarRepository, PoolConfig};
//!
//! # async fn example() {
//! let pool = DbPool::connect_lazy(&PoolConfig::new("postgres://localhost/autorent"));
//! let repo = DieselCarRepository::new(pool);
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_car_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_car_repository::DieselCarRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigratedPool, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
