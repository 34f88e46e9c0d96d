//! Embedded schema migrations applied at startup.
//!
//! [`MigratedPool`] wraps the pool's connectivity probe so the durable
//! backing is only reported as connected once the schema is in place. A
//! database that appears after startup is migrated by a background task
//! before any request is routed to it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::ports::{BackendState, DurableStoreProbe, define_port_error};

use super::pool::DbPool;

/// Migrations from `backend/migrations`, compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

define_port_error! {
    /// Failures raised while applying schema migrations.
    pub enum MigrationError {
        /// A dedicated migration connection could not be opened.
        Connection { message: String } => "migration connection failed: {message}",
        /// A migration script failed.
        Apply { message: String } => "migration failed: {message}",
    }
}

fn run_blocking(database_url: &str) -> Result<usize, MigrationError> {
    let mut connection = PgConnection::establish(database_url)
        .map_err(|err| MigrationError::connection(err.to_string()))?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::apply(err.to_string()))?;
    Ok(applied.len())
}

/// Apply pending migrations on a blocking thread.
///
/// Returns the number of migrations applied.
pub async fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_blocking(&url))
        .await
        .map_err(|err| MigrationError::apply(format!("migration task panicked: {err}")))??;
    info!(applied, "database migrations up to date");
    Ok(applied)
}

/// Pool probe gated on a successful migration run.
#[derive(Clone)]
pub struct MigratedPool {
    pool: DbPool,
    database_url: Arc<str>,
    migrated: Arc<AtomicBool>,
}

impl MigratedPool {
    pub fn new(pool: DbPool, database_url: &str) -> Self {
        Self {
            pool,
            database_url: Arc::from(database_url),
            migrated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Underlying connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// True once every embedded migration has been applied.
    pub fn is_migrated(&self) -> bool {
        self.migrated.load(Ordering::Acquire)
    }

    /// Apply pending migrations once and open the gate on success.
    ///
    /// # Errors
    ///
    /// Returns the [`MigrationError`] raised by the migration run.
    pub async fn try_migrate(&self) -> Result<usize, MigrationError> {
        let applied = run_pending_migrations(&self.database_url).await?;
        self.migrated.store(true, Ordering::Release);
        Ok(applied)
    }

    /// Keep retrying until the database is reachable and migrated.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn migrate_in_background(&self, retry: Duration) -> JoinHandle<()> {
        let gate = self.clone();
        tokio::spawn(async move {
            while !gate.is_migrated() {
                match gate.pool.get().await {
                    Ok(connection) => {
                        drop(connection);
                        match gate.try_migrate().await {
                            Ok(applied) => {
                                info!(applied, "database reachable; durable storage enabled");
                                return;
                            }
                            Err(err) => warn!(error = %err, "deferred migration failed"),
                        }
                    }
                    Err(err) => debug!(error = %err, "database still unreachable"),
                }
                tokio::time::sleep(retry).await;
            }
        })
    }
}

impl DurableStoreProbe for MigratedPool {
    fn state(&self) -> BackendState {
        match self.pool.state() {
            BackendState::Connected if !self.is_migrated() => BackendState::Connecting,
            other => other,
        }
    }
}
