//! Backend entry-point: loads settings, probes PostgreSQL and serves the API.

mod server;

use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::frontend::FrontendAssets;
use backend::outbound::persistence::{DbPool, MigratedPool, PoolConfig};
use backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Pause between background attempts to reach a database that was down at
/// startup.
const RECONNECT_INTERVAL: Duration = Duration::from_secs(15);

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("failed to load AutoRent settings")?;
    let database = connect_database(&settings).await;

    let config = ServerConfig::new(
        settings.bind_addr(),
        &settings.jwt_secret,
        FrontendAssets::new(settings.frontend_dir()),
    )
    .with_db_pool(database);

    create_server(config)
        .wrap_err("failed to start HTTP server")?
        .await
        .wrap_err("HTTP server terminated with an error")
}

/// Build the pool and try to bring the schema up before serving.
///
/// Never fails: an unreachable database leaves the service on in-memory
/// storage while a background task keeps trying.
async fn connect_database(settings: &AppSettings) -> MigratedPool {
    let pool_config = PoolConfig::new(settings.database_url.as_str())
        .with_max_size(settings.db_pool_max_size)
        .with_connection_timeout(settings.db_connect_timeout());
    let pool = DbPool::connect_lazy(&pool_config);
    let gate = MigratedPool::new(pool.clone(), &settings.database_url);

    match pool.wait_until_connected(settings.db_connect_timeout()).await {
        Ok(()) => match gate.try_migrate().await {
            Ok(applied) => info!(applied, "connected to PostgreSQL"),
            Err(err) => error!(error = %err, "schema migration failed; using in-memory storage"),
        },
        Err(err) => warn!(error = %err, "PostgreSQL unreachable; using in-memory storage"),
    }

    if !gate.is_migrated() {
        gate.migrate_in_background(RECONNECT_INTERVAL);
    }
    gate
}
