//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `AUTORENT_*` environment variables and
//! configuration files, in that order of precedence. The signing secret and
//! the database URL have no defaults; loading fails when either is absent.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_FRONTEND_DIR: &str = "Frontend";

/// Runtime settings for the AutoRent service.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AUTORENT")]
pub struct AppSettings {
    /// Secret used to sign and verify bearer tokens.
    pub jwt_secret: String,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Listening port.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Listening address; all interfaces when unset.
    pub host: Option<IpAddr>,
    /// Seconds to wait for the first database connection at startup.
    #[ortho_config(default = 10)]
    pub db_connect_timeout_secs: u64,
    /// Maximum pooled database connections.
    #[ortho_config(default = 10)]
    pub db_pool_max_size: u32,
    /// Directory holding the built frontend.
    pub frontend_dir: Option<PathBuf>,
}

impl AppSettings {
    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Startup window for the first database connection.
    pub fn db_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout_secs)
    }

    /// Frontend directory, falling back to `Frontend` under the working
    /// directory.
    pub fn frontend_dir(&self) -> PathBuf {
        self.frontend_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR))
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("port", &self.port)
            .field("host", &self.host)
            .field("db_connect_timeout_secs", &self.db_connect_timeout_secs)
            .field("db_pool_max_size", &self.db_pool_max_size)
            .field("frontend_dir", &self.frontend_dir)
            .finish()
    }
}
