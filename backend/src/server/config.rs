//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use backend::inbound::http::frontend::FrontendAssets;
use backend::outbound::persistence::MigratedPool;
use zeroize::Zeroizing;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) jwt_secret: Zeroizing<String>,
    pub(crate) frontend: FrontendAssets,
    pub(crate) db_pool: Option<MigratedPool>,
}

impl ServerConfig {
    /// Construct a server configuration without a durable backend.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, jwt_secret: &str, frontend: FrontendAssets) -> Self {
        Self {
            bind_addr,
            jwt_secret: Zeroizing::new(jwt_secret.to_owned()),
            frontend,
            db_pool: None,
        }
    }

    /// Attach the database pool backing durable storage.
    ///
    /// Requests are only routed to it while the pool reports a live,
    /// migrated connection.
    #[must_use]
    pub fn with_db_pool(mut self, pool: MigratedPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
