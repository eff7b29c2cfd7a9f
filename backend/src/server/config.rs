//! Server configuration object and helpers.

use std::net::SocketAddr;

use hotel_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP and gRPC listeners.
pub struct ServerConfig {
    pub(crate) http_addr: SocketAddr,
    pub(crate) grpc_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_demo_data: bool,
}

impl ServerConfig {
    /// Configuration backed by the in-memory store with demo data enabled.
    #[must_use]
    pub fn new(http_addr: SocketAddr, grpc_addr: SocketAddr) -> Self {
        Self {
            http_addr,
            grpc_addr,
            db_pool: None,
            seed_demo_data: true,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, the Diesel repositories replace the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_demo_data(mut self, enabled: bool) -> Self {
        self.seed_demo_data = enabled;
        self
    }
}
