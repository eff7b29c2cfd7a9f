//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `HOTEL_*` environment variables, an optional config
//! file and command-line flags, in increasing precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HTTP_BIND: &str = "0.0.0.0:8080";
const DEFAULT_GRPC_BIND: &str = "0.0.0.0:9090";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Settings controlling listeners, persistence and demo data.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOTEL")]
pub struct AppSettings {
    /// Address for the HTTP listener (REST, SOAP, GraphQL, probes).
    pub http_bind: Option<String>,
    /// Address for the gRPC listener.
    pub grpc_bind: Option<String>,
    /// PostgreSQL URL. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
    /// Seed sample clients and rooms into an empty store.
    pub seed_demo_data: Option<bool>,
}

/// Invalid listener address in the settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {setting} address '{value}'")]
pub struct AddressError {
    setting: &'static str,
    value: String,
}

fn parse_address(setting: &'static str, value: &str) -> Result<SocketAddr, AddressError> {
    value.parse().map_err(|_| AddressError {
        setting,
        value: value.to_owned(),
    })
}

impl AppSettings {
    /// HTTP listener address, falling back to `0.0.0.0:8080`.
    pub fn http_addr(&self) -> Result<SocketAddr, AddressError> {
        parse_address(
            "http_bind",
            self.http_bind.as_deref().unwrap_or(DEFAULT_HTTP_BIND),
        )
    }

    /// gRPC listener address, falling back to `0.0.0.0:9090`.
    pub fn grpc_addr(&self) -> Result<SocketAddr, AddressError> {
        parse_address(
            "grpc_bind",
            self.grpc_bind.as_deref().unwrap_or(DEFAULT_GRPC_BIND),
        )
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    pub fn pool_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_timeout_secs.unwrap_or(DEFAULT_POOL_TIMEOUT_SECS))
    }

    /// Whether demo data is seeded; on unless explicitly disabled.
    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data.unwrap_or(true)
    }
}
