//! Backend entry-point: loads settings, prepares persistence and starts the
//! HTTP and gRPC listeners.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hotel_backend::inbound::http::health::HealthState;
use hotel_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use hotel_backend::settings::AppSettings;
use server::ServerConfig;

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

    let settings =
        AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let mut config = ServerConfig::new(settings.http_addr()?, settings.grpc_addr()?)
        .with_demo_data(settings.seed_demo_data());

    if let Some(url) = settings.database_url() {
        run_migrations(url)
            .await
            .wrap_err("failed to apply database migrations")?;
        let pool_config = PoolConfig::new(url)
            .with_max_size(settings.pool_max_size())
            .with_connection_timeout(settings.pool_timeout());
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        info!(max_size = settings.pool_max_size(), "database pool ready");
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    server::run(health_state, config).await
}
