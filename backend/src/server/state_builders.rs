//! Builders wiring repositories into the domain services.

use std::sync::Arc;

use tracing::info;

use hotel_backend::domain::ports::{ChambreRepository, ClientRepository, ReservationRepository};
use hotel_backend::domain::{
    ChambreService, ClientService, DemoDataError, DemoDataOutcome, DemoDataSeeder,
    ReservationService,
};
use hotel_backend::inbound::http::state::HttpStatePorts;
use hotel_backend::outbound::memory::InMemoryHotelStore;
use hotel_backend::outbound::persistence::{
    DieselChambreRepository, DieselClientRepository, DieselReservationRepository,
};

use super::ServerConfig;

/// Seed demo data if requested, then build the driving ports over the given
/// repositories.
async fn wire_ports<C, H, R>(
    clients: Arc<C>,
    chambres: Arc<H>,
    reservations: Arc<R>,
    seed_demo_data: bool,
) -> Result<HttpStatePorts, DemoDataError>
where
    C: ClientRepository + 'static,
    H: ChambreRepository + 'static,
    R: ReservationRepository + 'static,
{
    if seed_demo_data {
        let outcome = DemoDataSeeder::new(clients.clone(), chambres.clone())
            .seed_if_empty()
            .await?;
        if let DemoDataOutcome::Applied { clients, chambres } = outcome {
            info!(clients, chambres, "demo data seeded");
        }
    }

    Ok(HttpStatePorts {
        reservations: Arc::new(ReservationService::new(
            clients.clone(),
            chambres.clone(),
            reservations,
        )),
        clients: Arc::new(ClientService::new(clients)),
        chambres: Arc::new(ChambreService::new(chambres)),
    })
}

/// Build the driving ports, preferring Diesel repositories when a pool is
/// configured and falling back to a process-local store otherwise.
pub(crate) async fn build_ports(config: &ServerConfig) -> Result<HttpStatePorts, DemoDataError> {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL persistence");
            wire_ports(
                Arc::new(DieselClientRepository::new(pool.clone())),
                Arc::new(DieselChambreRepository::new(pool.clone())),
                Arc::new(DieselReservationRepository::new(pool.clone())),
                config.seed_demo_data,
            )
            .await
        }
        None => {
            info!("no database configured; using in-memory store");
            let store = Arc::new(InMemoryHotelStore::new());
            wire_ports(store.clone(), store.clone(), store, config.seed_demo_data).await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use rstest::rstest;

    use super::*;

    fn memory_config(seed: bool) -> ServerConfig {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        ServerConfig::new(addr, addr).with_demo_data(seed)
    }

    #[rstest]
    #[tokio::test]
    async fn memory_store_is_seeded_when_enabled() {
        let ports = build_ports(&memory_config(true)).await.expect("ports");

        let clients = ports.clients.list_clients().await.expect("clients");
        let chambres = ports.chambres.list_chambres().await.expect("chambres");
        assert_eq!(clients.len(), 2);
        assert_eq!(chambres.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn memory_store_stays_empty_when_disabled() {
        let ports = build_ports(&memory_config(false)).await.expect("ports");

        assert!(ports.clients.list_clients().await.expect("clients").is_empty());
    }
}
