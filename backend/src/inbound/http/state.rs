//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O. The SOAP adapter reads
//! the same state.

use std::sync::Arc;

use crate::domain::ports::{ChambreRegistry, ClientRegistry, ReservationOrchestrator};

/// Parameter object bundling the driving ports used by HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub reservations: Arc<dyn ReservationOrchestrator>,
    pub clients: Arc<dyn ClientRegistry>,
    pub chambres: Arc<dyn ChambreRegistry>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub reservations: Arc<dyn ReservationOrchestrator>,
    pub clients: Arc<dyn ClientRegistry>,
    pub chambres: Arc<dyn ChambreRegistry>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hotel_backend::domain::{ChambreService, ClientService, ReservationService};
    /// use hotel_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use hotel_backend::outbound::memory::InMemoryHotelStore;
    ///
    /// let store = Arc::new(InMemoryHotelStore::new());
    /// let state = HttpState::new(HttpStatePorts {
    ///     reservations: Arc::new(ReservationService::new(
    ///         store.clone(),
    ///         store.clone(),
    ///         store.clone(),
    ///     )),
    ///     clients: Arc::new(ClientService::new(store.clone())),
    ///     chambres: Arc::new(ChambreService::new(store)),
    /// });
    /// let _reservations = state.reservations.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            reservations,
            clients,
            chambres,
        } = ports;
        Self {
            reservations,
            clients,
            chambres,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
