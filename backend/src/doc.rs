//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] covers the REST facade and the health probes. SOAP, GraphQL
//! and gRPC describe themselves through their own envelopes, schema and
//! proto file.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::chambres::{ChambreRequest, ChambreResponse};
use crate::inbound::http::clients::{ClientRequest, ClientResponse};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::health::ProbeBody;
use crate::inbound::http::reservations::{
    EntityReference, ReservationRequest, ReservationResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel reservation API",
        description = "REST interface for clients, rooms and reservations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::clients::create_client,
        crate::inbound::http::clients::list_clients,
        crate::inbound::http::clients::get_client,
        crate::inbound::http::clients::delete_client,
        crate::inbound::http::chambres::create_chambre,
        crate::inbound::http::chambres::list_chambres,
        crate::inbound::http::chambres::get_chambre,
        crate::inbound::http::chambres::delete_chambre,
        crate::inbound::http::reservations::create_reservation,
        crate::inbound::http::reservations::list_reservations,
        crate::inbound::http::reservations::get_reservation,
        crate::inbound::http::reservations::update_reservation,
        crate::inbound::http::reservations::delete_reservation,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ClientRequest,
        ClientResponse,
        ChambreRequest,
        ChambreResponse,
        EntityReference,
        ReservationRequest,
        ReservationResponse,
        ErrorBody,
        ProbeBody
    )),
    tags(
        (name = "clients", description = "Hotel guests"),
        (name = "chambres", description = "Hotel rooms"),
        (name = "reservations", description = "Room bookings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
