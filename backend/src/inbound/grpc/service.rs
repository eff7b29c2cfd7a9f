//! `hotel.reservation.ReservationService` implementation.
//!
//! Every call runs inside a trace scope. A valid `trace-id` request metadata
//! entry is reused, otherwise a fresh id is generated; the id is echoed in
//! the response metadata.

use std::future::Future;
use std::sync::Arc;

use tonic::metadata::{Ascii, MetadataMap, MetadataValue};
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use crate::domain::ports::ReservationOrchestrator;
use crate::domain::{EntityKind, Error, Reservation, ReservationId, TRACE_ID_HEADER, TraceId};
use crate::inbound::date_codec::format_date;
use crate::inbound::validation::ReservationFields;

use super::proto::reservation_service_server::ReservationService;
use super::proto::{
    CreateReservationRequest, DeleteReservationRequest, DeleteReservationResponse,
    GetReservationRequest, ReservationResponse, UpdateReservationRequest,
};
use super::status::to_status;

/// gRPC adapter driving a [`ReservationOrchestrator`].
#[derive(Clone)]
pub struct ReservationGrpcService {
    orchestrator: Arc<dyn ReservationOrchestrator>,
}

impl ReservationGrpcService {
    pub fn new(orchestrator: Arc<dyn ReservationOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

impl From<&Reservation> for ReservationResponse {
    fn from(value: &Reservation) -> Self {
        Self {
            id: value.id().get(),
            date_debut: format_date(value.start_date()),
            date_fin: format_date(value.end_date()),
            preferences: value.preferences().as_str().to_owned(),
            client_id: value.client().map(|client| client.id().get()),
            chambre_id: value.chambre().map(|chambre| chambre.id().get()),
        }
    }
}

impl From<CreateReservationRequest> for ReservationFields {
    fn from(value: CreateReservationRequest) -> Self {
        Self {
            client_id: value.client_id,
            chambre_id: value.chambre_id,
            date_debut: Some(value.date_debut),
            date_fin: Some(value.date_fin),
            preferences: Some(value.preferences),
        }
    }
}

impl From<UpdateReservationRequest> for ReservationFields {
    fn from(value: UpdateReservationRequest) -> Self {
        Self {
            client_id: value.client_id,
            chambre_id: value.chambre_id,
            date_debut: Some(value.date_debut),
            date_fin: Some(value.date_fin),
            preferences: Some(value.preferences),
        }
    }
}

fn incoming_trace_id(metadata: &MetadataMap) -> TraceId {
    metadata
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| match raw.parse::<TraceId>() {
            Ok(id) => Some(id),
            Err(err) => {
                debug!(error = %err, "ignoring malformed trace-id metadata");
                None
            }
        })
        .unwrap_or_else(TraceId::generate)
}

/// Run `call` inside a trace scope and translate its outcome.
async fn traced<T, Fut>(metadata: &MetadataMap, call: Fut) -> Result<Response<T>, Status>
where
    Fut: Future<Output = Result<T, Error>>,
{
    let trace_id = incoming_trace_id(metadata);
    let outcome = TraceId::scope(trace_id, call).await;
    let mut response = Response::new(outcome.map_err(|err| to_status(&err))?);
    if let Ok(value) = trace_id.to_string().parse::<MetadataValue<Ascii>>() {
        response.metadata_mut().insert(TRACE_ID_HEADER, value);
    }
    Ok(response)
}

#[tonic::async_trait]
impl ReservationService for ReservationGrpcService {
    async fn create_reservation(
        &self,
        request: Request<CreateReservationRequest>,
    ) -> Result<Response<ReservationResponse>, Status> {
        let (metadata, _, message) = request.into_parts();
        traced(&metadata, async {
            let draft = ReservationFields::from(message).into_draft()?;
            let created = self.orchestrator.create_reservation(draft).await?;
            info!(id = %created.id(), "reservation created over gRPC");
            Ok::<_, Error>(ReservationResponse::from(&created))
        })
        .await
    }

    async fn get_reservation(
        &self,
        request: Request<GetReservationRequest>,
    ) -> Result<Response<ReservationResponse>, Status> {
        let (metadata, _, message) = request.into_parts();
        traced(&metadata, async {
            let reservation = self
                .orchestrator
                .get_reservation(ReservationId::new(message.id))
                .await?
                .ok_or_else(|| Error::entity_not_found(EntityKind::Reservation, message.id))?;
            Ok::<_, Error>(ReservationResponse::from(&reservation))
        })
        .await
    }

    async fn update_reservation(
        &self,
        request: Request<UpdateReservationRequest>,
    ) -> Result<Response<ReservationResponse>, Status> {
        let (metadata, _, message) = request.into_parts();
        let id = ReservationId::new(message.id);
        traced(&metadata, async {
            let draft = ReservationFields::from(message).into_draft()?;
            let updated = self.orchestrator.update_reservation(id, draft).await?;
            Ok::<_, Error>(ReservationResponse::from(&updated))
        })
        .await
    }

    async fn delete_reservation(
        &self,
        request: Request<DeleteReservationRequest>,
    ) -> Result<Response<DeleteReservationResponse>, Status> {
        let (metadata, _, message) = request.into_parts();
        traced(&metadata, async {
            self.orchestrator
                .delete_reservation(ReservationId::new(message.id))
                .await?;
            Ok::<_, Error>(DeleteReservationResponse { success: true })
        })
        .await
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
