//! `POST /soap` endpoint dispatching envelopes to the orchestrator.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, post, web};
use tracing::{error, info};

use crate::domain::ports::ReservationOrchestrator;
use crate::domain::{Error, ReservationId};
use crate::inbound::http::state::HttpState;
use crate::inbound::soap::repair::repair_body;
use crate::inbound::soap::request::{
    SoapOperation, SoapRequestError, parse_envelope, required_id,
};
use crate::inbound::soap::response::{
    DeletePayload, Fault, ReservationPayload, SoapResponse, render_envelope,
};

/// Run one decoded operation against the orchestrator.
pub(crate) async fn dispatch(
    orchestrator: &dyn ReservationOrchestrator,
    operation: SoapOperation,
) -> Result<SoapResponse, Error> {
    match operation {
        SoapOperation::CreateReservationRequest(element) => {
            info!(
                date_debut = ?element.date_debut,
                date_fin = ?element.date_fin,
                preferences = ?element.preferences,
                "SOAP createReservationRequest"
            );
            let draft = element.into_fields()?.into_draft()?;
            let created = orchestrator.create_reservation(draft).await?;
            info!(reservation_id = %created.id(), "SOAP reservation created");
            Ok(SoapResponse::Create(ReservationPayload::from(&created)))
        }
        SoapOperation::GetReservationRequest(element) => {
            let id = required_id(element.id.as_deref())?;
            info!(reservation_id = id, "SOAP getReservationRequest");
            let found = orchestrator
                .get_reservation(ReservationId::new(id))
                .await?;
            Ok(SoapResponse::Get(
                found
                    .as_ref()
                    .map_or_else(ReservationPayload::empty, ReservationPayload::from),
            ))
        }
        SoapOperation::UpdateReservationRequest(element) => {
            let id = required_id(element.id.as_deref())?;
            info!(
                reservation_id = id,
                date_debut = ?element.date_debut,
                date_fin = ?element.date_fin,
                "SOAP updateReservationRequest"
            );
            let draft = element.into_fields()?.into_draft()?;
            let updated = orchestrator
                .update_reservation(ReservationId::new(id), draft)
                .await?;
            Ok(SoapResponse::Update(ReservationPayload::from(&updated)))
        }
        SoapOperation::DeleteReservationRequest(element) => {
            let id = required_id(element.id.as_deref())?;
            info!(reservation_id = id, "SOAP deleteReservationRequest");
            orchestrator
                .delete_reservation(ReservationId::new(id))
                .await?;
            Ok(SoapResponse::Delete(DeletePayload::succeeded()))
        }
    }
}

fn decode(body: &[u8]) -> Result<SoapOperation, SoapRequestError> {
    let text = std::str::from_utf8(body).map_err(|_| SoapRequestError::NotUtf8)?;
    parse_envelope(repair_body(text))
}

fn fault_for(err: &Error) -> SoapResponse {
    error!(
        code = %err.code(),
        message = err.message(),
        trace_id = ?err.trace_id(),
        "SOAP fault"
    );
    SoapResponse::Fault(Fault::from(err))
}

fn xml_response(response: &SoapResponse) -> HttpResponse {
    // SOAP 1.1 over HTTP reports faults with status 500.
    let status = if response.is_fault() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    match render_envelope(response) {
        Ok(xml) => HttpResponse::build(status)
            .content_type(ContentType::xml())
            .body(xml),
        Err(err) => {
            error!(error = %err, "failed to render SOAP envelope");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// SOAP 1.1 endpoint for reservation operations.
#[post("/soap")]
pub async fn soap_endpoint(state: web::Data<HttpState>, body: web::Bytes) -> HttpResponse {
    let operation = match decode(&body) {
        Ok(operation) => operation,
        Err(err) => {
            let invalid = Error::invalid_request(err.to_string());
            return xml_response(&fault_for(&invalid));
        }
    };
    let name = operation.name();
    let response = match dispatch(state.reservations.as_ref(), operation).await {
        Ok(response) => response,
        Err(err) => {
            error!(operation = name, "SOAP operation failed");
            fault_for(&err)
        }
    };
    xml_response(&response)
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
