//! Reservation REST handlers.
//!
//! ```text
//! POST   /api/reservations
//! GET    /api/reservations
//! GET    /api/reservations/{id}
//! PUT    /api/reservations/{id}
//! DELETE /api/reservations/{id}
//! ```
//!
//! Client and room references travel as nested `{"id": ...}` objects;
//! responses embed the resolved client and room.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EntityKind, Error, Reservation, ReservationId};
use crate::inbound::date_codec::format_date;
use crate::inbound::http::chambres::ChambreResponse;
use crate::inbound::http::clients::ClientResponse;
use crate::inbound::http::error::{ApiResult, AtPath, ErrorBody};
use crate::inbound::http::state::HttpState;
use crate::inbound::validation::ReservationFields;

/// Reference to an existing client or room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct EntityReference {
    pub id: i64,
}

/// Create or full-replace payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub client: Option<EntityReference>,
    pub chambre: Option<EntityReference>,
    /// `YYYY-MM-DD`.
    #[schema(example = "2024-01-10")]
    pub date_debut: Option<String>,
    /// `YYYY-MM-DD`.
    #[schema(example = "2024-01-15")]
    pub date_fin: Option<String>,
    #[schema(example = "sea view", max_length = 1000)]
    pub preferences: Option<String>,
}

impl From<ReservationRequest> for ReservationFields {
    fn from(value: ReservationRequest) -> Self {
        Self {
            client_id: value.client.map(|reference| reference.id),
            chambre_id: value.chambre.map(|reference| reference.id),
            date_debut: value.date_debut,
            date_fin: value.date_fin,
            preferences: value.preferences,
        }
    }
}

/// Reservation with its client and room attached.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: i64,
    pub client: Option<ClientResponse>,
    pub chambre: Option<ChambreResponse>,
    #[schema(example = "2024-01-10")]
    pub date_debut: String,
    #[schema(example = "2024-01-15")]
    pub date_fin: String,
    pub preferences: String,
}

impl From<&Reservation> for ReservationResponse {
    fn from(value: &Reservation) -> Self {
        Self {
            id: value.id().get(),
            client: value.client().map(ClientResponse::from),
            chambre: value.chambre().map(ChambreResponse::from),
            date_debut: format_date(value.start_date()),
            date_fin: format_date(value.end_date()),
            preferences: value.preferences().as_str().to_owned(),
        }
    }
}

/// Book a reservation.
#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Invalid payload or dangling reference", body = ErrorBody),
        (status = 404, description = "Referenced client or room not found", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "createReservation"
)]
#[post("/reservations")]
pub async fn create_reservation(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<ReservationRequest>,
) -> ApiResult<HttpResponse> {
    let draft = ReservationFields::from(payload.into_inner())
        .into_draft()
        .at(&req)?;
    let created = state
        .reservations
        .create_reservation(draft)
        .await
        .at(&req)?;
    Ok(HttpResponse::Created().json(ReservationResponse::from(&created)))
}

/// List every reservation.
#[utoipa::path(
    get,
    path = "/api/reservations",
    responses(
        (status = 200, description = "All reservations", body = [ReservationResponse]),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "listReservations"
)]
#[get("/reservations")]
pub async fn list_reservations(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<ReservationResponse>>> {
    let reservations = state.reservations.list_reservations().await.at(&req)?;
    Ok(web::Json(
        reservations.iter().map(ReservationResponse::from).collect(),
    ))
}

/// Fetch one reservation.
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    params(("id" = i64, Path, description = "Reservation identifier")),
    responses(
        (status = 200, description = "Reservation", body = ReservationResponse),
        (status = 404, description = "Unknown reservation", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "getReservation"
)]
#[get("/reservations/{id}")]
pub async fn get_reservation(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ReservationResponse>> {
    let id = path.into_inner();
    let reservation = state
        .reservations
        .get_reservation(ReservationId::new(id))
        .await
        .and_then(|found| {
            found.ok_or_else(|| Error::entity_not_found(EntityKind::Reservation, id))
        })
        .at(&req)?;
    Ok(web::Json(ReservationResponse::from(&reservation)))
}

/// Replace dates and preferences of a reservation.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    params(("id" = i64, Path, description = "Reservation identifier")),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Updated reservation", body = ReservationResponse),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Reservation or reference not found", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "updateReservation"
)]
#[put("/reservations/{id}")]
pub async fn update_reservation(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<i64>,
    payload: web::Json<ReservationRequest>,
) -> ApiResult<web::Json<ReservationResponse>> {
    let draft = ReservationFields::from(payload.into_inner())
        .into_draft()
        .at(&req)?;
    let updated = state
        .reservations
        .update_reservation(ReservationId::new(path.into_inner()), draft)
        .await
        .at(&req)?;
    Ok(web::Json(ReservationResponse::from(&updated)))
}

/// Cancel a reservation. Cancelling twice succeeds.
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    params(("id" = i64, Path, description = "Reservation identifier")),
    responses(
        (status = 204, description = "Reservation removed or already absent"),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "deleteReservation"
)]
#[delete("/reservations/{id}")]
pub async fn delete_reservation(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .reservations
        .delete_reservation(ReservationId::new(path.into_inner()))
        .await
        .at(&req)?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "reservations_tests.rs"]
mod tests;
