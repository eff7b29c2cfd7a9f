//! Room REST handlers.
//!
//! ```text
//! POST   /api/chambres
//! GET    /api/chambres
//! GET    /api/chambres/{id}
//! DELETE /api/chambres/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Chambre, ChambreId, EntityKind, Error, NewChambre, Price};
use crate::inbound::http::error::{ApiResult, AtPath, ErrorBody};
use crate::inbound::http::state::HttpState;

const fn default_available() -> bool {
    true
}

/// Room creation payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ChambreRequest {
    #[serde(rename = "type")]
    #[schema(example = "Suite")]
    pub room_type: String,
    #[schema(example = 350.0)]
    pub prix: f64,
    #[serde(default = "default_available")]
    pub disponible: bool,
}

impl TryFrom<ChambreRequest> for NewChambre {
    type Error = Error;

    fn try_from(value: ChambreRequest) -> Result<Self, Self::Error> {
        let price = Price::try_new(value.prix).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": "prix",
                "code": "invalid_price",
            }))
        })?;
        Ok(Self {
            room_type: value.room_type,
            price,
            available: value.disponible,
        })
    }
}

/// Room as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ChambreResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub room_type: String,
    pub prix: f64,
    pub disponible: bool,
}

impl From<&Chambre> for ChambreResponse {
    fn from(value: &Chambre) -> Self {
        Self {
            id: value.id().get(),
            room_type: value.room_type().to_owned(),
            prix: value.price().get(),
            disponible: value.is_available(),
        }
    }
}

/// Register a room.
#[utoipa::path(
    post,
    path = "/api/chambres",
    request_body = ChambreRequest,
    responses(
        (status = 201, description = "Room created", body = ChambreResponse),
        (status = 400, description = "Invalid price or payload", body = ErrorBody)
    ),
    tags = ["chambres"],
    operation_id = "createChambre"
)]
#[post("/chambres")]
pub async fn create_chambre(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<ChambreRequest>,
) -> ApiResult<HttpResponse> {
    let new_chambre = NewChambre::try_from(payload.into_inner()).at(&req)?;
    let created = state.chambres.create_chambre(new_chambre).await.at(&req)?;
    Ok(HttpResponse::Created().json(ChambreResponse::from(&created)))
}

/// List every room.
#[utoipa::path(
    get,
    path = "/api/chambres",
    responses(
        (status = 200, description = "All rooms", body = [ChambreResponse]),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["chambres"],
    operation_id = "listChambres"
)]
#[get("/chambres")]
pub async fn list_chambres(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<ChambreResponse>>> {
    let chambres = state.chambres.list_chambres().await.at(&req)?;
    Ok(web::Json(chambres.iter().map(ChambreResponse::from).collect()))
}

/// Fetch one room.
#[utoipa::path(
    get,
    path = "/api/chambres/{id}",
    params(("id" = i64, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "Room", body = ChambreResponse),
        (status = 404, description = "Unknown room", body = ErrorBody)
    ),
    tags = ["chambres"],
    operation_id = "getChambre"
)]
#[get("/chambres/{id}")]
pub async fn get_chambre(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ChambreResponse>> {
    let id = path.into_inner();
    let chambre = state
        .chambres
        .get_chambre(ChambreId::new(id))
        .await
        .and_then(|found| found.ok_or_else(|| Error::entity_not_found(EntityKind::Chambre, id)))
        .at(&req)?;
    Ok(web::Json(ChambreResponse::from(&chambre)))
}

/// Remove a room. Fails while a reservation still references it.
#[utoipa::path(
    delete,
    path = "/api/chambres/{id}",
    params(("id" = i64, Path, description = "Room identifier")),
    responses(
        (status = 204, description = "Room removed or already absent"),
        (status = 400, description = "Room still referenced", body = ErrorBody)
    ),
    tags = ["chambres"],
    operation_id = "deleteChambre"
)]
#[delete("/chambres/{id}")]
pub async fn delete_chambre(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .chambres
        .delete_chambre(ChambreId::new(path.into_inner()))
        .await
        .at(&req)?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    fn negative_price_is_an_invalid_request() {
        let err = NewChambre::try_from(ChambreRequest {
            room_type: "Standard".to_owned(),
            prix: -1.0,
            disponible: true,
        })
        .expect_err("negative price");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.details().expect("details")["field"], "prix");
    }

    #[rstest]
    fn availability_defaults_to_true() {
        let request: ChambreRequest =
            serde_json::from_str(r#"{"type":"Deluxe","prix":200.0}"#).expect("valid json");
        assert!(request.disponible);
    }
}
