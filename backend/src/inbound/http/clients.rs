//! Client REST handlers.
//!
//! ```text
//! POST   /api/clients
//! GET    /api/clients
//! GET    /api/clients/{id}
//! DELETE /api/clients/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Client, ClientId, EntityKind, Error, NewClient};
use crate::inbound::http::error::{ApiResult, AtPath, ErrorBody};
use crate::inbound::http::state::HttpState;

/// Client creation payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ClientRequest {
    #[schema(example = "Dupont")]
    pub nom: String,
    #[schema(example = "Jean")]
    pub prenom: String,
    #[schema(example = "jean.dupont@example.com")]
    pub email: String,
    #[schema(example = "+33123456789")]
    pub telephone: String,
}

impl From<ClientRequest> for NewClient {
    fn from(value: ClientRequest) -> Self {
        Self {
            last_name: value.nom,
            first_name: value.prenom,
            email: value.email,
            phone: value.telephone,
        }
    }
}

/// Client as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ClientResponse {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
}

impl From<&Client> for ClientResponse {
    fn from(value: &Client) -> Self {
        Self {
            id: value.id().get(),
            nom: value.last_name().to_owned(),
            prenom: value.first_name().to_owned(),
            email: value.email().to_owned(),
            telephone: value.phone().to_owned(),
        }
    }
}

/// Register a client.
#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = ClientRequest,
    responses(
        (status = 201, description = "Client created", body = ClientResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["clients"],
    operation_id = "createClient"
)]
#[post("/clients")]
pub async fn create_client(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<ClientRequest>,
) -> ApiResult<HttpResponse> {
    let created = state
        .clients
        .create_client(payload.into_inner().into())
        .await
        .at(&req)?;
    Ok(HttpResponse::Created().json(ClientResponse::from(&created)))
}

/// List every client.
#[utoipa::path(
    get,
    path = "/api/clients",
    responses(
        (status = 200, description = "All clients", body = [ClientResponse]),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["clients"],
    operation_id = "listClients"
)]
#[get("/clients")]
pub async fn list_clients(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<ClientResponse>>> {
    let clients = state.clients.list_clients().await.at(&req)?;
    Ok(web::Json(clients.iter().map(ClientResponse::from).collect()))
}

/// Fetch one client.
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(("id" = i64, Path, description = "Client identifier")),
    responses(
        (status = 200, description = "Client", body = ClientResponse),
        (status = 404, description = "Unknown client", body = ErrorBody)
    ),
    tags = ["clients"],
    operation_id = "getClient"
)]
#[get("/clients/{id}")]
pub async fn get_client(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ClientResponse>> {
    let id = path.into_inner();
    let client = state
        .clients
        .get_client(ClientId::new(id))
        .await
        .and_then(|found| found.ok_or_else(|| Error::entity_not_found(EntityKind::Client, id)))
        .at(&req)?;
    Ok(web::Json(ClientResponse::from(&client)))
}

/// Remove a client. Fails while a reservation still references it.
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(("id" = i64, Path, description = "Client identifier")),
    responses(
        (status = 204, description = "Client removed or already absent"),
        (status = 400, description = "Client still referenced", body = ErrorBody)
    ),
    tags = ["clients"],
    operation_id = "deleteClient"
)]
#[delete("/clients/{id}")]
pub async fn delete_client(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .clients
        .delete_client(ClientId::new(path.into_inner()))
        .await
        .at(&req)?;
    Ok(HttpResponse::NoContent().finish())
}
