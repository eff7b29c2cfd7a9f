//! Actix endpoints exposing the GraphQL schema at `/graphql`.

use actix_web::{HttpResponse, get, post, web};

use super::schema::HotelSchema;

const USAGE: &str = "GraphQL endpoint available. Send POST /graphql with a JSON body \
containing `query` and optional `variables` and `operationName`.";

/// Execute a GraphQL request.
///
/// Resolver failures are reported in the `errors` array with HTTP 200.
#[post("/graphql")]
pub async fn graphql_endpoint(
    schema: web::Data<HotelSchema>,
    request: web::Json<async_graphql::Request>,
) -> HttpResponse {
    let response = schema.execute(request.into_inner()).await;
    HttpResponse::Ok().json(response)
}

/// Usage hint for browsers hitting the endpoint.
#[get("/graphql")]
pub async fn graphql_usage() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(USAGE)
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
