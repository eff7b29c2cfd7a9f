//! Shared wiring for the facade equivalence suite.
//!
//! Every facade drives the same orchestrator over one seeded in-memory
//! store, so a write through one protocol is visible through all others.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use hotel_backend::domain::{
    ChambreService, ClientService, DemoDataOutcome, DemoDataSeeder, ReservationService,
};
use hotel_backend::inbound::graphql::{HotelSchema, build_schema, graphql_endpoint};
use hotel_backend::inbound::grpc::ReservationGrpcService;
use hotel_backend::inbound::http::configure;
use hotel_backend::inbound::http::state::{HttpState, HttpStatePorts};
use hotel_backend::inbound::soap::soap_endpoint;
use hotel_backend::outbound::memory::InMemoryHotelStore;
use hotel_backend::Trace;
use serde_json::{Value, json};

pub struct Harness {
    pub http_state: web::Data<HttpState>,
    pub schema: web::Data<HotelSchema>,
    pub grpc: ReservationGrpcService,
}

impl Harness {
    /// Store seeded with two clients (ids 1, 2) and three rooms (ids 1-3).
    pub async fn seeded() -> Self {
        let store = Arc::new(InMemoryHotelStore::new());
        let outcome = DemoDataSeeder::new(store.clone(), store.clone())
            .seed_if_empty()
            .await
            .expect("demo data");
        assert_eq!(
            outcome,
            DemoDataOutcome::Applied {
                clients: 2,
                chambres: 3
            }
        );

        let ports = HttpStatePorts {
            reservations: Arc::new(ReservationService::new(
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            clients: Arc::new(ClientService::new(store.clone())),
            chambres: Arc::new(ChambreService::new(store)),
        };
        let orchestrator = ports.reservations.clone();
        Self {
            http_state: web::Data::new(HttpState::new(ports)),
            schema: web::Data::new(build_schema(orchestrator.clone())),
            grpc: ReservationGrpcService::new(orchestrator),
        }
    }

    pub async fn app(
        &self,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .app_data(self.http_state.clone())
                .app_data(self.schema.clone())
                .wrap(Trace)
                .configure(configure)
                .service(soap_endpoint)
                .service(graphql_endpoint),
        )
        .await
    }
}

pub async fn rest<S>(app: &S, request: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(app, request.to_request()).await;
    let status = res.status();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

pub fn envelope(payload: &str) -> String {
    format!(
        concat!(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" "#,
            r#"xmlns:res="http://hotel.com/reservation/soap"><soapenv:Body>{}</soapenv:Body></soapenv:Envelope>"#
        ),
        payload
    )
}

pub async fn soap<S>(app: &S, payload: &str) -> (StatusCode, String)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/soap")
        .insert_header(("content-type", "text/xml; charset=utf-8"))
        .set_payload(envelope(payload))
        .to_request();
    let res = test::call_service(app, req).await;
    let status = res.status();
    let bytes = test::read_body(res).await;
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

pub async fn graphql<S>(app: &S, query: &str, variables: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let mut body = json!({ "query": query });
    if !variables.is_null() {
        body["variables"] = variables;
    }
    let req = test::TestRequest::post()
        .uri("/graphql")
        .set_json(body)
        .to_request();
    let res = test::call_service(app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    test::read_body_json(res).await
}
