//! Tests for the SOAP endpoint.

use std::sync::Arc;

use actix_web::{App, test};
use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockChambreRegistry, MockClientRegistry, MockReservationOrchestrator};
use crate::domain::{EntityKind, NewReservation, Reservation, ReservationDraft};
use crate::inbound::http::state::HttpStatePorts;

fn envelope(payload: &str) -> String {
    format!(
        concat!(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" "#,
            r#"xmlns:res="http://hotel.com/reservation/soap"><soapenv:Body>{}</soapenv:Body></soapenv:Envelope>"#
        ),
        payload
    )
}

fn stored(id: i64, draft: ReservationDraft) -> Reservation {
    Reservation::new(
        ReservationId::new(id),
        NewReservation {
            client: None,
            chambre: None,
            start_date: draft.start_date,
            end_date: draft.end_date,
            preferences: draft.preferences,
        },
    )
}

#[fixture]
fn orchestrator() -> MockReservationOrchestrator {
    MockReservationOrchestrator::new()
}

async fn post_soap(orchestrator: MockReservationOrchestrator, body: String) -> (StatusCode, String) {
    let state = web::Data::new(HttpState::new(HttpStatePorts {
        reservations: Arc::new(orchestrator),
        clients: Arc::new(MockClientRegistry::new()),
        chambres: Arc::new(MockChambreRegistry::new()),
    }));
    let app = test::init_service(App::new().app_data(state).service(soap_endpoint)).await;
    let req = test::TestRequest::post()
        .uri("/soap")
        .insert_header(("content-type", "text/xml; charset=utf-8"))
        .set_payload(body)
        .to_request();
    let res = test::call_service(&app, req).await;
    let status = res.status();
    let bytes = test::read_body(res).await;
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

#[rstest]
#[actix_web::test]
async fn create_echoes_stored_fields(mut orchestrator: MockReservationOrchestrator) {
    orchestrator
        .expect_create_reservation()
        .withf(|draft| {
            draft.start_date == NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid date")
                && draft.preferences.as_str() == "sea view"
        })
        .times(1)
        .returning(|draft| Ok(stored(1, draft)));

    let body = envelope(
        "<res:createReservationRequest><res:dateDebut>2024-01-10</res:dateDebut>\
         <res:dateFin>2024-01-15</res:dateFin><res:preferences>sea view</res:preferences>\
         </res:createReservationRequest>",
    );
    let (status, xml) = post_soap(orchestrator, body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(xml.contains("<createReservationResponse"));
    assert!(xml.contains("<id>1</id>"));
    assert!(xml.contains("<dateFin>2024-01-15</dateFin>"));
}

#[rstest]
#[actix_web::test]
async fn junk_before_envelope_is_ignored(mut orchestrator: MockReservationOrchestrator) {
    orchestrator
        .expect_delete_reservation()
        .withf(|id| *id == ReservationId::new(4))
        .times(1)
        .returning(|_| Ok(()));

    let body = format!(
        "--uuid:boundary\r\nContent-Type: text/xml\r\n\r\n{}",
        envelope("<res:deleteReservationRequest><res:id>4</res:id></res:deleteReservationRequest>")
    );
    let (status, xml) = post_soap(orchestrator, body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(xml.contains("<success>true</success>"));
}

#[rstest]
#[actix_web::test]
async fn get_of_missing_reservation_is_empty(mut orchestrator: MockReservationOrchestrator) {
    orchestrator.expect_get_reservation().returning(|_| Ok(None));

    let body = envelope("<res:getReservationRequest><res:id>77</res:id></res:getReservationRequest>");
    let (status, xml) = post_soap(orchestrator, body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(xml.contains("getReservationResponse"));
    assert!(!xml.contains("<id>"));
}

#[rstest]
#[actix_web::test]
async fn update_of_missing_reservation_is_a_client_fault(
    mut orchestrator: MockReservationOrchestrator,
) {
    orchestrator
        .expect_update_reservation()
        .returning(|id, _| Err(Error::entity_not_found(EntityKind::Reservation, id.get())));

    let body = envelope(
        "<res:updateReservationRequest><res:id>12</res:id><res:dateDebut>2024-01-10</res:dateDebut>\
         <res:dateFin>2024-01-15</res:dateFin></res:updateReservationRequest>",
    );
    let (status, xml) = post_soap(orchestrator, body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(xml.contains("<faultcode>soap:Client</faultcode>"));
    assert!(xml.contains("<error>not_found</error>"));
    assert!(xml.contains("Reservation not found with id: 12"));
}

#[rstest]
#[actix_web::test]
async fn missing_date_faults_without_calling_orchestrator(
    mut orchestrator: MockReservationOrchestrator,
) {
    orchestrator.expect_create_reservation().never();

    let body = envelope(
        "<res:createReservationRequest><res:dateFin>2024-01-15</res:dateFin></res:createReservationRequest>",
    );
    let (_, xml) = post_soap(orchestrator, body).await;

    assert!(xml.contains("<error>invalid_request</error>"));
    assert!(xml.contains("dateDebut"));
}

#[rstest]
#[actix_web::test]
async fn unknown_operation_is_a_client_fault(orchestrator: MockReservationOrchestrator) {
    let (status, xml) = post_soap(orchestrator, envelope("<res:pingRequest/>")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(xml.contains("<faultcode>soap:Client</faultcode>"));
}
