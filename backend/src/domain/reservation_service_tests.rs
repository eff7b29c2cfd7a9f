//! Tests for the reservation service.

use std::sync::Arc;

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockChambreRepository, MockClientRepository, MockReservationRepository};
use crate::domain::{ErrorCode, NewChambre, NewClient, Preferences, Price};

type TestService =
    ReservationService<MockClientRepository, MockChambreRepository, MockReservationRepository>;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn sample_client(id: i64) -> Client {
    Client::new(
        ClientId::new(id),
        NewClient {
            last_name: "Dupont".to_owned(),
            first_name: "Jean".to_owned(),
            email: "jean.dupont@example.com".to_owned(),
            phone: "+33123456789".to_owned(),
        },
    )
}

fn sample_chambre(id: i64) -> Chambre {
    Chambre::new(
        ChambreId::new(id),
        NewChambre {
            room_type: "Suite".to_owned(),
            price: Price::try_new(350.0).expect("valid price"),
            available: true,
        },
    )
}

#[fixture]
fn draft() -> ReservationDraft {
    ReservationDraft::unassigned(
        date(2024, 1, 10),
        date(2024, 1, 15),
        Preferences::try_new("sea view").expect("valid preferences"),
    )
}

fn stored(id: i64, fields: NewReservation) -> Reservation {
    Reservation::new(ReservationId::new(id), fields)
}

fn service(
    clients: MockClientRepository,
    chambres: MockChambreRepository,
    reservations: MockReservationRepository,
) -> TestService {
    ReservationService::new(Arc::new(clients), Arc::new(chambres), Arc::new(reservations))
}

#[rstest]
#[tokio::test]
async fn create_without_references_persists_draft(draft: ReservationDraft) {
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_insert()
        .withf(|new| {
            new.client.is_none()
                && new.chambre.is_none()
                && new.preferences.as_str() == "sea view"
        })
        .times(1)
        .returning(|new| Ok(stored(1, new.clone())));

    let created = service(
        MockClientRepository::new(),
        MockChambreRepository::new(),
        reservations,
    )
    .create_reservation(draft)
    .await
    .expect("create succeeds");

    assert_eq!(created.id(), ReservationId::new(1));
    assert_eq!(created.start_date(), date(2024, 1, 10));
    assert_eq!(created.end_date(), date(2024, 1, 15));
}

#[rstest]
#[tokio::test]
async fn create_attaches_resolved_references(mut draft: ReservationDraft) {
    draft.client_id = Some(ClientId::new(3));
    draft.chambre_id = Some(ChambreId::new(5));

    let mut clients = MockClientRepository::new();
    clients
        .expect_find_by_id()
        .times(1)
        .returning(|id| Ok(Some(sample_client(id.get()))));
    let mut chambres = MockChambreRepository::new();
    chambres
        .expect_find_by_id()
        .times(1)
        .returning(|id| Ok(Some(sample_chambre(id.get()))));
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_insert()
        .times(1)
        .returning(|new| Ok(stored(9, new.clone())));

    let created = service(clients, chambres, reservations)
        .create_reservation(draft)
        .await
        .expect("create succeeds");

    assert_eq!(created.client().map(Client::id), Some(ClientId::new(3)));
    assert_eq!(created.chambre().map(Chambre::id), Some(ChambreId::new(5)));
}

#[rstest]
#[tokio::test]
async fn create_with_unknown_client_fails_without_write(mut draft: ReservationDraft) {
    draft.client_id = Some(ClientId::new(42));

    let mut clients = MockClientRepository::new();
    clients.expect_find_by_id().times(1).returning(|_| Ok(None));
    let mut reservations = MockReservationRepository::new();
    reservations.expect_insert().times(0);

    let error = service(clients, MockChambreRepository::new(), reservations)
        .create_reservation(draft)
        .await
        .expect_err("unknown client");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.not_found_entity(), Some(EntityKind::Client));
}

#[rstest]
#[tokio::test]
async fn create_with_unknown_chambre_fails_without_write(mut draft: ReservationDraft) {
    draft.chambre_id = Some(ChambreId::new(77));

    let mut chambres = MockChambreRepository::new();
    chambres.expect_find_by_id().times(1).returning(|_| Ok(None));
    let mut reservations = MockReservationRepository::new();
    reservations.expect_insert().times(0);

    let error = service(MockClientRepository::new(), chambres, reservations)
        .create_reservation(draft)
        .await
        .expect_err("unknown chambre");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.not_found_entity(), Some(EntityKind::Chambre));
}

#[rstest]
#[case(PersistenceError::connection("pool exhausted"), ErrorCode::ServiceUnavailable)]
#[case(PersistenceError::query("syntax"), ErrorCode::InternalError)]
#[case(
    PersistenceError::referential_integrity("chambre_id"),
    ErrorCode::ReferentialIntegrity
)]
#[tokio::test]
async fn create_maps_persistence_failures(
    draft: ReservationDraft,
    #[case] failure: PersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_insert()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = service(
        MockClientRepository::new(),
        MockChambreRepository::new(),
        reservations,
    )
    .create_reservation(draft)
    .await
    .expect_err("persistence failure");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn update_missing_reservation_is_not_found(draft: ReservationDraft) {
    let mut reservations = MockReservationRepository::new();
    reservations.expect_find_by_id().times(1).returning(|_| Ok(None));
    reservations.expect_update().times(0);

    let error = service(
        MockClientRepository::new(),
        MockChambreRepository::new(),
        reservations,
    )
    .update_reservation(ReservationId::new(8), draft)
    .await
    .expect_err("missing reservation");

    assert_eq!(error.not_found_entity(), Some(EntityKind::Reservation));
}

#[rstest]
#[tokio::test]
async fn update_replaces_fields_and_keeps_unspecified_references() {
    let existing = stored(
        2,
        NewReservation {
            client: Some(sample_client(1)),
            chambre: Some(sample_chambre(1)),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 2),
            preferences: Preferences::try_new("A").expect("valid"),
        },
    );

    let mut chambres = MockChambreRepository::new();
    chambres
        .expect_find_by_id()
        .times(1)
        .returning(|id| Ok(Some(sample_chambre(id.get()))));
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    reservations
        .expect_update()
        .times(1)
        .returning(|reservation| Ok(Some(reservation.clone())));

    let draft = ReservationDraft {
        client_id: None,
        chambre_id: Some(ChambreId::new(4)),
        start_date: date(2024, 3, 1),
        end_date: date(2024, 3, 5),
        preferences: Preferences::default(),
    };

    let updated = service(MockClientRepository::new(), chambres, reservations)
        .update_reservation(ReservationId::new(2), draft)
        .await
        .expect("update succeeds");

    assert_eq!(updated.id(), ReservationId::new(2));
    assert_eq!(updated.client().map(Client::id), Some(ClientId::new(1)));
    assert_eq!(updated.chambre().map(Chambre::id), Some(ChambreId::new(4)));
    assert_eq!(updated.start_date(), date(2024, 3, 1));
    assert_eq!(updated.end_date(), date(2024, 3, 5));
    assert_eq!(updated.preferences().as_str(), "");
}

#[rstest]
#[tokio::test]
async fn update_with_unknown_client_does_not_write(mut draft: ReservationDraft) {
    draft.client_id = Some(ClientId::new(12));
    let existing = stored(
        2,
        NewReservation {
            client: None,
            chambre: None,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 2),
            preferences: Preferences::default(),
        },
    );

    let mut clients = MockClientRepository::new();
    clients.expect_find_by_id().times(1).returning(|_| Ok(None));
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    reservations.expect_update().times(0);

    let error = service(clients, MockChambreRepository::new(), reservations)
        .update_reservation(ReservationId::new(2), draft)
        .await
        .expect_err("unknown client");

    assert_eq!(error.not_found_entity(), Some(EntityKind::Client));
}

#[rstest]
#[tokio::test]
async fn get_missing_reservation_is_empty() {
    let mut reservations = MockReservationRepository::new();
    reservations.expect_find_by_id().times(1).returning(|_| Ok(None));

    let found = service(
        MockClientRepository::new(),
        MockChambreRepository::new(),
        reservations,
    )
    .get_reservation(ReservationId::new(404))
    .await
    .expect("lookup succeeds");

    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn delete_delegates_to_repository() {
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_delete_by_id()
        .withf(|id| *id == ReservationId::new(6))
        .times(2)
        .returning(|_| Ok(()));

    let service = service(
        MockClientRepository::new(),
        MockChambreRepository::new(),
        reservations,
    );
    service
        .delete_reservation(ReservationId::new(6))
        .await
        .expect("first delete succeeds");
    service
        .delete_reservation(ReservationId::new(6))
        .await
        .expect("second delete succeeds");
}
