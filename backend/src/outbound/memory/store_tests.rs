//! Tests for the in-memory hotel store.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::Price;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date")
}

fn new_client() -> NewClient {
    NewClient {
        last_name: "Martin".to_owned(),
        first_name: "Marie".to_owned(),
        email: "marie.martin@example.com".to_owned(),
        phone: "+33987654321".to_owned(),
    }
}

fn new_chambre() -> NewChambre {
    NewChambre {
        room_type: "Deluxe".to_owned(),
        price: Price::try_new(200.0).expect("valid price"),
        available: true,
    }
}

fn new_reservation(client: Option<Client>, chambre: Option<Chambre>) -> NewReservation {
    NewReservation {
        client,
        chambre,
        start_date: date(10),
        end_date: date(15),
        preferences: Preferences::try_new("sea view").expect("valid preferences"),
    }
}

#[fixture]
fn store() -> InMemoryHotelStore {
    InMemoryHotelStore::new()
}

#[rstest]
#[tokio::test]
async fn identifiers_are_assigned_sequentially(store: InMemoryHotelStore) {
    let first = ClientRepository::insert(&store, &new_client())
        .await
        .expect("insert");
    let second = ClientRepository::insert(&store, &new_client())
        .await
        .expect("insert");

    assert_eq!(first.id(), ClientId::new(1));
    assert_eq!(second.id(), ClientId::new(2));
    assert_eq!(ClientRepository::count(&store).await.expect("count"), 2);
}

#[rstest]
#[tokio::test]
async fn reservation_is_returned_with_references(store: InMemoryHotelStore) {
    let client = ClientRepository::insert(&store, &new_client())
        .await
        .expect("client");
    let chambre = ChambreRepository::insert(&store, &new_chambre())
        .await
        .expect("chambre");

    let created =
        ReservationRepository::insert(&store, &new_reservation(Some(client.clone()), Some(chambre)))
            .await
            .expect("reservation");
    let fetched = ReservationRepository::find_by_id(&store, created.id())
        .await
        .expect("lookup")
        .expect("present");

    assert_eq!(fetched, created);
    assert_eq!(fetched.client(), Some(&client));
    assert_eq!(fetched.chambre().map(Chambre::room_type), Some("Deluxe"));
}

#[rstest]
#[tokio::test]
async fn insert_with_unknown_client_writes_nothing(store: InMemoryHotelStore) {
    let ghost = Client::new(ClientId::new(42), new_client());

    let error = ReservationRepository::insert(&store, &new_reservation(Some(ghost), None))
        .await
        .expect_err("dangling client");

    assert_eq!(error, PersistenceError::referential_integrity("client_id"));
    assert!(
        ReservationRepository::find_all(&store)
            .await
            .expect("list")
            .is_empty()
    );
}

#[rstest]
#[tokio::test]
async fn update_with_unknown_chambre_is_rejected(store: InMemoryHotelStore) {
    let created = ReservationRepository::insert(&store, &new_reservation(None, None))
        .await
        .expect("reservation");
    let ghost = Chambre::new(ChambreId::new(9), new_chambre());
    let replacement = created.replace(new_reservation(None, Some(ghost)));

    let error = ReservationRepository::update(&store, &replacement)
        .await
        .expect_err("dangling room");

    assert_eq!(error, PersistenceError::referential_integrity("chambre_id"));
}

#[rstest]
#[tokio::test]
async fn update_of_missing_reservation_returns_none(store: InMemoryHotelStore) {
    let phantom = Reservation::new(ReservationId::new(5), new_reservation(None, None));

    let updated = ReservationRepository::update(&store, &phantom)
        .await
        .expect("update");

    assert!(updated.is_none());
}

#[rstest]
#[tokio::test]
async fn referenced_client_cannot_be_deleted(store: InMemoryHotelStore) {
    let client = ClientRepository::insert(&store, &new_client())
        .await
        .expect("client");
    ReservationRepository::insert(&store, &new_reservation(Some(client.clone()), None))
        .await
        .expect("reservation");

    let error = ClientRepository::delete_by_id(&store, client.id())
        .await
        .expect_err("still referenced");

    assert_eq!(error, PersistenceError::referential_integrity("client_id"));
}

#[rstest]
#[tokio::test]
async fn deleting_twice_is_idempotent(store: InMemoryHotelStore) {
    let created = ReservationRepository::insert(&store, &new_reservation(None, None))
        .await
        .expect("reservation");

    ReservationRepository::delete_by_id(&store, created.id())
        .await
        .expect("first delete");
    ReservationRepository::delete_by_id(&store, created.id())
        .await
        .expect("second delete");

    assert!(
        ReservationRepository::find_by_id(&store, created.id())
            .await
            .expect("lookup")
            .is_none()
    );
}
