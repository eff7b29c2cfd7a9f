//! REST adapter exposing clients, rooms and reservations under `/api`.

use actix_web::web;

pub mod chambres;
pub mod clients;
pub mod error;
pub mod health;
pub mod reservations;
pub mod state;

pub use error::{ApiError, ApiResult};

/// Register the `/api` scope with JSON and path extractors that answer with
/// the REST error body.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use hotel_backend::inbound::http::{configure, state::HttpState};
///
/// fn app(state: HttpState) {
///     let _app = App::new()
///         .app_data(web::Data::new(state))
///         .configure(configure);
/// }
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
            .service(clients::create_client)
            .service(clients::list_clients)
            .service(clients::get_client)
            .service(clients::delete_client)
            .service(chambres::create_chambre)
            .service(chambres::list_chambres)
            .service(chambres::get_chambre)
            .service(chambres::delete_chambre)
            .service(reservations::create_reservation)
            .service(reservations::list_reservations)
            .service(reservations::get_reservation)
            .service(reservations::update_reservation)
            .service(reservations::delete_reservation),
    );
}
