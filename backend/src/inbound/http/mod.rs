//! HTTP inbound adapter exposing the gateway's REST surface.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

pub mod error;
pub mod guests;
pub mod health;
pub mod reservations;
pub mod room_reservations;
pub mod rooms;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

/// Register the `/roomReservations` routes.
///
/// Handlers expect `web::Data<state::HttpState>` to be registered on the app.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use reservation_gateway::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/roomReservations")
            .service(room_reservations::list_room_reservations)
            .service(rooms::list_rooms)
            .service(rooms::create_room)
            .service(rooms::get_room)
            .service(rooms::update_room)
            .service(rooms::delete_room)
            .service(guests::list_guests)
            .service(guests::create_guest)
            .service(guests::get_guest)
            .service(guests::update_guest)
            .service(guests::delete_guest)
            .service(reservations::list_reservations)
            .service(reservations::create_reservation)
            .service(reservations::get_reservation)
            .service(reservations::update_reservation)
            .service(reservations::delete_reservation),
    );
}

/// Plain-text `200` confirming an update or delete.
pub(crate) fn confirmation(message: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message)
}
