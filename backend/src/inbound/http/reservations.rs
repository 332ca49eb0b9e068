//! Reservation pass-through handlers.
//!
//! ```text
//! GET    /roomReservations/reservations?dateString=&guestId=
//! POST   /roomReservations/reservations
//! GET    /roomReservations/reservations/{reservationId}
//! PUT    /roomReservations/reservations/{reservationId}
//! DELETE /roomReservations/reservations/{reservationId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::{GuestId, NewReservation, Reservation, ReservationFilter, ReservationId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::confirmation;
use crate::inbound::http::schemas::{ErrorSchema, NewReservationSchema, ReservationSchema};
use crate::inbound::http::state::HttpState;

/// Optional filters accepted by the reservation list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReservationsQuery {
    /// Forwarded upstream as `date`; blank values are dropped.
    pub date_string: Option<String>,
    /// Forwarded upstream as `guestId`.
    pub guest_id: Option<GuestId>,
}

impl From<ListReservationsQuery> for ReservationFilter {
    fn from(query: ListReservationsQuery) -> Self {
        Self::new(query.date_string, query.guest_id)
    }
}

/// List reservations, optionally narrowed by date and guest.
#[utoipa::path(
    get,
    path = "/roomReservations/reservations",
    params(
        ("dateString" = Option<String>, Query, description = "Only reservations on this date (yyyy-MM-dd)"),
        ("guestId" = Option<i64>, Query, description = "Only reservations held by this guest")
    ),
    responses(
        (status = 200, description = "Reservations", body = [ReservationSchema]),
        (status = 400, description = "Rejected by the reservation service", body = ErrorSchema),
        (status = 503, description = "Reservation service unavailable", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "listReservations"
)]
#[get("/reservations")]
pub async fn list_reservations(
    state: web::Data<HttpState>,
    query: web::Query<ListReservationsQuery>,
) -> ApiResult<web::Json<Vec<Reservation>>> {
    let filter = ReservationFilter::from(query.into_inner());
    let reservations = state.reservations.list_reservations(&filter).await?;
    Ok(web::Json(reservations))
}

/// Fetch one reservation.
#[utoipa::path(
    get,
    path = "/roomReservations/reservations/{reservationId}",
    params(("reservationId" = i64, Path, description = "Reservation identifier")),
    responses(
        (status = 200, description = "Reservation", body = ReservationSchema),
        (status = 404, description = "Unknown reservation", body = ErrorSchema),
        (status = 503, description = "Reservation service unavailable", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "getReservation"
)]
#[get("/reservations/{reservation_id}")]
pub async fn get_reservation(
    state: web::Data<HttpState>,
    path: web::Path<ReservationId>,
) -> ApiResult<web::Json<Reservation>> {
    let reservation = state.reservations.get_reservation(path.into_inner()).await?;
    Ok(web::Json(reservation))
}

/// Create a reservation; responds with the record the reservation service
/// stored, unchanged.
#[utoipa::path(
    post,
    path = "/roomReservations/reservations",
    request_body = NewReservationSchema,
    responses(
        (status = 200, description = "Created reservation", body = ReservationSchema),
        (status = 400, description = "Rejected by the reservation service", body = ErrorSchema),
        (status = 503, description = "Reservation service unavailable", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "createReservation"
)]
#[post("/reservations")]
pub async fn create_reservation(
    state: web::Data<HttpState>,
    payload: web::Json<NewReservation>,
) -> ApiResult<web::Json<Reservation>> {
    let reservation = state
        .reservations
        .create_reservation(&payload.into_inner())
        .await?;
    Ok(web::Json(reservation))
}

/// Replace a reservation's fields.
#[utoipa::path(
    put,
    path = "/roomReservations/reservations/{reservationId}",
    params(("reservationId" = i64, Path, description = "Reservation identifier")),
    request_body = NewReservationSchema,
    responses(
        (status = 200, description = "Reservation updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Rejected by the reservation service", body = ErrorSchema),
        (status = 404, description = "Unknown reservation", body = ErrorSchema),
        (status = 503, description = "Reservation service unavailable", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "updateReservation"
)]
#[put("/reservations/{reservation_id}")]
pub async fn update_reservation(
    state: web::Data<HttpState>,
    path: web::Path<ReservationId>,
    payload: web::Json<NewReservation>,
) -> ApiResult<HttpResponse> {
    state
        .reservations
        .update_reservation(path.into_inner(), &payload.into_inner())
        .await?;
    Ok(confirmation("Reservation successfully updated"))
}

/// Delete a reservation.
#[utoipa::path(
    delete,
    path = "/roomReservations/reservations/{reservationId}",
    params(("reservationId" = i64, Path, description = "Reservation identifier")),
    responses(
        (status = 200, description = "Reservation deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown reservation", body = ErrorSchema),
        (status = 503, description = "Reservation service unavailable", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "deleteReservation"
)]
#[delete("/reservations/{reservation_id}")]
pub async fn delete_reservation(
    state: web::Data<HttpState>,
    path: web::Path<ReservationId>,
) -> ApiResult<HttpResponse> {
    state
        .reservations
        .delete_reservation(path.into_inner())
        .await?;
    Ok(confirmation("Reservation successfully deleted"))
}
