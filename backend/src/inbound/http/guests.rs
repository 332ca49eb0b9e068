//! Guest pass-through handlers.
//!
//! ```text
//! GET    /roomReservations/guests
//! POST   /roomReservations/guests
//! GET    /roomReservations/guests/{guestId}
//! PUT    /roomReservations/guests/{guestId}
//! DELETE /roomReservations/guests/{guestId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Guest, GuestId, NewGuest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::confirmation;
use crate::inbound::http::schemas::{ErrorSchema, GuestSchema, NewGuestSchema};
use crate::inbound::http::state::HttpState;

/// List every guest.
#[utoipa::path(
    get,
    path = "/roomReservations/guests",
    responses(
        (status = 200, description = "Guests", body = [GuestSchema]),
        (status = 503, description = "Guest service unavailable", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "listGuests"
)]
#[get("/guests")]
pub async fn list_guests(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Guest>>> {
    let guests = state.guests.list_guests().await?;
    Ok(web::Json(guests))
}

/// Fetch one guest.
#[utoipa::path(
    get,
    path = "/roomReservations/guests/{guestId}",
    params(("guestId" = i64, Path, description = "Guest identifier")),
    responses(
        (status = 200, description = "Guest", body = GuestSchema),
        (status = 404, description = "Unknown guest", body = ErrorSchema),
        (status = 503, description = "Guest service unavailable", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "getGuest"
)]
#[get("/guests/{guest_id}")]
pub async fn get_guest(
    state: web::Data<HttpState>,
    path: web::Path<GuestId>,
) -> ApiResult<web::Json<Guest>> {
    let guest = state.guests.get_guest(path.into_inner()).await?;
    Ok(web::Json(guest))
}

/// Create a guest; responds with the record the guest service stored.
#[utoipa::path(
    post,
    path = "/roomReservations/guests",
    request_body = NewGuestSchema,
    responses(
        (status = 200, description = "Created guest", body = GuestSchema),
        (status = 400, description = "Rejected by the guest service", body = ErrorSchema),
        (status = 503, description = "Guest service unavailable", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "createGuest"
)]
#[post("/guests")]
pub async fn create_guest(
    state: web::Data<HttpState>,
    payload: web::Json<NewGuest>,
) -> ApiResult<web::Json<Guest>> {
    let guest = state.guests.create_guest(&payload.into_inner()).await?;
    Ok(web::Json(guest))
}

/// Replace a guest's fields.
#[utoipa::path(
    put,
    path = "/roomReservations/guests/{guestId}",
    params(("guestId" = i64, Path, description = "Guest identifier")),
    request_body = NewGuestSchema,
    responses(
        (status = 200, description = "Guest updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Rejected by the guest service", body = ErrorSchema),
        (status = 404, description = "Unknown guest", body = ErrorSchema),
        (status = 503, description = "Guest service unavailable", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "updateGuest"
)]
#[put("/guests/{guest_id}")]
pub async fn update_guest(
    state: web::Data<HttpState>,
    path: web::Path<GuestId>,
    payload: web::Json<NewGuest>,
) -> ApiResult<HttpResponse> {
    state
        .guests
        .update_guest(path.into_inner(), &payload.into_inner())
        .await?;
    Ok(confirmation("Guest successfully updated"))
}

/// Delete a guest.
#[utoipa::path(
    delete,
    path = "/roomReservations/guests/{guestId}",
    params(("guestId" = i64, Path, description = "Guest identifier")),
    responses(
        (status = 200, description = "Guest deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown guest", body = ErrorSchema),
        (status = 503, description = "Guest service unavailable", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "deleteGuest"
)]
#[delete("/guests/{guest_id}")]
pub async fn delete_guest(
    state: web::Data<HttpState>,
    path: web::Path<GuestId>,
) -> ApiResult<HttpResponse> {
    state.guests.delete_guest(path.into_inner()).await?;
    Ok(confirmation("Guest successfully deleted"))
}
