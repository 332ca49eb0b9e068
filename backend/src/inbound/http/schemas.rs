//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their shape for utoipa and live in the inbound
//! adapter where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request, or the request forwarded to a backend, was rejected.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backend service could not be reached or failed.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred inside the gateway.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "backend record not found: room 7")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as `upstreamStatus`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Room`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Room, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RoomSchema {
    #[schema(example = 1)]
    room_id: i64,
    #[schema(example = "P1")]
    room_number: String,
    #[schema(example = "1Q")]
    bed_info: String,
    #[schema(example = "Piccadilly")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::NewRoom`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewRoom, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NewRoomSchema {
    #[schema(example = "P1")]
    room_number: String,
    #[schema(example = "1Q")]
    bed_info: String,
    #[schema(example = "Piccadilly")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::Guest`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Guest, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct GuestSchema {
    #[schema(example = 1)]
    guest_id: i64,
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
}

/// OpenAPI schema for [`crate::domain::NewGuest`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewGuest, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NewGuestSchema {
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
}

/// OpenAPI schema for [`crate::domain::Reservation`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Reservation, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReservationSchema {
    #[schema(example = 10)]
    reservation_id: i64,
    #[schema(example = 1)]
    room_id: i64,
    #[schema(example = 1)]
    guest_id: i64,
    /// Night of the stay as stored by the reservation service.
    #[schema(value_type = Option<String>, example = "2024-06-01")]
    date: Option<String>,
}

/// OpenAPI schema for [`crate::domain::NewReservation`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewReservation, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NewReservationSchema {
    #[schema(example = 1)]
    room_id: i64,
    #[schema(example = 1)]
    guest_id: i64,
    /// Night of the stay as stored by the reservation service.
    #[schema(value_type = Option<String>, example = "2024-06-01")]
    date: Option<String>,
}

/// OpenAPI schema for [`crate::domain::RoomReservation`].
///
/// Vacant rooms carry `null` reservation and guest fields.
#[derive(ToSchema)]
#[schema(as = crate::domain::RoomReservation, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RoomReservationSchema {
    #[schema(example = 1)]
    room_id: i64,
    #[schema(example = "P1")]
    room_number: String,
    #[schema(example = "1Q")]
    bed_info: String,
    #[schema(example = "Piccadilly")]
    name: String,
    /// Date the view was requested for.
    #[schema(example = "2024-06-01")]
    date: String,
    #[schema(nullable, example = 10)]
    reservation_id: Option<i64>,
    #[schema(nullable, example = 1)]
    guest_id: Option<i64>,
    #[schema(nullable, example = "Ada")]
    first_name: Option<String>,
    #[schema(nullable, example = "Lovelace")]
    last_name: Option<String>,
}
