//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every gateway route, the health probes and the schema
//! wrappers from `inbound::http::schemas`, keeping domain types free of
//! utoipa derives. The document backs Swagger UI in debug builds and is
//! printed by the `openapi-dump` binary.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, GuestSchema, NewGuestSchema, NewReservationSchema,
    NewRoomSchema, ReservationSchema, RoomReservationSchema, RoomSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Room reservation gateway",
        description = "Single HTTP surface over the room, guest and reservation services."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::room_reservations::list_room_reservations,
        crate::inbound::http::rooms::list_rooms,
        crate::inbound::http::rooms::get_room,
        crate::inbound::http::rooms::create_room,
        crate::inbound::http::rooms::update_room,
        crate::inbound::http::rooms::delete_room,
        crate::inbound::http::guests::list_guests,
        crate::inbound::http::guests::get_guest,
        crate::inbound::http::guests::create_guest,
        crate::inbound::http::guests::update_guest,
        crate::inbound::http::guests::delete_guest,
        crate::inbound::http::reservations::list_reservations,
        crate::inbound::http::reservations::get_reservation,
        crate::inbound::http::reservations::create_reservation,
        crate::inbound::http::reservations::update_reservation,
        crate::inbound::http::reservations::delete_reservation,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RoomSchema,
        NewRoomSchema,
        GuestSchema,
        NewGuestSchema,
        ReservationSchema,
        NewReservationSchema,
        RoomReservationSchema
    )),
    tags(
        (name = "room-reservations", description = "Rooms joined with their reservations and guests"),
        (name = "rooms", description = "Room service pass-through"),
        (name = "guests", description = "Guest service pass-through"),
        (name = "reservations", description = "Reservation service pass-through"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's paths and schemas.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/roomReservations")]
    #[case("/roomReservations/rooms")]
    #[case("/roomReservations/rooms/{roomId}")]
    #[case("/roomReservations/guests")]
    #[case("/roomReservations/guests/{guestId}")]
    #[case("/roomReservations/reservations")]
    #[case("/roomReservations/reservations/{reservationId}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn room_reservation_schema_has_nullable_guest_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas
            .get("crate.domain.RoomReservation")
            .expect("RoomReservation schema");

        for field in ["roomId", "date", "reservationId", "firstName", "lastName"] {
            assert_object_schema_has_field(schema, field);
        }
    }
}
