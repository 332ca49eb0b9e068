//! Aggregated room reservation view.
//!
//! ```text
//! GET /roomReservations?date=yyyy-MM-dd
//! ```

use actix_web::{get, web};
use serde::Deserialize;

use crate::domain::RoomReservation;
use crate::domain::ports::RoomReservationsRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RoomReservationSchema};
use crate::inbound::http::state::HttpState;

/// Query string for the aggregated view.
#[derive(Debug, Default, Deserialize)]
pub struct RoomReservationsQueryParams {
    /// Requested date; omitted or empty means today.
    pub date: Option<String>,
}

/// List every room with the reservation and guest holding it.
///
/// Rooms without a reservation carry `null` reservation and guest fields.
#[utoipa::path(
    get,
    path = "/roomReservations",
    params(
        ("date" = Option<String>, Query, description = "Date to stamp on each row (yyyy-MM-dd); defaults to today")
    ),
    responses(
        (status = 200, description = "One entry per room", body = [RoomReservationSchema]),
        (status = 404, description = "A referenced guest does not exist", body = ErrorSchema),
        (status = 500, description = "Inconsistent backend data", body = ErrorSchema),
        (status = 503, description = "A backend service is unavailable", body = ErrorSchema)
    ),
    tags = ["room-reservations"],
    operation_id = "listRoomReservations"
)]
#[get("")]
pub async fn list_room_reservations(
    state: web::Data<HttpState>,
    query: web::Query<RoomReservationsQueryParams>,
) -> ApiResult<web::Json<Vec<RoomReservation>>> {
    let RoomReservationsQueryParams { date } = query.into_inner();
    let entries = state
        .room_reservations
        .list_room_reservations(RoomReservationsRequest { date })
        .await?;
    Ok(web::Json(entries))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    use crate::domain::ports::RoomReservationsRequest;
    use crate::domain::{Error, GuestId, ReservationId, RoomReservation};
    use crate::inbound::http::test_utils::{MockPorts, sample_room, test_app};

    fn populated_entry() -> RoomReservation {
        let mut entry = RoomReservation::vacant(&sample_room(1), "2024-06-01");
        entry.reservation_id = Some(ReservationId::new(10));
        entry.guest_id = Some(GuestId::new(4));
        entry.first_name = Some("Ada".to_owned());
        entry.last_name = Some("Lovelace".to_owned());
        entry
    }

    #[actix_web::test]
    async fn forwards_the_date_and_renders_nulls_for_vacant_rooms() {
        let mut ports = MockPorts::default();
        ports
            .room_reservations
            .expect_list_room_reservations()
            .withf(|request: &RoomReservationsRequest| {
                request.date.as_deref() == Some("2024-06-01")
            })
            .times(1)
            .return_once(|_| {
                Ok(vec![
                    populated_entry(),
                    RoomReservation::vacant(&sample_room(2), "2024-06-01"),
                ])
            });
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::get()
            .uri("/roomReservations?date=2024-06-01")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.pointer("/0/firstName").and_then(Value::as_str),
            Some("Ada")
        );
        assert_eq!(body.pointer("/1/reservationId"), Some(&Value::Null));
        assert_eq!(body.pointer("/1/lastName"), Some(&Value::Null));
    }

    #[actix_web::test]
    async fn missing_date_is_passed_as_absent() {
        let mut ports = MockPorts::default();
        ports
            .room_reservations
            .expect_list_room_reservations()
            .withf(|request: &RoomReservationsRequest| request.date.is_none())
            .times(1)
            .return_once(|_| Ok(Vec::new()));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::get()
            .uri("/roomReservations")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn inconsistent_join_is_a_redacted_server_error() {
        let mut ports = MockPorts::default();
        ports
            .room_reservations
            .expect_list_room_reservations()
            .times(1)
            .return_once(|_| Err(Error::internal("reservation 10 references unknown room 99")));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::get()
            .uri("/roomReservations")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Internal server error")
        );
    }
}
