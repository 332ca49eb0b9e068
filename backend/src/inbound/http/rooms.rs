//! Room pass-through handlers.
//!
//! ```text
//! GET    /roomReservations/rooms
//! POST   /roomReservations/rooms
//! GET    /roomReservations/rooms/{roomId}
//! PUT    /roomReservations/rooms/{roomId}
//! DELETE /roomReservations/rooms/{roomId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{NewRoom, Room, RoomId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::confirmation;
use crate::inbound::http::schemas::{ErrorSchema, NewRoomSchema, RoomSchema};
use crate::inbound::http::state::HttpState;

/// List every room.
#[utoipa::path(
    get,
    path = "/roomReservations/rooms",
    responses(
        (status = 200, description = "Rooms", body = [RoomSchema]),
        (status = 503, description = "Room service unavailable", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "listRooms"
)]
#[get("/rooms")]
pub async fn list_rooms(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Room>>> {
    let rooms = state.rooms.list_rooms().await?;
    Ok(web::Json(rooms))
}

/// Fetch one room.
#[utoipa::path(
    get,
    path = "/roomReservations/rooms/{roomId}",
    params(("roomId" = i64, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "Room", body = RoomSchema),
        (status = 404, description = "Unknown room", body = ErrorSchema),
        (status = 503, description = "Room service unavailable", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "getRoom"
)]
#[get("/rooms/{room_id}")]
pub async fn get_room(
    state: web::Data<HttpState>,
    path: web::Path<RoomId>,
) -> ApiResult<web::Json<Room>> {
    let room = state.rooms.get_room(path.into_inner()).await?;
    Ok(web::Json(room))
}

/// Create a room; responds with the record the room service stored.
#[utoipa::path(
    post,
    path = "/roomReservations/rooms",
    request_body = NewRoomSchema,
    responses(
        (status = 200, description = "Created room", body = RoomSchema),
        (status = 400, description = "Rejected by the room service", body = ErrorSchema),
        (status = 503, description = "Room service unavailable", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "createRoom"
)]
#[post("/rooms")]
pub async fn create_room(
    state: web::Data<HttpState>,
    payload: web::Json<NewRoom>,
) -> ApiResult<web::Json<Room>> {
    let room = state.rooms.create_room(&payload.into_inner()).await?;
    Ok(web::Json(room))
}

/// Replace a room's fields.
#[utoipa::path(
    put,
    path = "/roomReservations/rooms/{roomId}",
    params(("roomId" = i64, Path, description = "Room identifier")),
    request_body = NewRoomSchema,
    responses(
        (status = 200, description = "Room updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Rejected by the room service", body = ErrorSchema),
        (status = 404, description = "Unknown room", body = ErrorSchema),
        (status = 503, description = "Room service unavailable", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "updateRoom"
)]
#[put("/rooms/{room_id}")]
pub async fn update_room(
    state: web::Data<HttpState>,
    path: web::Path<RoomId>,
    payload: web::Json<NewRoom>,
) -> ApiResult<HttpResponse> {
    state
        .rooms
        .update_room(path.into_inner(), &payload.into_inner())
        .await?;
    Ok(confirmation("Room successfully updated"))
}

/// Delete a room.
#[utoipa::path(
    delete,
    path = "/roomReservations/rooms/{roomId}",
    params(("roomId" = i64, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "Room deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown room", body = ErrorSchema),
        (status = 503, description = "Room service unavailable", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "deleteRoom"
)]
#[delete("/rooms/{room_id}")]
pub async fn delete_room(
    state: web::Data<HttpState>,
    path: web::Path<RoomId>,
) -> ApiResult<HttpResponse> {
    state.rooms.delete_room(path.into_inner()).await?;
    Ok(confirmation("Room successfully deleted"))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockall::predicate::eq;
    use serde_json::{Value, json};

    use crate::domain::ports::BackendServiceError;
    use crate::domain::{NewRoom, RoomId};
    use crate::inbound::http::test_utils::{MockPorts, sample_room, test_app};

    #[actix_web::test]
    async fn list_rooms_returns_backend_rooms() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_list_rooms()
            .times(1)
            .return_once(|| Ok(vec![sample_room(1), sample_room(2)]));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::get()
            .uri("/roomReservations/rooms")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        let ids: Vec<i64> = body
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|room| room.get("roomId").and_then(Value::as_i64))
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[actix_web::test]
    async fn unknown_room_maps_to_not_found() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_get_room()
            .with(eq(RoomId::new(7)))
            .times(1)
            .return_once(|_| Err(BackendServiceError::not_found("room 7")));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::get()
            .uri("/roomReservations/rooms/7")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
        assert!(body.get("traceId").is_some());
    }

    #[actix_web::test]
    async fn create_room_echoes_the_stored_record() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_create_room()
            .withf(|room: &NewRoom| room.room_number == "P1")
            .times(1)
            .return_once(|_| Ok(sample_room(42)));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::post()
            .uri("/roomReservations/rooms")
            .set_json(json!({"roomNumber": "P1", "bedInfo": "1Q", "name": "Piccadilly"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("roomId").and_then(Value::as_i64), Some(42));
    }

    #[actix_web::test]
    async fn update_room_confirms_in_plain_text() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_update_room()
            .withf(|id, room| *id == RoomId::new(3) && room.name == "Renamed")
            .times(1)
            .return_once(|_, _| Ok(()));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::put()
            .uri("/roomReservations/rooms/3")
            .set_json(json!({"roomNumber": "P3", "bedInfo": "2D", "name": "Renamed"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        assert_eq!(body.as_ref(), b"Room successfully updated");
    }

    #[actix_web::test]
    async fn delete_room_confirms_in_plain_text() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_delete_room()
            .with(eq(RoomId::new(3)))
            .times(1)
            .return_once(|_| Ok(()));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::delete()
            .uri("/roomReservations/rooms/3")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        assert_eq!(body.as_ref(), b"Room successfully deleted");
    }
}
