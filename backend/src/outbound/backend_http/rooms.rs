//! Room service adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::client::BackendHttpClient;
use crate::domain::ports::{BackendServiceError, RoomDirectory};
use crate::domain::{NewRoom, Room, RoomId};

const ROOMS: &str = "rooms";

/// [`RoomDirectory`] backed by the room service's REST API.
pub struct HttpRoomDirectory {
    http: BackendHttpClient,
}

impl HttpRoomDirectory {
    /// Build an adapter for the room service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: BackendHttpClient::new(base_url, timeout, "room")?,
        })
    }
}

#[async_trait]
impl RoomDirectory for HttpRoomDirectory {
    async fn list_rooms(&self) -> Result<Vec<Room>, BackendServiceError> {
        self.http.get_json(self.http.endpoint(&[ROOMS])?).await
    }

    async fn get_room(&self, room_id: RoomId) -> Result<Room, BackendServiceError> {
        let url = self.http.endpoint(&[ROOMS, &room_id.to_string()])?;
        self.http.get_json(url).await
    }

    async fn create_room(&self, room: &NewRoom) -> Result<Room, BackendServiceError> {
        self.http
            .post_json(self.http.endpoint(&[ROOMS])?, room)
            .await
    }

    async fn update_room(
        &self,
        room_id: RoomId,
        room: &NewRoom,
    ) -> Result<(), BackendServiceError> {
        let url = self.http.endpoint(&[ROOMS, &room_id.to_string()])?;
        self.http.put_json(url, &room.clone().with_id(room_id)).await
    }

    async fn delete_room(&self, room_id: RoomId) -> Result<(), BackendServiceError> {
        let url = self.http.endpoint(&[ROOMS, &room_id.to_string()])?;
        self.http.delete(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn directory(server: &MockServer) -> HttpRoomDirectory {
        HttpRoomDirectory::new(
            Url::parse(&server.base_url()).expect("valid base URL"),
            Duration::from_secs(5),
        )
        .expect("adapter builds")
    }

    #[tokio::test]
    async fn list_rooms_preserves_service_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rooms");
                then.status(200).json_body(json!([
                    {"roomId": 2, "roomNumber": "P2", "bedInfo": "2D", "name": "Oxford"},
                    {"roomId": 1, "roomNumber": "P1", "bedInfo": "1Q", "name": "Piccadilly"}
                ]));
            })
            .await;

        let rooms = directory(&server).list_rooms().await.expect("rooms load");

        let ids: Vec<i64> = rooms.iter().map(|room| room.room_id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn update_sends_the_full_record_with_the_path_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/rooms/9").json_body(json!({
                    "roomId": 9,
                    "roomNumber": "P9",
                    "bedInfo": "1K",
                    "name": "Strand"
                }));
                then.status(200);
            })
            .await;

        directory(&server)
            .update_room(
                RoomId::new(9),
                &NewRoom {
                    room_number: "P9".to_owned(),
                    bed_info: "1K".to_owned(),
                    name: "Strand".to_owned(),
                },
            )
            .await
            .expect("update succeeds");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_room_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rooms/404");
                then.status(404).body("no such room");
            })
            .await;

        let error = directory(&server)
            .get_room(RoomId::new(404))
            .await
            .expect_err("room missing");

        assert!(matches!(error, BackendServiceError::NotFound { .. }));
        assert!(error.to_string().contains("no such room"));
    }
}
