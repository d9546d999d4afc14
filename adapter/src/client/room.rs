use async_trait::async_trait;
use derive_new::new;

use kernel::client::room::RoomClient;
use kernel::model::history::RoomHistoryEntry;
use kernel::model::id::RoomId;
use kernel::model::room::{
    event::{CreateRoom, UpdateRoom, UpdateRoomStatus},
    Room, RoomType,
};
use shared::error::AppResult;

use crate::http::model::room::{
    CreateRoomPayload, RoomHistoryRow, RoomRow, RoomStatusPayload, RoomTypeRow, UpdateRoomPayload,
};
use crate::http::HttpClient;

#[derive(new)]
pub struct RoomClientImpl {
    http: HttpClient,
}

#[async_trait]
impl RoomClient for RoomClientImpl {
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = self.http.get("/rooms").await?;
        rows.into_iter().map(Room::try_from).collect()
    }

    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let payload = CreateRoomPayload::from(event);
        let row: RoomRow = self.http.post("/rooms", &payload).await?;
        Room::try_from(row)
    }

    async fn update(&self, room_id: RoomId, event: UpdateRoom) -> AppResult<Room> {
        let payload = UpdateRoomPayload::from(event);
        let row: RoomRow = self
            .http
            .patch(&format!("/rooms/{room_id}"), &payload)
            .await?;
        Room::try_from(row)
    }

    async fn delete(&self, room_id: RoomId) -> AppResult<()> {
        let _: serde_json::Value = self.http.delete(&format!("/rooms/{room_id}")).await?;
        Ok(())
    }

    async fn update_status(&self, event: UpdateRoomStatus) -> AppResult<Room> {
        let payload = RoomStatusPayload::from(&event);
        let row: RoomRow = self
            .http
            .put(&format!("/rooms/{}/status", event.room_id), &payload)
            .await?;
        Room::try_from(row)
    }

    async fn find_history(&self, room_id: RoomId) -> AppResult<Vec<RoomHistoryEntry>> {
        let rows: Vec<RoomHistoryRow> =
            self.http.get(&format!("/rooms/{room_id}/history")).await?;
        rows.into_iter().map(RoomHistoryEntry::try_from).collect()
    }

    async fn find_room_types(&self) -> AppResult<Vec<RoomType>> {
        let rows: Vec<RoomTypeRow> = self.http.get("/room-types").await?;
        Ok(rows.into_iter().map(RoomType::from).collect())
    }
}
