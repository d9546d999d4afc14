use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::history::RoomHistoryEntry;
use crate::model::id::RoomId;
use crate::model::room::{
    event::{CreateRoom, UpdateRoom, UpdateRoomStatus},
    Room, RoomType,
};

#[async_trait]
pub trait RoomClient: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Room>>;
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
    async fn update(&self, room_id: RoomId, event: UpdateRoom) -> AppResult<Room>;
    async fn delete(&self, room_id: RoomId) -> AppResult<()>;
    /// Staff status change; the backend appends the audit history row.
    async fn update_status(&self, event: UpdateRoomStatus) -> AppResult<Room>;
    async fn find_history(&self, room_id: RoomId) -> AppResult<Vec<RoomHistoryEntry>>;
    async fn find_room_types(&self) -> AppResult<Vec<RoomType>>;
}
