use chrono::{DateTime, Utc};

use crate::model::id::{BookingId, GuestId, RoomId};
use crate::model::room::RoomStatus;

/// Append-only audit record of a room's status transitions. Read for
/// display only; the backend writes these.
#[derive(Debug, Clone)]
pub struct RoomHistoryEntry {
    pub room_id: RoomId,
    pub changed_from: Option<RoomStatus>,
    pub changed_to: RoomStatus,
    pub booking_id: Option<BookingId>,
    pub guest_id: Option<GuestId>,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
