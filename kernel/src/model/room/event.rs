use chrono::NaiveDate;
use derive_new::new;
use rust_decimal::Decimal;

use crate::model::id::{BookingId, GuestId, RoomId, RoomTypeId};
use crate::model::room::RoomStatus;

#[derive(Debug, new)]
pub struct CreateRoom {
    pub room_number: String,
    pub room_type_id: RoomTypeId,
    pub price_per_night: Decimal,
    pub floor: Option<i32>,
    pub building: Option<String>,
    pub max_occupancy: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Default)]
pub struct UpdateRoom {
    pub room_number: Option<String>,
    pub room_type_id: Option<RoomTypeId>,
    pub price_per_night: Option<Decimal>,
    pub available: Option<bool>,
    pub max_occupancy: Option<i32>,
    pub notes: Option<String>,
}

/// Staff-initiated status change, optionally linked to the booking or
/// guest that motivated it so the audit trail can show the connection.
#[derive(Debug, new)]
pub struct UpdateRoomStatus {
    pub room_id: RoomId,
    pub status: RoomStatus,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub reserved_start_date: Option<NaiveDate>,
    pub reserved_end_date: Option<NaiveDate>,
    pub booking_id: Option<BookingId>,
    pub guest_id: Option<GuestId>,
}
