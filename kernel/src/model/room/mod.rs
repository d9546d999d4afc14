use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::model::id::{RoomId, RoomTypeId};

pub mod event;

/// Status as stored by the backend. The status shown to operators is
/// derived from this plus the room's active bookings; see `resolver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomStatus {
    Available,
    Occupied,
    Reserved,
    Cleaning,
    Dirty,
    Maintenance,
    OutOfOrder,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Reserved => "reserved",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Dirty => "dirty",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::OutOfOrder => "out_of_order",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(RoomStatus::Available),
            "occupied" => Some(RoomStatus::Occupied),
            "reserved" => Some(RoomStatus::Reserved),
            "cleaning" => Some(RoomStatus::Cleaning),
            "dirty" => Some(RoomStatus::Dirty),
            "maintenance" => Some(RoomStatus::Maintenance),
            "out_of_order" => Some(RoomStatus::OutOfOrder),
            _ => None,
        }
    }

    /// Housekeeping states survive status derivation when no booking
    /// claims the room.
    pub fn is_housekeeping(self) -> bool {
        matches!(
            self,
            RoomStatus::Maintenance | RoomStatus::Dirty | RoomStatus::Cleaning
        )
    }

    pub fn blocks_sale(self) -> bool {
        matches!(self, RoomStatus::Maintenance | RoomStatus::OutOfOrder)
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub room_number: String,
    pub room_type: String,
    pub room_type_id: Option<RoomTypeId>,
    pub price_per_night: Decimal,
    pub status: RoomStatus,
    pub available: bool,
    pub floor: Option<i32>,
    pub building: Option<String>,
    pub max_occupancy: i32,
    pub notes: Option<String>,
    // Date pair set by staff when a room is flagged reserved by hand;
    // the timeline falls back to it when no booking row exists.
    pub reserved_start_date: Option<NaiveDate>,
    pub reserved_end_date: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RoomType {
    pub id: RoomTypeId,
    pub name: String,
    pub code: String,
    pub base_price: Decimal,
    pub max_occupancy: i32,
    pub is_active: bool,
}
