use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kernel::model::history::RoomHistoryEntry;
use kernel::model::id::{BookingId, GuestId, RoomId, RoomTypeId};
use kernel::model::room::event::{CreateRoom, UpdateRoom, UpdateRoomStatus};
use kernel::model::room::{Room, RoomStatus, RoomType};
use shared::error::AppError;

/// Room record as the list endpoint returns it. Unknown statuses are
/// rejected rather than guessed at.
#[derive(Debug, Deserialize)]
pub struct RoomRow {
    pub id: i64,
    pub room_number: String,
    pub room_type: String,
    #[serde(default)]
    pub room_type_id: Option<i64>,
    pub price_per_night: Decimal,
    pub available: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub building: Option<String>,
    pub max_occupancy: i32,
    #[serde(default)]
    pub reserved_start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reserved_end_date: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<RoomRow> for Room {
    type Error = AppError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        let status = match row.status.as_deref() {
            None => RoomStatus::Available,
            Some(value) => RoomStatus::parse(value).ok_or_else(|| {
                AppError::ConversionEntityError(format!("unknown room status `{value}`"))
            })?,
        };
        Ok(Room {
            id: RoomId::new(row.id),
            room_number: row.room_number,
            room_type: row.room_type,
            room_type_id: row.room_type_id.map(RoomTypeId::new),
            price_per_night: row.price_per_night,
            status,
            available: row.available,
            floor: row.floor,
            building: row.building,
            max_occupancy: row.max_occupancy,
            notes: row.description,
            reserved_start_date: row.reserved_start_date.map(|d| d.date_naive()),
            reserved_end_date: row.reserved_end_date.map(|d| d.date_naive()),
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RoomTypeRow {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub base_price: Decimal,
    pub max_occupancy: i32,
    pub is_active: bool,
}

impl From<RoomTypeRow> for RoomType {
    fn from(row: RoomTypeRow) -> Self {
        RoomType {
            id: RoomTypeId::new(row.id),
            name: row.name,
            code: row.code,
            base_price: row.base_price,
            max_occupancy: row.max_occupancy,
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RoomHistoryRow {
    pub room_id: i64,
    #[serde(default)]
    pub changed_from: Option<String>,
    pub changed_to: String,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub guest_id: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl TryFrom<RoomHistoryRow> for RoomHistoryEntry {
    type Error = AppError;

    fn try_from(row: RoomHistoryRow) -> Result<Self, Self::Error> {
        let parse = |value: &str| {
            RoomStatus::parse(value).ok_or_else(|| {
                AppError::ConversionEntityError(format!("unknown room status `{value}`"))
            })
        };
        Ok(RoomHistoryEntry {
            room_id: RoomId::new(row.room_id),
            changed_from: row.changed_from.as_deref().map(parse).transpose()?,
            changed_to: parse(&row.changed_to)?,
            booking_id: row.booking_id.map(BookingId::new),
            guest_id: row.guest_id.map(GuestId::new),
            note: row.note,
            recorded_at: row.recorded_at,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreateRoomPayload {
    pub room_number: String,
    pub room_type_id: i64,
    pub price_per_night: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    pub max_occupancy: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CreateRoom> for CreateRoomPayload {
    fn from(event: CreateRoom) -> Self {
        Self {
            room_number: event.room_number,
            room_type_id: event.room_type_id.raw(),
            price_per_night: event.price_per_night,
            floor: event.floor,
            building: event.building,
            max_occupancy: event.max_occupancy,
            description: event.notes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateRoomPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_occupancy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<UpdateRoom> for UpdateRoomPayload {
    fn from(event: UpdateRoom) -> Self {
        Self {
            room_number: event.room_number,
            room_type_id: event.room_type_id.map(|id| id.raw()),
            price_per_night: event.price_per_night,
            available: event.available,
            max_occupancy: event.max_occupancy,
            description: event.notes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomStatusPayload {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,
}

impl From<&UpdateRoomStatus> for RoomStatusPayload {
    fn from(event: &UpdateRoomStatus) -> Self {
        Self {
            status: event.status.as_str().to_string(),
            reason: event.reason.clone(),
            notes: event.notes.clone(),
            reserved_start_date: event.reserved_start_date,
            reserved_end_date: event.reserved_end_date,
            booking_id: event.booking_id.map(|id| id.raw()),
            guest_id: event.guest_id.map(|id| id.raw()),
        }
    }
}
