use chrono::{DateTime, Utc};

use crate::model::id::{GuestId, RoomTypeId};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuestType {
    #[default]
    Regular,
    /// Members have the room-card deposit waived at booking time.
    Member,
}

impl GuestType {
    pub fn as_str(self) -> &'static str {
        match self {
            GuestType::Regular => "regular",
            GuestType::Member => "member",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "regular" => Some(GuestType::Regular),
            "member" => Some(GuestType::Member),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Guest {
    pub id: GuestId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub ic_number: Option<String>,
    pub nationality: Option<String>,
    pub guest_type: GuestType,
    /// Legacy any-room free nights; newer credits are per room type.
    pub complimentary_nights_credit: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct GuestCredit {
    pub guest_id: GuestId,
    pub room_type_id: RoomTypeId,
    pub room_type_name: String,
    pub room_type_code: String,
    pub nights_available: i32,
}

#[derive(Debug, Clone)]
pub struct GuestCreditsSummary {
    pub guest_id: GuestId,
    pub guest_name: String,
    pub total_nights: i32,
    pub credits_by_room_type: Vec<GuestCredit>,
}

impl GuestCreditsSummary {
    pub fn nights_for(&self, room_type_id: RoomTypeId) -> i32 {
        self.credits_by_room_type
            .iter()
            .find(|c| c.room_type_id == room_type_id)
            .map(|c| c.nights_available)
            .unwrap_or(0)
    }
}
