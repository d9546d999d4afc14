use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kernel::model::guest::event::{CreateGuest, UpdateGuest};
use kernel::model::guest::{Guest, GuestCredit, GuestCreditsSummary, GuestType};
use kernel::model::id::{GuestId, RoomTypeId};
use shared::error::AppError;

#[derive(Debug, Deserialize)]
pub struct GuestRow {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub ic_number: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub guest_type: Option<String>,
    #[serde(default)]
    pub complimentary_nights_credit: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl TryFrom<GuestRow> for Guest {
    type Error = AppError;

    fn try_from(row: GuestRow) -> Result<Self, Self::Error> {
        let guest_type = match row.guest_type.as_deref() {
            None => GuestType::Regular,
            Some(value) => GuestType::parse(value).ok_or_else(|| {
                AppError::ConversionEntityError(format!("unknown guest type `{value}`"))
            })?,
        };
        Ok(Guest {
            id: GuestId::new(row.id),
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            ic_number: row.ic_number,
            nationality: row.nationality,
            guest_type,
            complimentary_nights_credit: row.complimentary_nights_credit,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct GuestCreditRow {
    pub room_type_id: i64,
    pub room_type_name: String,
    pub room_type_code: String,
    pub nights_available: i32,
}

#[derive(Debug, Deserialize)]
pub struct GuestCreditsSummaryRow {
    pub guest_id: i64,
    pub guest_name: String,
    pub total_nights: i32,
    pub credits_by_room_type: Vec<GuestCreditRow>,
}

impl From<GuestCreditsSummaryRow> for GuestCreditsSummary {
    fn from(row: GuestCreditsSummaryRow) -> Self {
        let guest_id = GuestId::new(row.guest_id);
        GuestCreditsSummary {
            guest_id,
            guest_name: row.guest_name,
            total_nights: row.total_nights,
            credits_by_room_type: row
                .credits_by_room_type
                .into_iter()
                .map(|c| GuestCredit {
                    guest_id,
                    room_type_id: RoomTypeId::new(c.room_type_id),
                    room_type_name: c.room_type_name,
                    room_type_code: c.room_type_code,
                    nights_available: c.nights_available,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateGuestPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ic_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    pub guest_type: String,
}

impl From<&CreateGuest> for CreateGuestPayload {
    fn from(event: &CreateGuest) -> Self {
        Self {
            first_name: event.first_name.clone(),
            last_name: event.last_name.clone(),
            email: event.email.clone(),
            phone: event.phone.clone(),
            ic_number: event.ic_number.clone(),
            nationality: event.nationality.clone(),
            guest_type: event.guest_type.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateGuestPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ic_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl From<&UpdateGuest> for UpdateGuestPayload {
    fn from(event: &UpdateGuest) -> Self {
        Self {
            first_name: event.first_name.clone(),
            last_name: event.last_name.clone(),
            email: event.email.clone(),
            phone: event.phone.clone(),
            ic_number: event.ic_number.clone(),
            nationality: event.nationality.clone(),
            is_active: event.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_row_defaults_to_regular_type() {
        let row: GuestRow = serde_json::from_str(
            r#"{
                "id": 3,
                "full_name": "Tan Wei",
                "email": "tan.wei@example.com",
                "created_at": "2024-04-01T08:00:00Z"
            }"#,
        )
        .unwrap();
        let guest = Guest::try_from(row).unwrap();
        assert_eq!(guest.guest_type, GuestType::Regular);
        assert!(guest.is_active);
    }

    #[test]
    fn member_guest_type_round_trips() {
        let row: GuestRow = serde_json::from_str(
            r#"{
                "id": 3,
                "full_name": "Tan Wei",
                "email": "tan.wei@example.com",
                "guest_type": "member",
                "complimentary_nights_credit": 4,
                "created_at": "2024-04-01T08:00:00Z"
            }"#,
        )
        .unwrap();
        let guest = Guest::try_from(row).unwrap();
        assert_eq!(guest.guest_type, GuestType::Member);
        assert_eq!(guest.complimentary_nights_credit, 4);
    }
}
