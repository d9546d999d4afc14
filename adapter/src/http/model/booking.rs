use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kernel::model::booking::event::{
    CancelBooking, CreateBooking, CreateCreditsBooking, UpdateBooking,
};
use kernel::model::booking::{Booking, BookingStatus, CreditsBookingOutcome, PaymentStatus};
use kernel::model::id::{BookingId, GuestId, RoomId};
use shared::error::AppError;

/// Booking record. List endpoints join in guest and room display fields;
/// create/update responses carry the bare booking, so those are optional.
#[derive(Debug, Deserialize)]
pub struct BookingRow {
    pub id: i64,
    pub booking_number: String,
    pub guest_id: i64,
    #[serde(default)]
    pub guest_name: Option<String>,
    pub room_id: i64,
    #[serde(default)]
    pub room_number: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub room_rate: Decimal,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub room_card_deposit: Option<Decimal>,
    #[serde(default)]
    pub deposit_paid: Option<bool>,
    #[serde(default)]
    pub is_complimentary: Option<bool>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub external_reference: Option<String>,
    #[serde(default)]
    pub rate_code: Option<String>,
    #[serde(default)]
    pub market_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let status = BookingStatus::parse(&row.status).ok_or_else(|| {
            AppError::ConversionEntityError(format!("unknown booking status `{}`", row.status))
        })?;
        let payment_status = match row.payment_status.as_deref() {
            None => PaymentStatus::Unpaid,
            Some(value) => PaymentStatus::parse(value).ok_or_else(|| {
                AppError::ConversionEntityError(format!("unknown payment status `{value}`"))
            })?,
        };
        Ok(Booking {
            id: BookingId::new(row.id),
            booking_number: row.booking_number,
            guest_id: GuestId::new(row.guest_id),
            guest_name: row.guest_name,
            room_id: RoomId::new(row.room_id),
            room_number: row.room_number,
            check_in_date: row.check_in_date,
            check_out_date: row.check_out_date,
            status,
            payment_status,
            room_rate: row.room_rate,
            total_amount: row.total_amount,
            room_card_deposit: row.room_card_deposit,
            deposit_paid: row.deposit_paid.unwrap_or(false),
            is_complimentary: row.is_complimentary.unwrap_or(false),
            source: row.source,
            channel: row.channel,
            external_reference: row.external_reference,
            rate_code: row.rate_code,
            market_code: row.market_code,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreditsBookingOutcomeRow {
    pub booking_id: i64,
    pub booking_number: String,
    pub total_nights: i32,
    pub complimentary_nights: i32,
    pub complimentary_dates: Vec<String>,
}

impl TryFrom<CreditsBookingOutcomeRow> for CreditsBookingOutcome {
    type Error = AppError;

    fn try_from(row: CreditsBookingOutcomeRow) -> Result<Self, Self::Error> {
        let complimentary_dates = row
            .complimentary_dates
            .iter()
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
                    AppError::ConversionEntityError(format!("invalid complimentary date `{d}`"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CreditsBookingOutcome {
            booking_id: BookingId::new(row.booking_id),
            booking_number: row.booking_number,
            total_nights: row.total_nights,
            complimentary_nights: row.complimentary_nights,
            complimentary_dates,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreateBookingPayload {
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_rate_override: Option<Decimal>,
    pub room_card_deposit: Decimal,
    pub deposit_paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub payment_status: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Channel-issued reference, stored as the booking number for online
    /// reservations; walk-in numbers are generated by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_remarks: Option<String>,
}

impl From<&CreateBooking> for CreateBookingPayload {
    fn from(event: &CreateBooking) -> Self {
        Self {
            guest_id: event.guest_id.raw(),
            room_id: event.room_id.raw(),
            check_in_date: event.check_in_date,
            check_out_date: event.check_out_date,
            room_rate_override: event.rate_override,
            room_card_deposit: event.room_card_deposit,
            deposit_paid: event.deposit_paid,
            payment_method: event.payment_method.clone(),
            payment_status: event.payment_status.as_str().to_string(),
            source: event.source.clone(),
            channel: event.channel.clone(),
            booking_number: event.external_reference.clone(),
            rate_code: event.rate_code.clone(),
            market_code: event.market_code.clone(),
            booking_remarks: event.remarks.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreditsBookingPayload {
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub complimentary_dates: Vec<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl From<&CreateCreditsBooking> for CreditsBookingPayload {
    fn from(event: &CreateCreditsBooking) -> Self {
        Self {
            guest_id: event.guest_id.raw(),
            room_id: event.room_id.raw(),
            check_in_date: event.check_in_date,
            check_out_date: event.check_out_date,
            complimentary_dates: event.complimentary_dates.clone(),
            special_requests: event.special_requests.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookingPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_card_deposit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_checkout_penalty: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_remarks: Option<String>,
}

impl From<&UpdateBooking> for UpdateBookingPayload {
    fn from(event: &UpdateBooking) -> Self {
        Self {
            check_in_date: event.check_in_date,
            check_out_date: event.check_out_date,
            status: event.status.clone(),
            total_amount: event.total_amount,
            room_card_deposit: event.room_card_deposit,
            payment_method: event.payment_method.clone(),
            rate_code: event.rate_code.clone(),
            market_code: event.market_code.clone(),
            late_checkout_penalty: None,
            booking_remarks: event.remarks.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckInPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_update: Option<super::guest::UpdateGuestPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_update: Option<UpdateBookingPayload>,
}

#[derive(Debug, Serialize)]
pub struct CancelBookingPayload {
    pub booking_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&CancelBooking> for CancelBookingPayload {
    fn from(event: &CancelBooking) -> Self {
        Self {
            booking_id: event.booking_id.raw(),
            reason: event.reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_row_without_joined_fields_still_converts() {
        let row: BookingRow = serde_json::from_str(
            r#"{
                "id": 21,
                "booking_number": "BK-20240201-a1b2c3d4",
                "guest_id": 3,
                "room_id": 5,
                "check_in_date": "2024-02-01",
                "check_out_date": "2024-02-05",
                "status": "checked_in",
                "created_at": "2024-02-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        let booking = Booking::try_from(row).unwrap();
        assert_eq!(booking.status, BookingStatus::CheckedIn);
        assert_eq!(booking.payment_status, PaymentStatus::Unpaid);
        assert!(!booking.deposit_paid);
    }

    #[test]
    fn unknown_booking_status_is_rejected() {
        let row: BookingRow = serde_json::from_str(
            r#"{
                "id": 21,
                "booking_number": "BK-1",
                "guest_id": 3,
                "room_id": 5,
                "check_in_date": "2024-02-01",
                "check_out_date": "2024-02-05",
                "status": "teleported",
                "created_at": "2024-02-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(matches!(
            Booking::try_from(row),
            Err(AppError::ConversionEntityError(_))
        ));
    }

    #[test]
    fn credits_outcome_parses_its_date_list() {
        let row: CreditsBookingOutcomeRow = serde_json::from_str(
            r#"{
                "booking_id": 8,
                "booking_number": "COMP-20240110093000",
                "total_nights": 3,
                "complimentary_nights": 3,
                "complimentary_dates": ["2024-01-10", "2024-01-11", "2024-01-12"]
            }"#,
        )
        .unwrap();
        let outcome = CreditsBookingOutcome::try_from(row).unwrap();
        assert_eq!(outcome.complimentary_dates.len(), 3);
        assert_eq!(
            outcome.complimentary_dates[0],
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
    }
}
