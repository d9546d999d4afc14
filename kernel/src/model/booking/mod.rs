use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::model::id::{BookingId, GuestId, RoomId};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    /// Set by the backend's scheduled check-in job rather than by staff.
    AutoCheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
    Released,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::AutoCheckedIn => "auto_checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no_show",
            BookingStatus::Released => "released",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "checked_in" => Some(BookingStatus::CheckedIn),
            "auto_checked_in" => Some(BookingStatus::AutoCheckedIn),
            "checked_out" => Some(BookingStatus::CheckedOut),
            "cancelled" => Some(BookingStatus::Cancelled),
            "no_show" => Some(BookingStatus::NoShow),
            "released" => Some(BookingStatus::Released),
            _ => None,
        }
    }

    /// The guest is physically in the room.
    pub fn occupies_room(self) -> bool {
        matches!(self, BookingStatus::CheckedIn | BookingStatus::AutoCheckedIn)
    }

    /// The booking holds the room for a future or current stay.
    pub fn holds_room(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Pending)
    }

    pub fn is_active(self) -> bool {
        self.occupies_room() || self.holds_room()
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unpaid" => Some(PaymentStatus::Unpaid),
            "partial" => Some(PaymentStatus::Partial),
            "paid" => Some(PaymentStatus::Paid),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }
}

/// Booking as returned by the backend list endpoints, which join in the
/// guest name and room number for display.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub booking_number: String,
    pub guest_id: GuestId,
    pub guest_name: Option<String>,
    pub room_id: RoomId,
    pub room_number: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub room_rate: Decimal,
    pub total_amount: Decimal,
    pub room_card_deposit: Option<Decimal>,
    pub deposit_paid: bool,
    pub is_complimentary: bool,
    pub source: Option<String>,
    pub channel: Option<String>,
    pub external_reference: Option<String>,
    pub rate_code: Option<String>,
    pub market_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }
}

/// Result summary of a credits-based booking; the backend decrements the
/// guest's credit balance itself.
#[derive(Debug, Clone)]
pub struct CreditsBookingOutcome {
    pub booking_id: BookingId,
    pub booking_number: String,
    pub total_nights: i32,
    pub complimentary_nights: i32,
    pub complimentary_dates: Vec<NaiveDate>,
}
