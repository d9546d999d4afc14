use chrono::NaiveDate;
use derive_new::new;
use rust_decimal::Decimal;

use crate::model::booking::PaymentStatus;
use crate::model::guest::event::UpdateGuest;
use crate::model::id::{BookingId, GuestId, RoomId};

#[derive(Debug, Clone, new)]
pub struct CreateBooking {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub rate_override: Option<Decimal>,
    pub room_card_deposit: Decimal,
    pub deposit_paid: bool,
    pub payment_method: Option<String>,
    pub payment_status: PaymentStatus,
    pub source: String,
    pub channel: Option<String>,
    pub external_reference: Option<String>,
    pub rate_code: Option<String>,
    pub market_code: Option<String>,
    pub remarks: Option<String>,
}

/// Credits-based booking carries the explicit list of dates the guest's
/// free nights are spent on; nights outside the list are charged.
#[derive(Debug, Clone, new)]
pub struct CreateCreditsBooking {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub complimentary_dates: Vec<NaiveDate>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBooking {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub total_amount: Option<Decimal>,
    pub room_card_deposit: Option<Decimal>,
    pub payment_method: Option<String>,
    pub rate_code: Option<String>,
    pub market_code: Option<String>,
    pub remarks: Option<String>,
}

/// Staff check-in may carry last-minute corrections to the guest record
/// and the booking collected at the desk.
#[derive(Debug, Clone, new)]
pub struct CheckIn {
    pub booking_id: BookingId,
    pub guest_update: Option<UpdateGuest>,
    pub booking_update: Option<UpdateBooking>,
}

#[derive(Debug, Clone, new)]
pub struct CheckOut {
    pub booking_id: BookingId,
    pub late_checkout_penalty: Option<Decimal>,
}

#[derive(Debug, Clone, new)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub reason: Option<String>,
}
