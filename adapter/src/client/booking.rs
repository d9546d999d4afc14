use async_trait::async_trait;
use derive_new::new;

use kernel::model::booking::event::{
    CancelBooking, CheckIn, CheckOut, CreateBooking, CreateCreditsBooking, UpdateBooking,
};
use kernel::model::booking::{Booking, BookingStatus, CreditsBookingOutcome};
use kernel::client::booking::BookingClient;
use kernel::model::id::BookingId;
use shared::error::AppResult;

use crate::http::model::booking::{
    BookingRow, CancelBookingPayload, CheckInPayload, CreateBookingPayload,
    CreditsBookingOutcomeRow, CreditsBookingPayload, UpdateBookingPayload,
};
use crate::http::model::guest::UpdateGuestPayload;
use crate::http::HttpClient;

#[derive(new)]
pub struct BookingClientImpl {
    http: HttpClient,
}

#[async_trait]
impl BookingClient for BookingClientImpl {
    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = self.http.get("/bookings").await?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking> {
        let row: BookingRow = self.http.get(&format!("/bookings/{booking_id}")).await?;
        Booking::try_from(row)
    }

    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let payload = CreateBookingPayload::from(&event);
        let row: BookingRow = self.http.post("/bookings", &payload).await?;
        Booking::try_from(row)
    }

    async fn create_with_credits(
        &self,
        event: CreateCreditsBooking,
    ) -> AppResult<CreditsBookingOutcome> {
        let payload = CreditsBookingPayload::from(&event);
        let row: CreditsBookingOutcomeRow = self
            .http
            .post("/bookings/book-with-credits", &payload)
            .await?;
        CreditsBookingOutcome::try_from(row)
    }

    async fn update(&self, booking_id: BookingId, event: UpdateBooking) -> AppResult<Booking> {
        let payload = UpdateBookingPayload::from(&event);
        let row: BookingRow = self
            .http
            .patch(&format!("/bookings/{booking_id}"), &payload)
            .await?;
        Booking::try_from(row)
    }

    async fn check_in(&self, event: CheckIn) -> AppResult<Booking> {
        let payload = CheckInPayload {
            guest_update: event.guest_update.as_ref().map(UpdateGuestPayload::from),
            booking_update: event.booking_update.as_ref().map(UpdateBookingPayload::from),
        };
        let row: BookingRow = self
            .http
            .post(&format!("/bookings/{}/checkin", event.booking_id), &payload)
            .await?;
        Booking::try_from(row)
    }

    // Checkout is a status transition on the booking; the backend flips
    // the room to cleaning as part of it.
    async fn check_out(&self, event: CheckOut) -> AppResult<Booking> {
        let payload = UpdateBookingPayload {
            check_in_date: None,
            check_out_date: None,
            status: Some(BookingStatus::CheckedOut.as_str().to_string()),
            total_amount: None,
            room_card_deposit: None,
            payment_method: None,
            rate_code: None,
            market_code: None,
            late_checkout_penalty: event.late_checkout_penalty,
            booking_remarks: None,
        };
        let row: BookingRow = self
            .http
            .patch(&format!("/bookings/{}", event.booking_id), &payload)
            .await?;
        Booking::try_from(row)
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<()> {
        let payload = CancelBookingPayload::from(&event);
        let _: serde_json::Value = self.http.post("/bookings/cancel", &payload).await?;
        Ok(())
    }
}
