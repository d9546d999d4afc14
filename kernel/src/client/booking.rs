use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::booking::{
    event::{CancelBooking, CheckIn, CheckOut, CreateBooking, CreateCreditsBooking, UpdateBooking},
    Booking, CreditsBookingOutcome,
};
use crate::model::id::BookingId;

#[async_trait]
pub trait BookingClient: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking>;
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    /// Credits-based booking; the backend validates and decrements the
    /// guest's credit balance.
    async fn create_with_credits(
        &self,
        event: CreateCreditsBooking,
    ) -> AppResult<CreditsBookingOutcome>;
    async fn update(&self, booking_id: BookingId, event: UpdateBooking) -> AppResult<Booking>;
    async fn check_in(&self, event: CheckIn) -> AppResult<Booking>;
    async fn check_out(&self, event: CheckOut) -> AppResult<Booking>;
    async fn cancel(&self, event: CancelBooking) -> AppResult<()>;
}
