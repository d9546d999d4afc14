use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::reference::{BookingChannel, MarketCode, PaymentMethod, RateCode};

#[async_trait]
pub trait ReferenceClient: Send + Sync {
    async fn rate_codes(&self) -> AppResult<Vec<RateCode>>;
    async fn market_codes(&self) -> AppResult<Vec<MarketCode>>;
    async fn booking_channels(&self) -> AppResult<Vec<BookingChannel>>;
    async fn payment_methods(&self) -> AppResult<Vec<PaymentMethod>>;
}
