use async_trait::async_trait;
use derive_new::new;

use kernel::client::reference::ReferenceClient;
use kernel::model::reference::{BookingChannel, MarketCode, PaymentMethod, RateCode};
use shared::error::AppResult;

use crate::http::model::reference::{CodeRow, MarketCodesResponse, RateCodesResponse};
use crate::http::HttpClient;

#[derive(new)]
pub struct ReferenceClientImpl {
    http: HttpClient,
}

#[async_trait]
impl ReferenceClient for ReferenceClientImpl {
    async fn rate_codes(&self) -> AppResult<Vec<RateCode>> {
        let res: RateCodesResponse = self.http.get("/rate-codes").await?;
        Ok(res.rate_codes.into_iter().map(RateCode::from).collect())
    }

    async fn market_codes(&self) -> AppResult<Vec<MarketCode>> {
        let res: MarketCodesResponse = self.http.get("/market-codes").await?;
        Ok(res.market_codes.into_iter().map(MarketCode::from).collect())
    }

    async fn booking_channels(&self) -> AppResult<Vec<BookingChannel>> {
        let rows: Vec<CodeRow> = self.http.get("/booking-channels").await?;
        Ok(rows.into_iter().map(BookingChannel::from).collect())
    }

    async fn payment_methods(&self) -> AppResult<Vec<PaymentMethod>> {
        let rows: Vec<CodeRow> = self.http.get("/payment-methods").await?;
        Ok(rows.into_iter().map(PaymentMethod::from).collect())
    }
}
