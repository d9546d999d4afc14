use async_trait::async_trait;
use derive_new::new;

use kernel::client::guest::GuestClient;
use kernel::model::guest::{
    event::{CreateGuest, UpdateGuest},
    Guest, GuestCreditsSummary,
};
use kernel::model::id::GuestId;
use shared::error::AppResult;

use crate::http::model::guest::{
    CreateGuestPayload, GuestCreditsSummaryRow, GuestRow, UpdateGuestPayload,
};
use crate::http::HttpClient;

#[derive(new)]
pub struct GuestClientImpl {
    http: HttpClient,
}

#[async_trait]
impl GuestClient for GuestClientImpl {
    async fn find_all(&self) -> AppResult<Vec<Guest>> {
        let rows: Vec<GuestRow> = self.http.get("/guests").await?;
        rows.into_iter().map(Guest::try_from).collect()
    }

    async fn create(&self, event: CreateGuest) -> AppResult<Guest> {
        let payload = CreateGuestPayload::from(&event);
        let row: GuestRow = self.http.post("/guests", &payload).await?;
        Guest::try_from(row)
    }

    async fn update(&self, guest_id: GuestId, event: UpdateGuest) -> AppResult<Guest> {
        let payload = UpdateGuestPayload::from(&event);
        let row: GuestRow = self
            .http
            .patch(&format!("/guests/{guest_id}"), &payload)
            .await?;
        Guest::try_from(row)
    }

    async fn find_with_credits(&self) -> AppResult<Vec<GuestCreditsSummary>> {
        let rows: Vec<GuestCreditsSummaryRow> = self.http.get("/guests/credits").await?;
        Ok(rows.into_iter().map(GuestCreditsSummary::from).collect())
    }
}
