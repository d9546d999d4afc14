use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::guest::{
    event::{CreateGuest, UpdateGuest},
    Guest, GuestCreditsSummary,
};
use crate::model::id::GuestId;

#[async_trait]
pub trait GuestClient: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Guest>>;
    async fn create(&self, event: CreateGuest) -> AppResult<Guest>;
    async fn update(&self, guest_id: GuestId, event: UpdateGuest) -> AppResult<Guest>;
    /// Guests holding complimentary credit nights, for the wizard's
    /// complimentary flow (zero-credit guests are not offered).
    async fn find_with_credits(&self) -> AppResult<Vec<GuestCreditsSummary>>;
}
