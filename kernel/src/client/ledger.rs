use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::ledger::PostLedgerEntry;

#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn post_entry(&self, event: PostLedgerEntry) -> AppResult<()>;
}
