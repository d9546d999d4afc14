use async_trait::async_trait;
use derive_new::new;

use kernel::client::ledger::LedgerClient;
use kernel::model::ledger::PostLedgerEntry;
use shared::error::AppResult;

use crate::http::model::ledger::LedgerEntryPayload;
use crate::http::HttpClient;

#[derive(new)]
pub struct LedgerClientImpl {
    http: HttpClient,
}

#[async_trait]
impl LedgerClient for LedgerClientImpl {
    async fn post_entry(&self, event: PostLedgerEntry) -> AppResult<()> {
        let payload = LedgerEntryPayload::from(&event);
        let _: serde_json::Value = self.http.post("/ledgers", &payload).await?;
        Ok(())
    }
}
