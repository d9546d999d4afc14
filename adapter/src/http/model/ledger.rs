use rust_decimal::Decimal;
use serde::Serialize;

use kernel::model::ledger::PostLedgerEntry;

#[derive(Debug, Serialize)]
pub struct LedgerEntryPayload {
    pub account_id: i64,
    pub booking_id: i64,
    pub amount: Decimal,
    pub description: String,
}

impl From<&PostLedgerEntry> for LedgerEntryPayload {
    fn from(event: &PostLedgerEntry) -> Self {
        Self {
            account_id: event.account_id.raw(),
            booking_id: event.booking_id.raw(),
            amount: event.amount,
            description: event.description.clone(),
        }
    }
}
