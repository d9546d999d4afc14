use derive_new::new;
use rust_decimal::Decimal;

use crate::model::id::{BookingId, LedgerAccountId};

/// Charge posted to a company's ledger account when a stay is billed to
/// the company instead of collected at the desk.
#[derive(Debug, Clone, new)]
pub struct PostLedgerEntry {
    pub account_id: LedgerAccountId,
    pub booking_id: BookingId,
    pub amount: Decimal,
    pub description: String,
}
