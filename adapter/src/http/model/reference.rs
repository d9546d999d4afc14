use serde::Deserialize;

use kernel::model::reference::{BookingChannel, MarketCode, PaymentMethod, RateCode};

#[derive(Debug, Deserialize)]
pub struct CodeRow {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RateCodesResponse {
    pub rate_codes: Vec<CodeRow>,
}

#[derive(Debug, Deserialize)]
pub struct MarketCodesResponse {
    pub market_codes: Vec<CodeRow>,
}

impl From<CodeRow> for RateCode {
    fn from(row: CodeRow) -> Self {
        RateCode {
            code: row.code,
            name: row.name,
        }
    }
}

impl From<CodeRow> for MarketCode {
    fn from(row: CodeRow) -> Self {
        MarketCode {
            code: row.code,
            name: row.name,
        }
    }
}

impl From<CodeRow> for BookingChannel {
    fn from(row: CodeRow) -> Self {
        BookingChannel {
            code: row.code,
            name: row.name,
        }
    }
}

impl From<CodeRow> for PaymentMethod {
    fn from(row: CodeRow) -> Self {
        PaymentMethod {
            code: row.code,
            name: row.name,
        }
    }
}
