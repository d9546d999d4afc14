use chrono::NaiveDate;
use garde::Validate;
use rust_decimal::Decimal;

use crate::model::guest::GuestType;
use crate::model::id::LedgerAccountId;

/// New-guest registration form. Field-level rules live here; the
/// duplicate-email check needs the loaded guest list and runs in the
/// step validator instead.
#[derive(Debug, Clone, Default, Validate)]
pub struct GuestForm {
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub ic_number: Option<String>,
    #[garde(skip)]
    pub nationality: Option<String>,
    #[garde(skip)]
    pub guest_type: GuestType,
}

/// Stay details and payment capture, shared by the Details and
/// Dates&Payment steps. Cross-field rules (date ordering, online
/// channel) are step-validator concerns.
#[derive(Debug, Clone, Default)]
pub struct StayForm {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub use_custom_rate: bool,
    pub custom_rate: Option<Decimal>,
    pub room_card_deposit: Decimal,
    pub deposit_paid: bool,
    pub payment_method: Option<String>,
    pub company_account: Option<LedgerAccountId>,
    pub channel: Option<String>,
    pub external_reference: Option<String>,
    pub rate_code: Option<String>,
    pub market_code: Option<String>,
    pub remarks: Option<String>,
}

impl StayForm {
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.check_in_date.zip(self.check_out_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_guest_form_fails_validation() {
        assert!(GuestForm::default().validate(&()).is_err());
    }

    #[test]
    fn complete_guest_form_passes_validation() {
        let form = GuestForm {
            first_name: "Aisyah".into(),
            last_name: "Rahman".into(),
            email: "aisyah@example.com".into(),
            ..GuestForm::default()
        };
        assert!(form.validate(&()).is_ok());
    }

    #[test]
    fn malformed_email_fails_validation() {
        let form = GuestForm {
            first_name: "Aisyah".into(),
            last_name: "Rahman".into(),
            email: "not-an-email".into(),
            ..GuestForm::default()
        };
        assert!(form.validate(&()).is_err());
    }
}
