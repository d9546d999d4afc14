use rust_decimal::Decimal;

use crate::model::booking::event::{CreateBooking, CreateCreditsBooking};
use crate::model::booking::PaymentStatus;
use crate::model::guest::{Guest, GuestType};
use crate::wizard::{pricing, ReservationType, WizardState};
use shared::error::{AppError, AppResult};

/// What the app layer should send once the wizard reaches Confirm.
#[derive(Debug)]
pub enum SubmissionPlan {
    WalkIn(CreateBooking),
    Online(CreateBooking),
    Complimentary(CreateCreditsBooking),
}

/// Builds the creation payload for the wizard's effective booking type.
/// The guest is passed in resolved form: for new registrations the app
/// layer creates the guest first and hands back the created record.
pub fn submission_plan(state: &WizardState, guest: &Guest) -> AppResult<SubmissionPlan> {
    let effective = state.effective_type().ok_or_else(|| {
        AppError::UnprocessableEntity("booking mode has not been chosen".into())
    })?;
    let room = state
        .room
        .as_ref()
        .ok_or_else(|| AppError::UnprocessableEntity("no room selected".into()))?;
    let (check_in, check_out) = state
        .stay
        .date_range()
        .ok_or_else(|| AppError::UnprocessableEntity("stay dates are incomplete".into()))?;

    let stay = &state.stay;
    let plan = match effective {
        ReservationType::WalkIn => {
            // Members never pay the room-card deposit, whatever was typed
            // into the form.
            let deposit = match guest.guest_type {
                GuestType::Member => Decimal::ZERO,
                GuestType::Regular => stay.room_card_deposit,
            };
            SubmissionPlan::WalkIn(CreateBooking::new(
                guest.id,
                room.room_id,
                check_in,
                check_out,
                stay.use_custom_rate.then_some(pricing::effective_rate(stay, room)),
                deposit,
                stay.deposit_paid,
                stay.payment_method.clone(),
                PaymentStatus::Unpaid,
                "walk_in".into(),
                None,
                None,
                stay.rate_code.clone(),
                stay.market_code.clone(),
                stay.remarks.clone(),
            ))
        }
        ReservationType::Online => SubmissionPlan::Online(CreateBooking::new(
            guest.id,
            room.room_id,
            check_in,
            check_out,
            stay.use_custom_rate.then_some(pricing::effective_rate(stay, room)),
            Decimal::ZERO,
            false,
            // No payment is collected in the online flow; settlement
            // happens through the channel.
            None,
            PaymentStatus::Unpaid,
            "online".into(),
            stay.channel.clone(),
            stay.external_reference.clone(),
            stay.rate_code.clone(),
            stay.market_code.clone(),
            stay.remarks.clone(),
        )),
        ReservationType::Complimentary => {
            SubmissionPlan::Complimentary(CreateCreditsBooking::new(
                guest.id,
                room.room_id,
                check_in,
                check_out,
                pricing::complimentary_dates(check_in, check_out),
                stay.remarks.clone(),
            ))
        }
    };
    Ok(plan)
}
