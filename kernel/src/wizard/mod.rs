//! Booking wizard state machine.
//!
//! One immutable [`WizardState`] value, advanced by [`apply`] with an
//! action. Step validators re-run on every `Next`; nothing is cached,
//! so clearing a step's data makes the step invalid again. Submission
//! side effects live in the app layer; [`submission::submission_plan`]
//! only builds the payload.

use chrono::NaiveDate;
use garde::Validate;
use rust_decimal::Decimal;

use crate::model::guest::Guest;
use crate::model::id::{RoomId, RoomTypeId};
use shared::error::{AppError, AppResult};

pub mod forms;
pub mod pricing;
pub mod steps;
pub mod submission;

pub use forms::{GuestForm, StayForm};
pub use steps::{step_sequence, BookingMode, ReservationType, WizardStep};

/// Room chosen for the stay, carrying what the wizard needs for pricing
/// and credits without holding the whole room record.
#[derive(Debug, Clone)]
pub struct RoomPick {
    pub room_id: RoomId,
    pub room_number: String,
    pub room_type_id: Option<RoomTypeId>,
    pub price_per_night: Decimal,
}

#[derive(Debug, Clone, Default)]
pub enum GuestSelection {
    #[default]
    None,
    Existing(Guest),
    New(GuestForm),
}

impl GuestSelection {
    pub fn is_none(&self) -> bool {
        matches!(self, GuestSelection::None)
    }
}

#[derive(Debug, Clone)]
pub struct WizardState {
    steps: &'static [WizardStep],
    cursor: usize,
    preselected_room: bool,
    pub mode: Option<BookingMode>,
    pub reservation_type: Option<ReservationType>,
    pub room: Option<RoomPick>,
    pub guest: GuestSelection,
    pub stay: StayForm,
}

impl WizardState {
    pub fn start(preselected_room: Option<RoomPick>) -> Self {
        Self {
            steps: steps::MODE_ONLY,
            cursor: 0,
            preselected_room: preselected_room.is_some(),
            mode: None,
            reservation_type: None,
            room: preselected_room,
            guest: GuestSelection::None,
            stay: StayForm::default(),
        }
    }

    pub fn steps(&self) -> &'static [WizardStep] {
        self.steps
    }

    pub fn current_step(&self) -> WizardStep {
        self.steps[self.cursor]
    }

    pub fn is_terminal(&self) -> bool {
        self.cursor == self.steps.len() - 1 && self.mode.is_some()
    }

    /// Direct bookings behave as walk-ins for submission purposes.
    pub fn effective_type(&self) -> Option<ReservationType> {
        match self.mode? {
            BookingMode::Direct => Some(ReservationType::WalkIn),
            BookingMode::Reservation => self.reservation_type,
        }
    }
}

#[derive(Debug, Clone)]
pub enum WizardAction {
    ChooseMode(BookingMode),
    ChooseType(ReservationType),
    SelectRoom(RoomPick),
    SelectGuest(Guest),
    EditNewGuest(GuestForm),
    ClearGuest,
    EditStay(StayForm),
    Next,
    Back,
}

/// Data the validators need that lives outside the wizard: the current
/// date and the guest list loaded for duplicate-email checks.
#[derive(Debug, Clone, Copy)]
pub struct WizardContext<'a> {
    pub today: NaiveDate,
    pub guests: &'a [Guest],
}

pub fn apply(
    state: &WizardState,
    action: WizardAction,
    ctx: &WizardContext<'_>,
) -> AppResult<WizardState> {
    let mut next = state.clone();
    match action {
        WizardAction::ChooseMode(mode) => {
            require_step(state, WizardStep::Mode)?;
            next.mode = Some(mode);
            if mode == BookingMode::Direct {
                next.reservation_type = None;
            }
            next.steps = step_sequence(mode, !state.preselected_room);
            // Changing flow type must not carry guest data across.
            next.guest = GuestSelection::None;
        }
        WizardAction::ChooseType(rtype) => {
            require_step(state, WizardStep::Type)?;
            next.reservation_type = Some(rtype);
            next.guest = GuestSelection::None;
        }
        WizardAction::SelectRoom(pick) => {
            require_step(state, WizardStep::Room)?;
            next.room = Some(pick);
        }
        WizardAction::SelectGuest(guest) => {
            require_step(state, WizardStep::Guest)?;
            next.guest = GuestSelection::Existing(guest);
        }
        WizardAction::EditNewGuest(form) => {
            require_step(state, WizardStep::Guest)?;
            next.guest = GuestSelection::New(form);
        }
        WizardAction::ClearGuest => {
            require_step(state, WizardStep::Guest)?;
            next.guest = GuestSelection::None;
        }
        WizardAction::EditStay(form) => {
            let step = state.current_step();
            if !matches!(
                step,
                WizardStep::Room | WizardStep::Details | WizardStep::DatesPayment
            ) {
                return Err(AppError::ForbiddenOperation(format!(
                    "stay details cannot be edited on the {step:?} step"
                )));
            }
            next.stay = form;
        }
        WizardAction::Next => {
            validate_step(state, state.current_step(), ctx)?;
            if state.cursor + 1 >= state.steps.len() {
                return Err(AppError::ForbiddenOperation(
                    "the wizard is already on its final step".into(),
                ));
            }
            next.cursor += 1;
        }
        WizardAction::Back => {
            if state.current_step() == WizardStep::CheckIn {
                return Err(AppError::ForbiddenOperation(
                    "cannot go back once check-in has started".into(),
                ));
            }
            next.cursor = state.cursor.saturating_sub(1);
        }
    }
    Ok(next)
}

fn require_step(state: &WizardState, step: WizardStep) -> AppResult<()> {
    if state.current_step() == step {
        Ok(())
    } else {
        Err(AppError::ForbiddenOperation(format!(
            "action belongs to the {step:?} step, wizard is on {:?}",
            state.current_step()
        )))
    }
}

pub fn validate_step(
    state: &WizardState,
    step: WizardStep,
    ctx: &WizardContext<'_>,
) -> AppResult<()> {
    match step {
        WizardStep::Mode => {
            if state.mode.is_none() {
                return Err(AppError::UnprocessableEntity(
                    "select direct check-in or reservation".into(),
                ));
            }
        }
        WizardStep::Type => {
            if state.reservation_type.is_none() {
                return Err(AppError::UnprocessableEntity(
                    "select a reservation type".into(),
                ));
            }
        }
        WizardStep::Room => {
            validate_date_range(state, ctx)?;
            if state.room.is_none() {
                return Err(AppError::UnprocessableEntity("select a room".into()));
            }
        }
        WizardStep::Guest => validate_guest(state, ctx)?,
        WizardStep::Details | WizardStep::DatesPayment => {
            validate_date_range(state, ctx)?;
            if state.effective_type() == Some(ReservationType::Online)
                && state
                    .stay
                    .channel
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or("")
                    .is_empty()
            {
                return Err(AppError::UnprocessableEntity(
                    "online bookings need a booking channel".into(),
                ));
            }
            if state.stay.use_custom_rate {
                match state.stay.custom_rate {
                    Some(rate) if rate > Decimal::ZERO => {}
                    _ => {
                        return Err(AppError::UnprocessableEntity(
                            "enter the overridden nightly rate".into(),
                        ))
                    }
                }
            }
        }
        WizardStep::Confirm => {
            // Re-check everything collected so far; a step whose data was
            // cleared after passing must fail again here.
            for prior in &state.steps[..state.steps.len() - 1] {
                if *prior != WizardStep::Confirm {
                    validate_step(state, *prior, ctx)?;
                }
            }
        }
        WizardStep::CheckIn => {}
    }
    Ok(())
}

fn validate_date_range(state: &WizardState, ctx: &WizardContext<'_>) -> AppResult<()> {
    let Some((check_in, check_out)) = state.stay.date_range() else {
        return Err(AppError::UnprocessableEntity(
            "pick check-in and check-out dates".into(),
        ));
    };
    if check_in < ctx.today {
        return Err(AppError::UnprocessableEntity(
            "check-in date cannot be in the past".into(),
        ));
    }
    if check_out <= check_in {
        return Err(AppError::UnprocessableEntity(
            "check-out date must be after check-in date".into(),
        ));
    }
    Ok(())
}

fn validate_guest(state: &WizardState, ctx: &WizardContext<'_>) -> AppResult<()> {
    match &state.guest {
        GuestSelection::None => Err(AppError::UnprocessableEntity(
            "select a guest or register a new one".into(),
        )),
        GuestSelection::Existing(_) => Ok(()),
        GuestSelection::New(form) => {
            if state.effective_type() == Some(ReservationType::Complimentary) {
                return Err(AppError::UnprocessableEntity(
                    "complimentary stays need an existing guest with credit nights".into(),
                ));
            }
            form.validate(&())?;
            if let Some(existing) = ctx
                .guests
                .iter()
                .find(|g| g.email.eq_ignore_ascii_case(form.email.trim()))
            {
                return Err(AppError::UnprocessableEntity(format!(
                    "a guest with email {} already exists ({})",
                    existing.email, existing.full_name
                )));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::guest::GuestType;
    use crate::model::id::GuestId;
    use chrono::Utc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pick() -> RoomPick {
        RoomPick {
            room_id: RoomId::new(4),
            room_number: "104".into(),
            room_type_id: None,
            price_per_night: Decimal::new(12000, 2),
        }
    }

    fn guest(id: i64, email: &str) -> Guest {
        Guest {
            id: GuestId::new(id),
            full_name: "Existing Guest".into(),
            email: email.into(),
            phone: None,
            ic_number: None,
            nationality: None,
            guest_type: GuestType::Regular,
            complimentary_nights_credit: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn valid_form() -> GuestForm {
        GuestForm {
            first_name: "Mei".into(),
            last_name: "Ling".into(),
            email: "mei.ling@example.com".into(),
            ..GuestForm::default()
        }
    }

    fn valid_stay() -> StayForm {
        StayForm {
            check_in_date: Some(day(2024, 5, 1)),
            check_out_date: Some(day(2024, 5, 3)),
            ..StayForm::default()
        }
    }

    fn ctx<'a>(guests: &'a [Guest]) -> WizardContext<'a> {
        WizardContext {
            today: day(2024, 5, 1),
            guests,
        }
    }

    #[test]
    fn starts_with_only_the_mode_step() {
        let state = WizardState::start(None);
        assert_eq!(state.current_step(), WizardStep::Mode);
        assert_eq!(state.steps(), &[WizardStep::Mode]);
    }

    #[test]
    fn choosing_mode_expands_the_sequence() {
        let guests: Vec<Guest> = Vec::new();
        let state = WizardState::start(Some(pick()));
        let state = apply(
            &state,
            WizardAction::ChooseMode(BookingMode::Direct),
            &ctx(&guests),
        )
        .unwrap();
        assert_eq!(
            state.steps(),
            step_sequence(BookingMode::Direct, false),
        );
    }

    #[test]
    fn next_is_blocked_until_the_step_validates() {
        let guests: Vec<Guest> = Vec::new();
        let c = ctx(&guests);
        let state = WizardState::start(None);
        // No mode selected yet.
        assert!(apply(&state, WizardAction::Next, &c).is_err());
    }

    #[test]
    fn validators_are_re_evaluated_after_data_is_cleared() {
        let guests: Vec<Guest> = Vec::new();
        let c = ctx(&guests);
        let mut state = WizardState::start(Some(pick()));
        state = apply(&state, WizardAction::ChooseMode(BookingMode::Direct), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        assert_eq!(state.current_step(), WizardStep::Guest);
        state = apply(&state, WizardAction::EditNewGuest(valid_form()), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();

        // Go back and wipe the form; the previously-passing step must
        // fail validation again.
        state = apply(&state, WizardAction::Back, &c).unwrap();
        state = apply(&state, WizardAction::EditNewGuest(GuestForm::default()), &c).unwrap();
        assert!(apply(&state, WizardAction::Next, &c).is_err());
    }

    #[test]
    fn duplicate_email_is_rejected_case_insensitively() {
        let guests = [guest(9, "a@x.com")];
        let c = ctx(&guests);
        let mut state = WizardState::start(Some(pick()));
        state = apply(&state, WizardAction::ChooseMode(BookingMode::Direct), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        let mut form = valid_form();
        form.email = "A@X.com".into();
        state = apply(&state, WizardAction::EditNewGuest(form), &c).unwrap();
        let err = apply(&state, WizardAction::Next, &c).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn details_step_rejects_checkout_equal_to_checkin() {
        let guests = [guest(1, "g@x.com")];
        let c = ctx(&guests);
        let mut state = WizardState::start(Some(pick()));
        state = apply(&state, WizardAction::ChooseMode(BookingMode::Direct), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        state = apply(&state, WizardAction::SelectGuest(guests[0].clone()), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        assert_eq!(state.current_step(), WizardStep::DatesPayment);

        let mut stay = valid_stay();
        stay.check_out_date = stay.check_in_date;
        state = apply(&state, WizardAction::EditStay(stay), &c).unwrap();
        assert!(apply(&state, WizardAction::Next, &c).is_err());
    }

    #[test]
    fn details_step_rejects_a_past_check_in() {
        let guests = [guest(1, "g@x.com")];
        let c = ctx(&guests);
        let mut state = WizardState::start(Some(pick()));
        state = apply(&state, WizardAction::ChooseMode(BookingMode::Direct), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        state = apply(&state, WizardAction::SelectGuest(guests[0].clone()), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();

        let stay = StayForm {
            check_in_date: Some(day(2024, 4, 29)),
            check_out_date: Some(day(2024, 4, 30)),
            ..StayForm::default()
        };
        state = apply(&state, WizardAction::EditStay(stay), &c).unwrap();
        assert!(apply(&state, WizardAction::Next, &c).is_err());
    }

    #[test]
    fn online_reservation_requires_a_channel() {
        let guests = [guest(1, "g@x.com")];
        let c = ctx(&guests);
        let mut state = WizardState::start(Some(pick()));
        state = apply(
            &state,
            WizardAction::ChooseMode(BookingMode::Reservation),
            &c,
        )
        .unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        state = apply(
            &state,
            WizardAction::ChooseType(ReservationType::Online),
            &c,
        )
        .unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        state = apply(&state, WizardAction::SelectGuest(guests[0].clone()), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        assert_eq!(state.current_step(), WizardStep::Details);

        state = apply(&state, WizardAction::EditStay(valid_stay()), &c).unwrap();
        assert!(apply(&state, WizardAction::Next, &c).is_err());

        let mut stay = valid_stay();
        stay.channel = Some("booking.com".into());
        state = apply(&state, WizardAction::EditStay(stay), &c).unwrap();
        assert!(apply(&state, WizardAction::Next, &c).is_ok());
    }

    #[test]
    fn changing_mode_resets_guest_selection() {
        let guests = [guest(1, "g@x.com")];
        let c = ctx(&guests);
        let mut state = WizardState::start(Some(pick()));
        state = apply(&state, WizardAction::ChooseMode(BookingMode::Direct), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        state = apply(&state, WizardAction::SelectGuest(guests[0].clone()), &c).unwrap();
        state = apply(&state, WizardAction::Back, &c).unwrap();
        state = apply(
            &state,
            WizardAction::ChooseMode(BookingMode::Reservation),
            &c,
        )
        .unwrap();
        assert!(state.guest.is_none());
    }

    #[test]
    fn changing_type_resets_guest_selection() {
        let guests = [guest(1, "g@x.com")];
        let c = ctx(&guests);
        let mut state = WizardState::start(Some(pick()));
        state = apply(
            &state,
            WizardAction::ChooseMode(BookingMode::Reservation),
            &c,
        )
        .unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        state = apply(
            &state,
            WizardAction::ChooseType(ReservationType::WalkIn),
            &c,
        )
        .unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        state = apply(&state, WizardAction::SelectGuest(guests[0].clone()), &c).unwrap();
        state = apply(&state, WizardAction::Back, &c).unwrap();
        state = apply(
            &state,
            WizardAction::ChooseType(ReservationType::Online),
            &c,
        )
        .unwrap();
        assert!(state.guest.is_none());
    }

    #[test]
    fn back_is_refused_on_the_check_in_step() {
        let guests = [guest(1, "g@x.com")];
        let c = ctx(&guests);
        let mut state = WizardState::start(Some(pick()));
        state = apply(&state, WizardAction::ChooseMode(BookingMode::Direct), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        state = apply(&state, WizardAction::SelectGuest(guests[0].clone()), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        state = apply(&state, WizardAction::EditStay(valid_stay()), &c).unwrap();
        state = apply(&state, WizardAction::Next, &c).unwrap();
        assert_eq!(state.current_step(), WizardStep::Confirm);
        state = apply(&state, WizardAction::Next, &c).unwrap();
        assert_eq!(state.current_step(), WizardStep::CheckIn);
        assert!(state.is_terminal());
        assert!(apply(&state, WizardAction::Back, &c).is_err());
    }
}
