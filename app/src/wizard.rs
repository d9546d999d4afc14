//! Drives a booking wizard run: pure state transitions come from
//! `kernel::wizard`, the submission side effects live here.

use chrono::NaiveDate;
use registry::AppRegistry;

use kernel::model::booking::event::{CheckIn, UpdateBooking};
use kernel::model::booking::{Booking, CreditsBookingOutcome};
use kernel::model::guest::event::{CreateGuest, UpdateGuest};
use kernel::model::guest::Guest;
use kernel::model::id::BookingId;
use kernel::model::ledger::PostLedgerEntry;
use kernel::wizard::forms::StayForm;
use kernel::wizard::submission::{submission_plan, SubmissionPlan};
use kernel::wizard::{
    self, BookingMode, GuestSelection, RoomPick, WizardAction, WizardContext, WizardState,
    WizardStep,
};
use shared::error::{AppError, AppResult};

use crate::notice::{NoticeLevel, NoticeSink};

/// Update forms pre-filled from the records created during a direct
/// booking, handed to the Check-In step for last corrections.
#[derive(Debug, Clone)]
pub struct CheckInDrafts {
    pub booking: Booking,
    pub guest: Guest,
    pub guest_update: UpdateGuest,
    pub booking_update: UpdateBooking,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    ReservationCreated(Booking),
    CreditsBookingCreated(CreditsBookingOutcome),
    /// Direct flow: booking exists, wizard advanced to the Check-In step.
    ReadyForCheckIn(BookingId),
}

pub struct WizardSession {
    registry: AppRegistry,
    notices: NoticeSink,
    state: WizardState,
    guests: Vec<Guest>,
    today: NaiveDate,
    // Disables re-submission while a call is in flight; the call itself
    // is never cancelled (closing the dialog does not abort it).
    processing: bool,
    check_in_drafts: Option<CheckInDrafts>,
}

impl WizardSession {
    pub fn new(
        registry: AppRegistry,
        notices: NoticeSink,
        guests: Vec<Guest>,
        today: NaiveDate,
        preselected_room: Option<RoomPick>,
    ) -> Self {
        Self {
            registry,
            notices,
            state: WizardState::start(preselected_room),
            guests,
            today,
            processing: false,
            check_in_drafts: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn check_in_drafts(&self) -> Option<&CheckInDrafts> {
        self.check_in_drafts.as_ref()
    }

    pub fn dispatch(&mut self, action: WizardAction) -> AppResult<()> {
        let ctx = WizardContext {
            today: self.today,
            guests: &self.guests,
        };
        let next = wizard::apply(&self.state, action, &ctx)?;
        self.state = next;
        Ok(())
    }

    /// Submits the wizard from the Confirm step. Reservation flows end
    /// here; the direct flow creates the guest and booking, seeds the
    /// check-in drafts and advances, staying on Confirm if anything
    /// fails so the operator can retry.
    pub async fn submit(&mut self) -> AppResult<SubmitOutcome> {
        if self.processing {
            return Err(AppError::ForbiddenOperation(
                "a submission is already being processed".into(),
            ));
        }
        if self.state.current_step() != WizardStep::Confirm {
            return Err(AppError::ForbiddenOperation(
                "the wizard is not on the confirmation step".into(),
            ));
        }
        {
            let ctx = WizardContext {
                today: self.today,
                guests: &self.guests,
            };
            wizard::validate_step(&self.state, WizardStep::Confirm, &ctx)?;
        }

        self.processing = true;
        let result = self.submit_inner().await;
        self.processing = false;
        if let Err(e) = &result {
            self.notices.push(NoticeLevel::Error, e.operator_message());
        }
        result
    }

    async fn submit_inner(&mut self) -> AppResult<SubmitOutcome> {
        let guest = self.resolve_guest().await?;
        match submission_plan(&self.state, &guest)? {
            SubmissionPlan::Complimentary(event) => {
                let outcome = self
                    .registry
                    .booking_client()
                    .create_with_credits(event)
                    .await?;
                self.notices.push(
                    NoticeLevel::Info,
                    format!(
                        "booking {} created using {} credit night(s)",
                        outcome.booking_number, outcome.complimentary_nights
                    ),
                );
                Ok(SubmitOutcome::CreditsBookingCreated(outcome))
            }
            SubmissionPlan::WalkIn(event) | SubmissionPlan::Online(event) => {
                let booking = self.registry.booking_client().create(event).await?;
                self.post_company_charge(&booking).await;
                if self.state.mode == Some(BookingMode::Direct) {
                    self.check_in_drafts =
                        Some(seed_drafts(&booking, &guest, &self.state.stay));
                    self.dispatch(WizardAction::Next)?;
                    Ok(SubmitOutcome::ReadyForCheckIn(booking.id))
                } else {
                    self.notices.push(
                        NoticeLevel::Info,
                        format!("reservation {} created", booking.booking_number),
                    );
                    Ok(SubmitOutcome::ReservationCreated(booking))
                }
            }
        }
    }

    /// Completes the direct flow from the Check-In step, sending any
    /// desk corrections along with the check-in call.
    pub async fn complete_check_in(
        &mut self,
        guest_update: Option<UpdateGuest>,
        booking_update: Option<UpdateBooking>,
    ) -> AppResult<Booking> {
        if self.processing {
            return Err(AppError::ForbiddenOperation(
                "a submission is already being processed".into(),
            ));
        }
        if self.state.current_step() != WizardStep::CheckIn {
            return Err(AppError::ForbiddenOperation(
                "the wizard is not on the check-in step".into(),
            ));
        }
        let drafts = self.check_in_drafts.clone().ok_or_else(|| {
            AppError::ForbiddenOperation("no created booking is awaiting check-in".into())
        })?;

        self.processing = true;
        let event = CheckIn::new(
            drafts.booking.id,
            Some(guest_update.unwrap_or(drafts.guest_update)),
            Some(booking_update.unwrap_or(drafts.booking_update)),
        );
        let result = self.registry.booking_client().check_in(event).await;
        self.processing = false;

        match result {
            Ok(booking) => {
                self.notices.push(
                    NoticeLevel::Info,
                    format!("guest checked in to booking {}", booking.booking_number),
                );
                Ok(booking)
            }
            Err(e) => {
                self.notices.push(NoticeLevel::Error, e.operator_message());
                Err(e)
            }
        }
    }

    async fn resolve_guest(&mut self) -> AppResult<Guest> {
        match self.state.guest.clone() {
            GuestSelection::Existing(guest) => Ok(guest),
            GuestSelection::New(form) => {
                let event = CreateGuest::new(
                    form.first_name.trim().to_string(),
                    form.last_name.trim().to_string(),
                    form.email.trim().to_string(),
                    form.phone.clone(),
                    form.ic_number.clone(),
                    form.nationality.clone(),
                    form.guest_type,
                );
                let created = self.registry.guest_client().create(event).await?;
                self.guests.push(created.clone());
                self.state.guest = GuestSelection::Existing(created.clone());
                Ok(created)
            }
            GuestSelection::None => Err(AppError::UnprocessableEntity(
                "no guest selected for this booking".into(),
            )),
        }
    }

    // Stays billed to a company also post a ledger charge. There is no
    // transaction across the two calls: if this fails the booking still
    // exists and the operator posts the charge by hand.
    async fn post_company_charge(&self, booking: &Booking) {
        let Some(account) = self.state.stay.company_account else {
            return;
        };
        let event = PostLedgerEntry::new(
            account,
            booking.id,
            booking.total_amount,
            format!("Room charge for booking {}", booking.booking_number),
        );
        if let Err(e) = self.registry.ledger_client().post_entry(event).await {
            self.notices.push(
                NoticeLevel::Warning,
                format!(
                    "booking {} created but the company charge was not posted: {}",
                    booking.booking_number,
                    e.operator_message()
                ),
            );
        }
    }
}

fn seed_drafts(booking: &Booking, guest: &Guest, stay: &StayForm) -> CheckInDrafts {
    CheckInDrafts {
        booking: booking.clone(),
        guest: guest.clone(),
        guest_update: UpdateGuest {
            email: Some(guest.email.clone()),
            phone: guest.phone.clone(),
            ic_number: guest.ic_number.clone(),
            nationality: guest.nationality.clone(),
            ..UpdateGuest::default()
        },
        booking_update: UpdateBooking {
            check_in_date: Some(booking.check_in_date),
            check_out_date: Some(booking.check_out_date),
            payment_method: stay.payment_method.clone(),
            rate_code: stay.rate_code.clone(),
            market_code: stay.market_code.clone(),
            ..UpdateBooking::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, StubBookingClient, StubGuestClient, StubLedgerClient};
    use kernel::model::booking::BookingStatus;
    use kernel::model::guest::GuestType;
    use kernel::model::id::{LedgerAccountId, RoomId};
    use kernel::wizard::{GuestForm, ReservationType};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn pick() -> RoomPick {
        RoomPick {
            room_id: RoomId::new(7),
            room_number: "107".into(),
            room_type_id: None,
            price_per_night: Decimal::new(15000, 2),
        }
    }

    fn new_guest_form() -> GuestForm {
        GuestForm {
            first_name: "Mei".into(),
            last_name: "Ling".into(),
            email: "mei.ling@example.com".into(),
            ..GuestForm::default()
        }
    }

    fn stay() -> StayForm {
        StayForm {
            check_in_date: Some(testing::day(2024, 6, 1)),
            check_out_date: Some(testing::day(2024, 6, 3)),
            room_card_deposit: Decimal::new(5000, 2),
            ..StayForm::default()
        }
    }

    fn session_on_confirm(
        registry: AppRegistry,
        notices: NoticeSink,
        guests: Vec<Guest>,
    ) -> WizardSession {
        let mut session = WizardSession::new(
            registry,
            notices,
            guests,
            testing::day(2024, 6, 1),
            Some(pick()),
        );
        session
            .dispatch(WizardAction::ChooseMode(BookingMode::Direct))
            .unwrap();
        session.dispatch(WizardAction::Next).unwrap();
        session
            .dispatch(WizardAction::EditNewGuest(new_guest_form()))
            .unwrap();
        session.dispatch(WizardAction::Next).unwrap();
        session.dispatch(WizardAction::EditStay(stay())).unwrap();
        session.dispatch(WizardAction::Next).unwrap();
        assert_eq!(session.state().current_step(), WizardStep::Confirm);
        session
    }

    #[tokio::test]
    async fn direct_flow_creates_guest_and_booking_then_advances() {
        let guests = Arc::new(StubGuestClient::default());
        let bookings = Arc::new(StubBookingClient::default());
        let registry = testing::registry()
            .guests_arc(guests.clone())
            .bookings_arc(bookings.clone())
            .build();
        let mut session = session_on_confirm(registry, NoticeSink::default(), vec![]);

        let outcome = session.submit().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::ReadyForCheckIn(_)));
        assert_eq!(session.state().current_step(), WizardStep::CheckIn);

        assert_eq!(guests.created.lock().unwrap().len(), 1);
        let created = bookings.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].source, "walk_in");

        // Drafts are seeded from the created records.
        let drafts = session.check_in_drafts().unwrap();
        assert_eq!(
            drafts.booking_update.check_in_date,
            Some(testing::day(2024, 6, 1))
        );
        assert_eq!(
            drafts.guest_update.email.as_deref(),
            Some("mei.ling@example.com")
        );
    }

    #[tokio::test]
    async fn complete_check_in_sends_the_drafted_updates() {
        let bookings = Arc::new(StubBookingClient::default());
        let registry = testing::registry().bookings_arc(bookings.clone()).build();
        let mut session = session_on_confirm(registry, NoticeSink::default(), vec![]);
        session.submit().await.unwrap();

        let booking = session.complete_check_in(None, None).await.unwrap();
        assert_eq!(booking.status, BookingStatus::CheckedIn);
        let checkins = bookings.checkins.lock().unwrap();
        assert_eq!(checkins.len(), 1);
        assert!(checkins[0].guest_update.is_some());
        assert!(checkins[0].booking_update.is_some());
    }

    #[tokio::test]
    async fn failed_booking_creation_leaves_the_wizard_on_confirm() {
        let bookings = Arc::new(StubBookingClient::default());
        bookings.fail_next_create();
        let notices = NoticeSink::default();
        let registry = testing::registry().bookings_arc(bookings.clone()).build();
        let mut session = session_on_confirm(registry, notices.clone(), vec![]);

        let err = session.submit().await.unwrap_err();
        assert!(matches!(err, AppError::ApiResponseError { .. }));
        assert_eq!(session.state().current_step(), WizardStep::Confirm);
        assert!(session.check_in_drafts().is_none());
        assert!(notices
            .drain()
            .iter()
            .any(|n| n.message.contains("already booked")));
    }

    #[tokio::test]
    async fn failed_guest_creation_aborts_before_the_booking_call() {
        let guests = Arc::new(StubGuestClient::default());
        guests.fail_next_create();
        let bookings = Arc::new(StubBookingClient::default());
        let registry = testing::registry()
            .guests_arc(guests.clone())
            .bookings_arc(bookings.clone())
            .build();
        let mut session = session_on_confirm(registry, NoticeSink::default(), vec![]);

        assert!(session.submit().await.is_err());
        assert_eq!(session.state().current_step(), WizardStep::Confirm);
        assert!(bookings.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_is_refused_off_the_confirm_step() {
        let registry = testing::registry().build();
        let mut session = WizardSession::new(
            registry,
            NoticeSink::default(),
            vec![],
            testing::day(2024, 6, 1),
            Some(pick()),
        );
        assert!(matches!(
            session.submit().await,
            Err(AppError::ForbiddenOperation(_))
        ));
    }

    #[tokio::test]
    async fn complimentary_flow_submits_the_explicit_date_list() {
        let bookings = Arc::new(StubBookingClient::default());
        let registry = testing::registry().bookings_arc(bookings.clone()).build();
        let member = testing::guest(4, "member@example.com", GuestType::Member);
        let mut session = WizardSession::new(
            registry,
            NoticeSink::default(),
            vec![member.clone()],
            testing::day(2024, 1, 10),
            Some(pick()),
        );
        session
            .dispatch(WizardAction::ChooseMode(BookingMode::Reservation))
            .unwrap();
        session.dispatch(WizardAction::Next).unwrap();
        session
            .dispatch(WizardAction::ChooseType(ReservationType::Complimentary))
            .unwrap();
        session.dispatch(WizardAction::Next).unwrap();
        session
            .dispatch(WizardAction::SelectGuest(member))
            .unwrap();
        session.dispatch(WizardAction::Next).unwrap();
        session
            .dispatch(WizardAction::EditStay(StayForm {
                check_in_date: Some(testing::day(2024, 1, 10)),
                check_out_date: Some(testing::day(2024, 1, 13)),
                ..StayForm::default()
            }))
            .unwrap();
        session.dispatch(WizardAction::Next).unwrap();

        let outcome = session.submit().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::CreditsBookingCreated(_)));
        let credits = bookings.credits.lock().unwrap();
        assert_eq!(
            credits[0].complimentary_dates,
            vec![
                testing::day(2024, 1, 10),
                testing::day(2024, 1, 11),
                testing::day(2024, 1, 12),
            ]
        );
    }

    #[tokio::test]
    async fn company_billed_stay_posts_a_ledger_charge() {
        let ledger = Arc::new(StubLedgerClient::default());
        let registry = testing::registry().ledger_arc(ledger.clone()).build();
        let mut session = session_on_confirm(registry, NoticeSink::default(), vec![]);
        let mut billed = stay();
        billed.company_account = Some(LedgerAccountId::new(31));
        session.dispatch(WizardAction::Back).unwrap();
        session.dispatch(WizardAction::EditStay(billed)).unwrap();
        session.dispatch(WizardAction::Next).unwrap();

        session.submit().await.unwrap();
        assert_eq!(ledger.posted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ledger_failure_surfaces_a_warning_but_keeps_the_booking() {
        let ledger = Arc::new(StubLedgerClient::default());
        ledger.fail_next();
        let notices = NoticeSink::default();
        let registry = testing::registry().ledger_arc(ledger.clone()).build();
        let mut session = session_on_confirm(registry, notices.clone(), vec![]);
        let mut billed = stay();
        billed.company_account = Some(LedgerAccountId::new(31));
        session.dispatch(WizardAction::Back).unwrap();
        session.dispatch(WizardAction::EditStay(billed)).unwrap();
        session.dispatch(WizardAction::Next).unwrap();

        let outcome = session.submit().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::ReadyForCheckIn(_)));
        assert!(notices
            .drain()
            .iter()
            .any(|n| n.level == NoticeLevel::Warning
                && n.message.contains("company charge was not posted")));
    }
}
