/// Step tables for the booking wizard. The sequence is fixed once the
/// mode is chosen; reservation types share one sequence and differ only
/// in per-step validation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingMode {
    /// Check the guest in immediately after the booking is created.
    Direct,
    /// Create a booking for a later arrival.
    Reservation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationType {
    WalkIn,
    Online,
    Complimentary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Mode,
    Type,
    Room,
    Guest,
    Details,
    DatesPayment,
    Confirm,
    CheckIn,
}

pub(crate) const MODE_ONLY: &[WizardStep] = &[WizardStep::Mode];

const DIRECT_PRESELECTED: &[WizardStep] = &[
    WizardStep::Mode,
    WizardStep::Guest,
    WizardStep::DatesPayment,
    WizardStep::Confirm,
    WizardStep::CheckIn,
];

const DIRECT_FULL: &[WizardStep] = &[
    WizardStep::Mode,
    WizardStep::Room,
    WizardStep::Guest,
    WizardStep::DatesPayment,
    WizardStep::Confirm,
    WizardStep::CheckIn,
];

const RESERVATION_PRESELECTED: &[WizardStep] = &[
    WizardStep::Mode,
    WizardStep::Type,
    WizardStep::Guest,
    WizardStep::Details,
    WizardStep::Confirm,
];

const RESERVATION_FULL: &[WizardStep] = &[
    WizardStep::Mode,
    WizardStep::Type,
    WizardStep::Room,
    WizardStep::Guest,
    WizardStep::Details,
    WizardStep::Confirm,
];

pub fn step_sequence(mode: BookingMode, needs_room_selection: bool) -> &'static [WizardStep] {
    match (mode, needs_room_selection) {
        (BookingMode::Direct, false) => DIRECT_PRESELECTED,
        (BookingMode::Direct, true) => DIRECT_FULL,
        (BookingMode::Reservation, false) => RESERVATION_PRESELECTED,
        (BookingMode::Reservation, true) => RESERVATION_FULL,
    }
}
