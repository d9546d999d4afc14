use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::wizard::forms::StayForm;
use crate::wizard::RoomPick;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayQuote {
    pub nights: i64,
    pub rate: Decimal,
    pub total: Decimal,
}

pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Custom rate when the override is enabled, otherwise the room's
/// configured price per night.
pub fn effective_rate(stay: &StayForm, room: &RoomPick) -> Decimal {
    if stay.use_custom_rate {
        stay.custom_rate.unwrap_or(room.price_per_night)
    } else {
        room.price_per_night
    }
}

/// Quote for a cash stay. Complimentary bookings bypass this and cost
/// nothing; they consume credit nights instead.
pub fn quote(stay: &StayForm, room: &RoomPick) -> Option<StayQuote> {
    let (check_in, check_out) = stay.date_range()?;
    let nights = nights(check_in, check_out);
    if nights <= 0 {
        return None;
    }
    let rate = effective_rate(stay, room);
    Some(StayQuote {
        nights,
        rate,
        total: rate * Decimal::from(nights),
    })
}

/// One credit night is spent per calendar date of the stay: check-in
/// inclusive through the day before check-out.
pub fn complimentary_dates(check_in: NaiveDate, check_out: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut day = check_in;
    while day < check_out {
        dates.push(day);
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    dates
}
