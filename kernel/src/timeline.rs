//! Room × date occupancy grid.
//!
//! Real bookings are overlaid as-is. A room whose stored status claims
//! occupation without any booking row behind it gets an explicitly
//! tagged [`TimelineEntry::Inferred`] placeholder, so consumers can
//! never mistake the fabricated span for backend data.

use chrono::NaiveDate;

use crate::model::booking::Booking;
use crate::model::id::RoomId;
use crate::model::room::{Room, RoomStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineWindow {
    Week,
    Fortnight,
    Month,
    TwoMonths,
}

impl TimelineWindow {
    pub fn days(self) -> i64 {
        match self {
            TimelineWindow::Week => 7,
            TimelineWindow::Fortnight => 14,
            TimelineWindow::Month => 30,
            TimelineWindow::TwoMonths => 60,
        }
    }
}

/// Inclusive date span used for inferred occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone)]
pub enum TimelineEntry {
    Real(Booking),
    /// Client-fabricated stand-in for a room marked occupied without a
    /// matching booking record. Not authoritative.
    Inferred { room_id: RoomId, span: DateSpan },
}

impl TimelineEntry {
    /// Whether this entry fills the cell for `date`. Active stays extend
    /// through their checkout day; held bookings release it.
    pub fn covers(&self, date: NaiveDate) -> bool {
        match self {
            TimelineEntry::Real(b) => {
                if b.status.occupies_room() {
                    b.check_in_date <= date && date <= b.check_out_date
                } else {
                    b.check_in_date <= date && date < b.check_out_date
                }
            }
            TimelineEntry::Inferred { span, .. } => span.contains(date),
        }
    }

    pub fn is_inferred(&self) -> bool {
        matches!(self, TimelineEntry::Inferred { .. })
    }

    pub fn label(&self) -> &str {
        match self {
            TimelineEntry::Real(b) => b
                .guest_name
                .as_deref()
                .unwrap_or(b.booking_number.as_str()),
            TimelineEntry::Inferred { .. } => "Manual Occupancy",
        }
    }
}

#[derive(Debug)]
pub struct TimelineRow {
    pub room_id: RoomId,
    pub room_number: String,
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug)]
pub struct TimelineGrid {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<TimelineRow>,
}

impl TimelineGrid {
    pub fn entry_at(&self, room_id: RoomId, date: NaiveDate) -> Option<&TimelineEntry> {
        self.rows
            .iter()
            .find(|r| r.room_id == room_id)?
            .entries
            .iter()
            .find(|e| e.covers(date))
    }
}

pub fn build(
    rooms: &[Room],
    bookings: &[Booking],
    window: TimelineWindow,
    start: NaiveDate,
) -> TimelineGrid {
    let last = start + chrono::Duration::days(window.days() - 1);
    let dates: Vec<NaiveDate> = (0..window.days())
        .filter_map(|offset| start.checked_add_signed(chrono::Duration::days(offset)))
        .collect();

    let rows = rooms
        .iter()
        .map(|room| {
            let mut entries: Vec<TimelineEntry> = bookings
                .iter()
                .filter(|b| b.room_id == room.id && b.status.is_active())
                .filter(|b| overlaps_window(b, start, last))
                .cloned()
                .map(TimelineEntry::Real)
                .collect();

            let has_any_active = bookings
                .iter()
                .any(|b| b.room_id == room.id && b.status.is_active());

            if !has_any_active {
                match room.status {
                    RoomStatus::Occupied => {
                        let span = inferred_span(room, start, last);
                        tracing::warn!(
                            room = %room.room_number,
                            from = %span.start,
                            to = %span.end,
                            "room is marked occupied with no matching booking; showing manual occupancy"
                        );
                        entries.push(TimelineEntry::Inferred {
                            room_id: room.id,
                            span,
                        });
                    }
                    RoomStatus::Reserved => {
                        // Known data inconsistency; surfaced but never
                        // auto-remediated.
                        tracing::warn!(
                            room = %room.room_number,
                            "room is marked reserved but no booking backs it"
                        );
                    }
                    _ => {}
                }
            }

            TimelineRow {
                room_id: room.id,
                room_number: room.room_number.clone(),
                entries,
            }
        })
        .collect();

    TimelineGrid { dates, rows }
}

fn overlaps_window(booking: &Booking, start: NaiveDate, last: NaiveDate) -> bool {
    let effective_last = if booking.status.occupies_room() {
        booking.check_out_date
    } else {
        booking.check_out_date.pred_opt().unwrap_or(booking.check_out_date)
    };
    booking.check_in_date <= last && effective_last >= start
}

fn inferred_span(room: &Room, start: NaiveDate, last: NaiveDate) -> DateSpan {
    match (room.reserved_start_date, room.reserved_end_date) {
        (Some(s), Some(e)) if s <= e => DateSpan { start: s, end: e },
        _ => DateSpan { start, end: last },
    }
}
