use chrono::NaiveDate;

use crate::model::booking::Booking;
use crate::model::id::BookingId;
use crate::model::room::{Room, RoomStatus};

/// Status shown on the board, derived from the stored room status plus
/// the room's bookings. Never written back to the room record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStatus {
    pub effective: RoomStatus,
    /// Earliest future-dated confirmed/pending booking, surfaced as an
    /// "upcoming reservation" hint without changing today's status.
    pub upcoming: Option<UpcomingReservation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingReservation {
    pub booking_id: BookingId,
    pub check_in_date: NaiveDate,
}

/// Derives the effective display status of a room.
///
/// Precedence: a checked-in booking wins over everything, a held booking
/// whose check-in has arrived makes the room reserved, housekeeping
/// states pass through, and anything else reads as available.
pub fn resolve(room: &Room, bookings: &[Booking], today: NaiveDate) -> ResolvedStatus {
    let for_room = || bookings.iter().filter(|b| b.room_id == room.id);

    let occupied = for_room().any(|b| b.status.occupies_room());
    let reserved_now = for_room().any(|b| b.status.holds_room() && b.check_in_date <= today);

    let effective = if occupied {
        RoomStatus::Occupied
    } else if reserved_now {
        RoomStatus::Reserved
    } else if room.status.is_housekeeping() {
        room.status
    } else {
        RoomStatus::Available
    };

    let upcoming = for_room()
        .filter(|b| b.status.holds_room() && b.check_in_date > today)
        .min_by_key(|b| b.check_in_date)
        .map(|b| UpcomingReservation {
            booking_id: b.id,
            check_in_date: b.check_in_date,
        });

    ResolvedStatus { effective, upcoming }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::{BookingStatus, PaymentStatus};
    use crate::model::id::{GuestId, RoomId};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn room(status: RoomStatus) -> Room {
        Room {
            id: RoomId::new(1),
            room_number: "101".into(),
            room_type: "Deluxe".into(),
            room_type_id: None,
            price_per_night: Decimal::new(15000, 2),
            status,
            available: true,
            floor: Some(1),
            building: None,
            max_occupancy: 2,
            notes: None,
            reserved_start_date: None,
            reserved_end_date: None,
            updated_at: Utc::now(),
        }
    }

    fn booking(id: i64, status: BookingStatus, check_in: NaiveDate) -> Booking {
        Booking {
            id: BookingId::new(id),
            booking_number: format!("BK-{id}"),
            guest_id: GuestId::new(7),
            guest_name: None,
            room_id: RoomId::new(1),
            room_number: None,
            check_in_date: check_in,
            check_out_date: check_in + chrono::Duration::days(2),
            status,
            payment_status: PaymentStatus::Unpaid,
            room_rate: Decimal::new(15000, 2),
            total_amount: Decimal::new(30000, 2),
            room_card_deposit: None,
            deposit_paid: false,
            is_complimentary: false,
            source: None,
            channel: None,
            external_reference: None,
            rate_code: None,
            market_code: None,
            created_at: Utc::now(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn checked_in_booking_makes_room_occupied() {
        let today = day(2024, 6, 1);
        for status in [BookingStatus::CheckedIn, BookingStatus::AutoCheckedIn] {
            let resolved = resolve(
                &room(RoomStatus::Maintenance),
                &[booking(1, status, today)],
                today,
            );
            assert_eq!(resolved.effective, RoomStatus::Occupied);
        }
    }

    #[test]
    fn held_booking_with_arrived_check_in_makes_room_reserved() {
        let today = day(2024, 6, 1);
        for status in [BookingStatus::Confirmed, BookingStatus::Pending] {
            let resolved = resolve(
                &room(RoomStatus::Available),
                &[booking(1, status, day(2024, 5, 31))],
                today,
            );
            assert_eq!(resolved.effective, RoomStatus::Reserved);
        }
    }

    #[test]
    fn checked_in_wins_over_reserved() {
        let today = day(2024, 6, 1);
        let resolved = resolve(
            &room(RoomStatus::Available),
            &[
                booking(1, BookingStatus::Confirmed, today),
                booking(2, BookingStatus::CheckedIn, today),
            ],
            today,
        );
        assert_eq!(resolved.effective, RoomStatus::Occupied);
    }

    #[test]
    fn housekeeping_statuses_pass_through() {
        let today = day(2024, 6, 1);
        for status in [RoomStatus::Maintenance, RoomStatus::Dirty, RoomStatus::Cleaning] {
            let resolved = resolve(&room(status), &[], today);
            assert_eq!(resolved.effective, status);
        }
    }

    #[test]
    fn anything_else_reads_as_available() {
        let today = day(2024, 6, 1);
        // Stored "reserved" with no booking behind it is not trusted.
        for status in [RoomStatus::Reserved, RoomStatus::Occupied, RoomStatus::OutOfOrder] {
            let resolved = resolve(&room(status), &[], today);
            assert_eq!(resolved.effective, RoomStatus::Available, "stored {status}");
        }
    }

    #[test]
    fn future_booking_only_sets_upcoming_indicator() {
        let today = day(2024, 6, 1);
        let resolved = resolve(
            &room(RoomStatus::Available),
            &[
                booking(1, BookingStatus::Confirmed, day(2024, 6, 10)),
                booking(2, BookingStatus::Confirmed, day(2024, 6, 5)),
            ],
            today,
        );
        assert_eq!(resolved.effective, RoomStatus::Available);
        let upcoming = resolved.upcoming.unwrap();
        assert_eq!(upcoming.booking_id, BookingId::new(2));
        assert_eq!(upcoming.check_in_date, day(2024, 6, 5));
    }

    #[test]
    fn bookings_for_other_rooms_are_ignored() {
        let today = day(2024, 6, 1);
        let mut other = booking(1, BookingStatus::CheckedIn, today);
        other.room_id = RoomId::new(99);
        let resolved = resolve(&room(RoomStatus::Available), &[other], today);
        assert_eq!(resolved.effective, RoomStatus::Available);
    }
}
