use chrono::NaiveDate;

use kernel::model::booking::Booking;
use kernel::model::room::{Room, RoomStatus};
use kernel::resolver::{self, ResolvedStatus};

/// One row of the desk dashboard: the room plus its derived status.
/// The stored status stays visible so operators can spot divergence.
#[derive(Debug)]
pub struct RoomBoardEntry {
    pub room: Room,
    pub resolved: ResolvedStatus,
}

pub fn build_board(rooms: &[Room], bookings: &[Booking], today: NaiveDate) -> Vec<RoomBoardEntry> {
    rooms
        .iter()
        .map(|room| RoomBoardEntry {
            room: room.clone(),
            resolved: resolver::resolve(room, bookings, today),
        })
        .collect()
}

#[derive(Debug, Default, PartialEq)]
pub struct OccupancySummary {
    pub total_rooms: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub available: usize,
    pub cleaning: usize,
    pub dirty: usize,
    pub maintenance: usize,
    pub out_of_order: usize,
    pub occupancy_rate: f64,
}

pub fn summarize(board: &[RoomBoardEntry]) -> OccupancySummary {
    let mut summary = OccupancySummary {
        total_rooms: board.len(),
        ..OccupancySummary::default()
    };
    for entry in board {
        match entry.resolved.effective {
            RoomStatus::Occupied => summary.occupied += 1,
            RoomStatus::Reserved => summary.reserved += 1,
            RoomStatus::Available => summary.available += 1,
            RoomStatus::Cleaning => summary.cleaning += 1,
            RoomStatus::Dirty => summary.dirty += 1,
            RoomStatus::Maintenance => summary.maintenance += 1,
            RoomStatus::OutOfOrder => summary.out_of_order += 1,
        }
    }
    if summary.total_rooms > 0 {
        summary.occupancy_rate = summary.occupied as f64 * 100.0 / summary.total_rooms as f64;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kernel::model::booking::{BookingStatus, PaymentStatus};
    use kernel::model::id::{BookingId, GuestId, RoomId};
    use rust_decimal::Decimal;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(id: i64, status: RoomStatus) -> Room {
        Room {
            id: RoomId::new(id),
            room_number: format!("{}", 100 + id),
            room_type: "Standard".into(),
            room_type_id: None,
            price_per_night: Decimal::new(10000, 2),
            status,
            available: true,
            floor: None,
            building: None,
            max_occupancy: 2,
            notes: None,
            reserved_start_date: None,
            reserved_end_date: None,
            updated_at: Utc::now(),
        }
    }

    fn checked_in_booking(room_id: i64) -> Booking {
        Booking {
            id: BookingId::new(room_id),
            booking_number: format!("BK-{room_id}"),
            guest_id: GuestId::new(1),
            guest_name: None,
            room_id: RoomId::new(room_id),
            room_number: None,
            check_in_date: day(2024, 6, 1),
            check_out_date: day(2024, 6, 3),
            status: BookingStatus::CheckedIn,
            payment_status: PaymentStatus::Paid,
            room_rate: Decimal::new(10000, 2),
            total_amount: Decimal::new(20000, 2),
            room_card_deposit: None,
            deposit_paid: true,
            is_complimentary: false,
            source: None,
            channel: None,
            external_reference: None,
            rate_code: None,
            market_code: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn summary_counts_follow_the_derived_status() {
        let rooms = [
            // Stored available, but a guest is checked in.
            room(1, RoomStatus::Available),
            room(2, RoomStatus::Cleaning),
            room(3, RoomStatus::Available),
            room(4, RoomStatus::Maintenance),
        ];
        let bookings = [checked_in_booking(1)];
        let board = build_board(&rooms, &bookings, day(2024, 6, 1));
        let summary = summarize(&board);
        assert_eq!(summary.total_rooms, 4);
        assert_eq!(summary.occupied, 1);
        assert_eq!(summary.cleaning, 1);
        assert_eq!(summary.available, 1);
        assert_eq!(summary.maintenance, 1);
        assert_eq!(summary.occupancy_rate, 25.0);
    }

    #[test]
    fn empty_board_has_zero_rate() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_rooms, 0);
        assert_eq!(summary.occupancy_rate, 0.0);
    }
}
