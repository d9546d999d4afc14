use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use registry::AppRegistry;
use tokio::sync::RwLock;

use kernel::model::booking::Booking;
use kernel::model::room::Room;
use shared::error::AppResult;

use crate::board;
use crate::notice::{NoticeLevel, NoticeSink};

/// Last known-good server state. Views read this; a failed reload keeps
/// the previous snapshot in place.
#[derive(Debug)]
pub struct Snapshot {
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    pub refreshed_at: DateTime<Utc>,
}

pub type SharedSnapshot = Arc<RwLock<Option<Snapshot>>>;

/// Periodic full reload of rooms and bookings. Concurrent operators are
/// not coordinated beyond this: everyone converges on the next reload.
/// A simple already-loading flag stops overlapping fetches; in-flight
/// requests are never cancelled.
pub struct RefreshService {
    registry: AppRegistry,
    notices: NoticeSink,
    interval: Duration,
    snapshot: SharedSnapshot,
    loading: Arc<AtomicBool>,
}

impl RefreshService {
    pub fn new(registry: AppRegistry, interval: Duration, notices: NoticeSink) -> Self {
        Self {
            registry,
            notices,
            interval,
            snapshot: Arc::new(RwLock::new(None)),
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn snapshot(&self) -> SharedSnapshot {
        self.snapshot.clone()
    }

    pub async fn run(&self) {
        loop {
            self.tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    pub async fn tick(&self) {
        if self.loading.swap(true, Ordering::SeqCst) {
            tracing::debug!("previous reload still in flight; skipping this tick");
            return;
        }
        let result = self.reload().await;
        self.loading.store(false, Ordering::SeqCst);
        if let Err(e) = result {
            self.notices.push(
                NoticeLevel::Error,
                format!("reload failed: {}", e.operator_message()),
            );
        }
    }

    async fn reload(&self) -> AppResult<()> {
        let rooms = self.registry.room_client().find_all().await?;
        let bookings = self.registry.booking_client().find_all().await?;

        let today = chrono::Local::now().date_naive();
        let summary = board::summarize(&board::build_board(&rooms, &bookings, today));
        tracing::info!(
            total = summary.total_rooms,
            occupied = summary.occupied,
            reserved = summary.reserved,
            available = summary.available,
            "rooms and bookings reloaded"
        );

        *self.snapshot.write().await = Some(Snapshot {
            rooms,
            bookings,
            refreshed_at: Utc::now(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use crate::testing::{self, StubBookingClient, StubRoomClient};
    use kernel::model::room::RoomStatus;
    use std::sync::Arc;

    #[tokio::test]
    async fn tick_publishes_a_snapshot() {
        let registry = testing::registry()
            .rooms(StubRoomClient::with_rooms(vec![testing::room(
                1,
                RoomStatus::Available,
            )]))
            .build();
        let service = RefreshService::new(registry, Duration::from_secs(30), NoticeSink::default());
        service.tick().await;
        let snapshot = service.snapshot();
        let guard = snapshot.read().await;
        assert_eq!(guard.as_ref().unwrap().rooms.len(), 1);
    }

    #[tokio::test]
    async fn failed_reload_keeps_the_previous_snapshot_and_raises_a_notice() {
        let notices = NoticeSink::default();
        let rooms = Arc::new(StubRoomClient::with_rooms(vec![testing::room(
            1,
            RoomStatus::Available,
        )]));
        let registry = testing::registry().rooms_arc(rooms.clone()).build();
        let service = RefreshService::new(registry, Duration::from_secs(30), notices.clone());
        service.tick().await;

        rooms.fail_next();
        service.tick().await;

        let snapshot = service.snapshot();
        let guard = snapshot.read().await;
        assert!(guard.is_some(), "last known-good snapshot must survive");
        let drained = notices.drain();
        assert!(drained
            .iter()
            .any(|n| n.level == NoticeLevel::Error && n.message.contains("reload failed")));
    }

    #[tokio::test]
    async fn bookings_land_in_the_snapshot() {
        let registry = testing::registry()
            .bookings(StubBookingClient::with_bookings(vec![testing::booking(
                5, 1,
            )]))
            .build();
        let service = RefreshService::new(registry, Duration::from_secs(30), NoticeSink::default());
        service.tick().await;
        let snapshot = service.snapshot();
        let guard = snapshot.read().await;
        assert_eq!(guard.as_ref().unwrap().bookings.len(), 1);
    }
}
