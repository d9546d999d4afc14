use std::sync::Arc;

use adapter::client::booking::BookingClientImpl;
use adapter::client::guest::GuestClientImpl;
use adapter::client::health::HealthClientImpl;
use adapter::client::ledger::LedgerClientImpl;
use adapter::client::reference::ReferenceClientImpl;
use adapter::client::room::RoomClientImpl;
use adapter::http::HttpClient;
use kernel::client::booking::BookingClient;
use kernel::client::guest::GuestClient;
use kernel::client::health::HealthClient;
use kernel::client::ledger::LedgerClient;
use kernel::client::reference::ReferenceClient;
use kernel::client::room::RoomClient;

#[derive(Clone)]
pub struct AppRegistry {
    room_client: Arc<dyn RoomClient>,
    guest_client: Arc<dyn GuestClient>,
    booking_client: Arc<dyn BookingClient>,
    ledger_client: Arc<dyn LedgerClient>,
    reference_client: Arc<dyn ReferenceClient>,
    health_client: Arc<dyn HealthClient>,
}

impl AppRegistry {
    pub fn new(http: HttpClient) -> Self {
        Self::with_clients(
            Arc::new(RoomClientImpl::new(http.clone())),
            Arc::new(GuestClientImpl::new(http.clone())),
            Arc::new(BookingClientImpl::new(http.clone())),
            Arc::new(LedgerClientImpl::new(http.clone())),
            Arc::new(ReferenceClientImpl::new(http.clone())),
            Arc::new(HealthClientImpl::new(http)),
        )
    }

    /// Assembles a registry from explicit clients; tests use this to
    /// substitute in-memory stubs for the HTTP implementations.
    pub fn with_clients(
        room_client: Arc<dyn RoomClient>,
        guest_client: Arc<dyn GuestClient>,
        booking_client: Arc<dyn BookingClient>,
        ledger_client: Arc<dyn LedgerClient>,
        reference_client: Arc<dyn ReferenceClient>,
        health_client: Arc<dyn HealthClient>,
    ) -> Self {
        Self {
            room_client,
            guest_client,
            booking_client,
            ledger_client,
            reference_client,
            health_client,
        }
    }

    pub fn room_client(&self) -> Arc<dyn RoomClient> {
        self.room_client.clone()
    }

    pub fn guest_client(&self) -> Arc<dyn GuestClient> {
        self.guest_client.clone()
    }

    pub fn booking_client(&self) -> Arc<dyn BookingClient> {
        self.booking_client.clone()
    }

    pub fn ledger_client(&self) -> Arc<dyn LedgerClient> {
        self.ledger_client.clone()
    }

    pub fn reference_client(&self) -> Arc<dyn ReferenceClient> {
        self.reference_client.clone()
    }

    pub fn health_client(&self) -> Arc<dyn HealthClient> {
        self.health_client.clone()
    }
}
