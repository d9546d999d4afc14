//! In-memory client stubs and record builders shared by the app tests.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use registry::AppRegistry;
use rust_decimal::Decimal;

use kernel::client::booking::BookingClient;
use kernel::client::guest::GuestClient;
use kernel::client::health::HealthClient;
use kernel::client::ledger::LedgerClient;
use kernel::client::reference::ReferenceClient;
use kernel::client::room::RoomClient;
use kernel::model::booking::event::{
    CancelBooking, CheckIn, CheckOut, CreateBooking, CreateCreditsBooking, UpdateBooking,
};
use kernel::model::booking::{Booking, BookingStatus, CreditsBookingOutcome, PaymentStatus};
use kernel::model::guest::event::{CreateGuest, UpdateGuest};
use kernel::model::guest::{Guest, GuestCreditsSummary, GuestType};
use kernel::model::history::RoomHistoryEntry;
use kernel::model::id::{BookingId, GuestId, RoomId};
use kernel::model::ledger::PostLedgerEntry;
use kernel::model::reference::{BookingChannel, MarketCode, PaymentMethod, RateCode};
use kernel::model::room::event::{CreateRoom, UpdateRoom, UpdateRoomStatus};
use kernel::model::room::{Room, RoomStatus, RoomType};
use shared::error::{AppError, AppResult};

fn backend_rejection() -> AppError {
    AppError::ApiResponseError {
        status: 500,
        message: "stub backend failure".into(),
    }
}

fn not_wired() -> AppError {
    AppError::UnprocessableEntity("endpoint not wired in this test".into())
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn room(id: i64, status: RoomStatus) -> Room {
    Room {
        id: RoomId::new(id),
        room_number: format!("{}", 100 + id),
        room_type: "Standard".into(),
        room_type_id: None,
        price_per_night: Decimal::new(15000, 2),
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

pub fn booking(id: i64, room_id: i64) -> Booking {
    Booking {
        id: BookingId::new(id),
        booking_number: format!("BK-{id}"),
        guest_id: GuestId::new(1),
        guest_name: None,
        room_id: RoomId::new(room_id),
        room_number: None,
        check_in_date: day(2024, 6, 1),
        check_out_date: day(2024, 6, 3),
        status: BookingStatus::Confirmed,
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

pub fn guest(id: i64, email: &str, guest_type: GuestType) -> Guest {
    Guest {
        id: GuestId::new(id),
        full_name: "Siti Aminah".into(),
        email: email.into(),
        phone: Some("+60-12-3456789".into()),
        ic_number: None,
        nationality: Some("Malaysian".into()),
        guest_type,
        complimentary_nights_credit: 3,
        is_active: true,
        created_at: Utc::now(),
    }
}

fn booking_from_event(id: i64, event: &CreateBooking) -> Booking {
    Booking {
        id: BookingId::new(id),
        booking_number: format!("BK-{id}"),
        guest_id: event.guest_id,
        guest_name: None,
        room_id: event.room_id,
        room_number: None,
        check_in_date: event.check_in_date,
        check_out_date: event.check_out_date,
        status: BookingStatus::Confirmed,
        payment_status: event.payment_status,
        room_rate: event.rate_override.unwrap_or(Decimal::new(15000, 2)),
        total_amount: Decimal::new(30000, 2),
        room_card_deposit: Some(event.room_card_deposit),
        deposit_paid: event.deposit_paid,
        is_complimentary: false,
        source: Some(event.source.clone()),
        channel: event.channel.clone(),
        external_reference: event.external_reference.clone(),
        rate_code: event.rate_code.clone(),
        market_code: event.market_code.clone(),
        created_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct StubRoomClient {
    rooms: Mutex<Vec<Room>>,
    fail: AtomicBool,
}

impl StubRoomClient {
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Mutex::new(rooms),
            fail: AtomicBool::new(false),
        }
    }

    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl RoomClient for StubRoomClient {
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        if self.fail.swap(false, Ordering::SeqCst) {
            return Err(backend_rejection());
        }
        Ok(self.rooms.lock().unwrap().clone())
    }

    async fn create(&self, _event: CreateRoom) -> AppResult<Room> {
        Err(not_wired())
    }

    async fn update(&self, _room_id: RoomId, _event: UpdateRoom) -> AppResult<Room> {
        Err(not_wired())
    }

    async fn delete(&self, _room_id: RoomId) -> AppResult<()> {
        Err(not_wired())
    }

    async fn update_status(&self, _event: UpdateRoomStatus) -> AppResult<Room> {
        Err(not_wired())
    }

    async fn find_history(&self, _room_id: RoomId) -> AppResult<Vec<RoomHistoryEntry>> {
        Ok(Vec::new())
    }

    async fn find_room_types(&self) -> AppResult<Vec<RoomType>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
pub struct StubGuestClient {
    pub created: Mutex<Vec<CreateGuest>>,
    next_id: AtomicI64,
    fail_create: AtomicBool,
}

impl StubGuestClient {
    pub fn fail_next_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl GuestClient for StubGuestClient {
    async fn find_all(&self) -> AppResult<Vec<Guest>> {
        Ok(Vec::new())
    }

    async fn create(&self, event: CreateGuest) -> AppResult<Guest> {
        if self.fail_create.swap(false, Ordering::SeqCst) {
            return Err(AppError::ApiResponseError {
                status: 400,
                message: "A guest with this email already exists".into(),
            });
        }
        let id = 1000 + self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Guest {
            id: GuestId::new(id),
            full_name: format!("{} {}", event.first_name, event.last_name),
            email: event.email.clone(),
            phone: event.phone.clone(),
            ic_number: event.ic_number.clone(),
            nationality: event.nationality.clone(),
            guest_type: event.guest_type,
            complimentary_nights_credit: 0,
            is_active: true,
            created_at: Utc::now(),
        };
        self.created.lock().unwrap().push(event);
        Ok(created)
    }

    async fn update(&self, _guest_id: GuestId, _event: UpdateGuest) -> AppResult<Guest> {
        Err(not_wired())
    }

    async fn find_with_credits(&self) -> AppResult<Vec<GuestCreditsSummary>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
pub struct StubBookingClient {
    bookings: Mutex<Vec<Booking>>,
    pub created: Mutex<Vec<CreateBooking>>,
    pub credits: Mutex<Vec<CreateCreditsBooking>>,
    pub checkins: Mutex<Vec<CheckIn>>,
    last_created: Mutex<Option<Booking>>,
    next_id: AtomicI64,
    fail_create: AtomicBool,
}

impl StubBookingClient {
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
            ..Self::default()
        }
    }

    pub fn fail_next_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookingClient for StubBookingClient {
    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn find_by_id(&self, _booking_id: BookingId) -> AppResult<Booking> {
        Err(not_wired())
    }

    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        if self.fail_create.swap(false, Ordering::SeqCst) {
            return Err(AppError::ApiResponseError {
                status: 400,
                message: "Room is already booked for these dates".into(),
            });
        }
        let id = 500 + self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = booking_from_event(id, &event);
        *self.last_created.lock().unwrap() = Some(created.clone());
        self.created.lock().unwrap().push(event);
        Ok(created)
    }

    async fn create_with_credits(
        &self,
        event: CreateCreditsBooking,
    ) -> AppResult<CreditsBookingOutcome> {
        let outcome = CreditsBookingOutcome {
            booking_id: BookingId::new(900),
            booking_number: "COMP-20240110093000".into(),
            total_nights: (event.check_out_date - event.check_in_date).num_days() as i32,
            complimentary_nights: event.complimentary_dates.len() as i32,
            complimentary_dates: event.complimentary_dates.clone(),
        };
        self.credits.lock().unwrap().push(event);
        Ok(outcome)
    }

    async fn update(&self, _booking_id: BookingId, _event: UpdateBooking) -> AppResult<Booking> {
        Err(not_wired())
    }

    async fn check_in(&self, event: CheckIn) -> AppResult<Booking> {
        let mut checked_in = self
            .last_created
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(not_wired)?;
        checked_in.status = BookingStatus::CheckedIn;
        self.checkins.lock().unwrap().push(event);
        Ok(checked_in)
    }

    async fn check_out(&self, _event: CheckOut) -> AppResult<Booking> {
        Err(not_wired())
    }

    async fn cancel(&self, _event: CancelBooking) -> AppResult<()> {
        Err(not_wired())
    }
}

#[derive(Default)]
pub struct StubLedgerClient {
    pub posted: Mutex<Vec<PostLedgerEntry>>,
    fail: AtomicBool,
}

impl StubLedgerClient {
    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl LedgerClient for StubLedgerClient {
    async fn post_entry(&self, event: PostLedgerEntry) -> AppResult<()> {
        if self.fail.swap(false, Ordering::SeqCst) {
            return Err(backend_rejection());
        }
        self.posted.lock().unwrap().push(event);
        Ok(())
    }
}

pub struct StubReferenceClient;

#[async_trait]
impl ReferenceClient for StubReferenceClient {
    async fn rate_codes(&self) -> AppResult<Vec<RateCode>> {
        Ok(Vec::new())
    }

    async fn market_codes(&self) -> AppResult<Vec<MarketCode>> {
        Ok(Vec::new())
    }

    async fn booking_channels(&self) -> AppResult<Vec<BookingChannel>> {
        Ok(Vec::new())
    }

    async fn payment_methods(&self) -> AppResult<Vec<PaymentMethod>> {
        Ok(Vec::new())
    }
}

pub struct StubHealthClient;

#[async_trait]
impl HealthClient for StubHealthClient {
    async fn check(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct RegistryBuilder {
    room: Arc<dyn RoomClient>,
    guest: Arc<dyn GuestClient>,
    booking: Arc<dyn BookingClient>,
    ledger: Arc<dyn LedgerClient>,
}

pub fn registry() -> RegistryBuilder {
    RegistryBuilder {
        room: Arc::new(StubRoomClient::default()),
        guest: Arc::new(StubGuestClient::default()),
        booking: Arc::new(StubBookingClient::default()),
        ledger: Arc::new(StubLedgerClient::default()),
    }
}

impl RegistryBuilder {
    pub fn rooms(self, client: StubRoomClient) -> Self {
        self.rooms_arc(Arc::new(client))
    }

    pub fn rooms_arc(mut self, client: Arc<StubRoomClient>) -> Self {
        self.room = client;
        self
    }

    pub fn guests_arc(mut self, client: Arc<StubGuestClient>) -> Self {
        self.guest = client;
        self
    }

    pub fn bookings(self, client: StubBookingClient) -> Self {
        self.bookings_arc(Arc::new(client))
    }

    pub fn bookings_arc(mut self, client: Arc<StubBookingClient>) -> Self {
        self.booking = client;
        self
    }

    pub fn ledger_arc(mut self, client: Arc<StubLedgerClient>) -> Self {
        self.ledger = client;
        self
    }

    pub fn build(self) -> AppRegistry {
        AppRegistry::with_clients(
            self.room,
            self.guest,
            self.booking,
            self.ledger,
            Arc::new(StubReferenceClient),
            Arc::new(StubHealthClient),
        )
    }
}
