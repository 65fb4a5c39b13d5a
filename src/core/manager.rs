//! Facade that coordinates the register, the services, and persistence.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::core::services::{
    BalanceSummary, BookingService, CheckoutSummary, DashboardStats, ExpenseService,
    FinancialReport, GuestService, InvoiceService, PaymentService, ReportService, RoomService,
    ServiceResult,
};
use crate::domain::{
    Booking, BookingDraft, BookingUpdate, Expense, ExpenseDraft, ExpenseUpdate, FinalPayment,
    Guest, GuestDraft, HotelRegister, Invoice, Payment, PaymentDraft, Room, RoomDraft,
    RoomUpdate,
};
use crate::config::Config;
use crate::errors::HotelError;
use crate::storage::{JsonStorage, StorageBackend};

/// Owns the loaded register and an injected storage backend, and exposes one
/// method per operation of the external API. Every mutation is persisted as a
/// whole-register write before it returns, so a failed save never leaves the
/// stored document half-updated.
pub struct HotelManager {
    register: HotelRegister,
    name: String,
    storage: Box<dyn StorageBackend>,
}

impl HotelManager {
    /// Loads the named register, or starts an empty one if the backend has
    /// none yet.
    pub fn open_or_create(
        storage: Box<dyn StorageBackend>,
        name: &str,
    ) -> Result<Self, HotelError> {
        let register = if storage.exists(name) {
            storage.load(name)?
        } else {
            tracing::info!(name, "creating new hotel register");
            let register = HotelRegister::new(name);
            storage.save(&register, name)?;
            register
        };
        Ok(Self {
            register,
            name: name.to_string(),
            storage,
        })
    }

    /// Wires up JSON storage under the app data dir according to `config`,
    /// opening the last used register (or `main`) and seeding the standard
    /// rooms on first run when configured.
    pub fn from_config(config: &Config) -> Result<Self, HotelError> {
        let storage = JsonStorage::new(None, Some(config.backup_retention))?;
        let name = config.last_opened_register.as_deref().unwrap_or("main");
        let mut manager = Self::open_or_create(Box::new(storage), name)?;
        if config.seed_rooms {
            manager.initialize_rooms()?;
        }
        Ok(manager)
    }

    pub fn register(&self) -> &HotelRegister {
        &self.register
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn persist(&self) -> Result<(), HotelError> {
        self.storage.save(&self.register, &self.name)
    }

    pub fn backup(&self, note: Option<&str>) -> Result<(), HotelError> {
        self.storage.backup(&self.register, &self.name, note)
    }

    // Rooms

    pub fn create_room(&mut self, draft: RoomDraft) -> ServiceResult<Room> {
        let room = RoomService::create(&mut self.register, draft)?;
        self.persist()?;
        Ok(room)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.register.rooms
    }

    pub fn room(&self, room_id: Uuid) -> ServiceResult<&Room> {
        self.register
            .room(room_id)
            .ok_or_else(|| HotelError::not_found("Room", room_id))
    }

    pub fn update_room(&mut self, room_id: Uuid, update: RoomUpdate) -> ServiceResult<Room> {
        let room = RoomService::update(&mut self.register, room_id, update)?;
        self.persist()?;
        Ok(room)
    }

    pub fn delete_room(&mut self, room_id: Uuid) -> ServiceResult<Room> {
        let room = RoomService::delete(&mut self.register, room_id)?;
        self.persist()?;
        Ok(room)
    }

    /// Availability probe for one room and date range; 404s on a missing
    /// room rather than reporting it unavailable.
    pub fn room_availability(
        &self,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> ServiceResult<bool> {
        if self.register.room(room_id).is_none() {
            return Err(HotelError::not_found("Room", room_id));
        }
        Ok(BookingService::is_available(
            &self.register,
            room_id,
            check_in,
            check_out,
            None,
        ))
    }

    /// Seeds the standard room set on an empty register; a no-op otherwise.
    pub fn initialize_rooms(&mut self) -> ServiceResult<usize> {
        let seeded = RoomService::seed_default_rooms(&mut self.register);
        if seeded > 0 {
            self.persist()?;
        }
        Ok(seeded)
    }

    // Guests

    pub fn create_guest(&mut self, draft: GuestDraft) -> ServiceResult<Guest> {
        let guest = GuestService::create(&mut self.register, draft)?;
        self.persist()?;
        Ok(guest)
    }

    pub fn guests(&self) -> &[Guest] {
        &self.register.guests
    }

    pub fn guest(&self, guest_id: Uuid) -> ServiceResult<&Guest> {
        self.register
            .guest(guest_id)
            .ok_or_else(|| HotelError::not_found("Guest", guest_id))
    }

    pub fn search_guests(&self, query: &str) -> Vec<&Guest> {
        GuestService::search(&self.register, query)
    }

    pub fn update_guest(&mut self, guest_id: Uuid, draft: GuestDraft) -> ServiceResult<Guest> {
        let guest = GuestService::update(&mut self.register, guest_id, draft)?;
        self.persist()?;
        Ok(guest)
    }

    pub fn delete_guest(&mut self, guest_id: Uuid) -> ServiceResult<Guest> {
        let guest = GuestService::delete(&mut self.register, guest_id)?;
        self.persist()?;
        Ok(guest)
    }

    // Bookings

    pub fn create_booking(&mut self, draft: BookingDraft) -> ServiceResult<Booking> {
        let booking = BookingService::create(&mut self.register, draft)?;
        self.persist()?;
        Ok(booking)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.register.bookings
    }

    pub fn booking(&self, booking_id: Uuid) -> ServiceResult<&Booking> {
        self.register
            .booking(booking_id)
            .ok_or_else(|| HotelError::not_found("Booking", booking_id))
    }

    pub fn bookings_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Booking> {
        BookingService::in_range(&self.register, start, end)
    }

    pub fn update_booking(
        &mut self,
        booking_id: Uuid,
        update: BookingUpdate,
    ) -> ServiceResult<Booking> {
        let booking = BookingService::update(&mut self.register, booking_id, update)?;
        self.persist()?;
        Ok(booking)
    }

    pub fn delete_booking(&mut self, booking_id: Uuid) -> ServiceResult<Booking> {
        let booking = BookingService::delete(&mut self.register, booking_id)?;
        self.persist()?;
        Ok(booking)
    }

    pub fn booking_balance(&self, booking_id: Uuid) -> ServiceResult<BalanceSummary> {
        PaymentService::balance(&self.register, booking_id)
    }

    pub fn checkout(
        &mut self,
        booking_id: Uuid,
        final_payment: Option<FinalPayment>,
    ) -> ServiceResult<CheckoutSummary> {
        let summary = PaymentService::checkout(&mut self.register, booking_id, final_payment)?;
        self.persist()?;
        Ok(summary)
    }

    // Payments

    pub fn record_payment(&mut self, draft: PaymentDraft) -> ServiceResult<Payment> {
        let payment = PaymentService::record(&mut self.register, draft)?;
        self.persist()?;
        Ok(payment)
    }

    pub fn payments(&self) -> &[Payment] {
        &self.register.payments
    }

    pub fn booking_payments(&self, booking_id: Uuid) -> Vec<&Payment> {
        self.register.booking_payments(booking_id)
    }

    // Expenses

    pub fn create_expense(&mut self, draft: ExpenseDraft) -> ServiceResult<Expense> {
        let expense = ExpenseService::create(&mut self.register, draft)?;
        self.persist()?;
        Ok(expense)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.register.expenses
    }

    pub fn expense(&self, expense_id: Uuid) -> ServiceResult<&Expense> {
        self.register
            .expense(expense_id)
            .ok_or_else(|| HotelError::not_found("Expense", expense_id))
    }

    pub fn update_expense(
        &mut self,
        expense_id: Uuid,
        update: ExpenseUpdate,
    ) -> ServiceResult<Expense> {
        let expense = ExpenseService::update(&mut self.register, expense_id, update)?;
        self.persist()?;
        Ok(expense)
    }

    pub fn delete_expense(&mut self, expense_id: Uuid) -> ServiceResult<Expense> {
        let expense = ExpenseService::delete(&mut self.register, expense_id)?;
        self.persist()?;
        Ok(expense)
    }

    // Invoices

    pub fn generate_invoice(&mut self, booking_id: Uuid) -> ServiceResult<Invoice> {
        let invoice = InvoiceService::generate(&mut self.register, booking_id)?;
        self.persist()?;
        Ok(invoice)
    }

    pub fn invoice(&self, invoice_id: Uuid) -> ServiceResult<&Invoice> {
        self.register
            .invoice(invoice_id)
            .ok_or_else(|| HotelError::not_found("Invoice", invoice_id))
    }

    // Reports

    pub fn financial_report(&self, date: NaiveDate) -> FinancialReport {
        ReportService::financial_report(&self.register, date)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        ReportService::dashboard(&self.register, Utc::now().date_naive())
    }
}
