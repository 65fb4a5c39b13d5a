use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    booking::Booking, expense::Expense, guest::Guest, invoice::Invoice, payment::Payment,
    room::Room,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The hotel register: every record collection the property keeps, held as
/// one document. Point lookup, filtered iteration, insert, remove, and count
/// all go through here; persistence of the whole register is the storage
/// backend's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelRegister {
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "HotelRegister::schema_version_default")]
    pub schema_version: u8,
}

impl HotelRegister {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            rooms: Vec::new(),
            guests: Vec::new(),
            bookings: Vec::new(),
            payments: Vec::new(),
            expenses: Vec::new(),
            invoices: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    // Rooms

    pub fn add_room(&mut self, room: Room) -> Uuid {
        let id = room.id;
        self.rooms.push(room);
        self.touch();
        id
    }

    pub fn room(&self, id: Uuid) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn room_mut(&mut self, id: Uuid) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    pub fn room_by_number(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_number == number)
    }

    pub fn remove_room(&mut self, id: Uuid) -> Option<Room> {
        let index = self.rooms.iter().position(|room| room.id == id)?;
        let removed = self.rooms.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    // Guests

    pub fn add_guest(&mut self, guest: Guest) -> Uuid {
        let id = guest.id;
        self.guests.push(guest);
        self.touch();
        id
    }

    pub fn guest(&self, id: Uuid) -> Option<&Guest> {
        self.guests.iter().find(|guest| guest.id == id)
    }

    pub fn guest_mut(&mut self, id: Uuid) -> Option<&mut Guest> {
        self.guests.iter_mut().find(|guest| guest.id == id)
    }

    pub fn guest_by_email(&self, email: &str) -> Option<&Guest> {
        self.guests.iter().find(|guest| guest.email == email)
    }

    pub fn remove_guest(&mut self, id: Uuid) -> Option<Guest> {
        let index = self.guests.iter().position(|guest| guest.id == id)?;
        let removed = self.guests.remove(index);
        self.touch();
        Some(removed)
    }

    // Bookings

    pub fn add_booking(&mut self, booking: Booking) -> Uuid {
        let id = booking.id;
        self.bookings.push(booking);
        self.touch();
        id
    }

    pub fn booking(&self, id: Uuid) -> Option<&Booking> {
        self.bookings.iter().find(|booking| booking.id == id)
    }

    pub fn booking_mut(&mut self, id: Uuid) -> Option<&mut Booking> {
        self.bookings.iter_mut().find(|booking| booking.id == id)
    }

    pub fn remove_booking(&mut self, id: Uuid) -> Option<Booking> {
        let index = self.bookings.iter().position(|booking| booking.id == id)?;
        let removed = self.bookings.remove(index);
        self.touch();
        Some(removed)
    }

    /// Bookings on `room_id` whose status currently occupies the room.
    pub fn blocking_bookings(&self, room_id: Uuid) -> impl Iterator<Item = &Booking> {
        self.bookings
            .iter()
            .filter(move |booking| booking.room_id == room_id && booking.status.blocks_room())
    }

    pub fn guest_has_blocking_booking(&self, guest_id: Uuid) -> bool {
        self.bookings
            .iter()
            .any(|booking| booking.guest_id == guest_id && booking.status.blocks_room())
    }

    // Payments

    pub fn add_payment(&mut self, payment: Payment) -> Uuid {
        let id = payment.id;
        self.payments.push(payment);
        self.touch();
        id
    }

    pub fn payment(&self, id: Uuid) -> Option<&Payment> {
        self.payments.iter().find(|payment| payment.id == id)
    }

    pub fn booking_payments(&self, booking_id: Uuid) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|payment| payment.booking_id == booking_id)
            .collect()
    }

    // Expenses

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        let removed = self.expenses.remove(index);
        self.touch();
        Some(removed)
    }

    // Invoices

    pub fn add_invoice(&mut self, invoice: Invoice) -> Uuid {
        let id = invoice.id;
        self.invoices.push(invoice);
        self.touch();
        id
    }

    pub fn invoice(&self, id: Uuid) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
