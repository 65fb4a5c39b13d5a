//! Invoice assembly: billing snapshots frozen at generation time.

use chrono::Utc;
use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::domain::{HotelRegister, Invoice, Payment};
use crate::errors::HotelError;

pub struct InvoiceService;

impl InvoiceService {
    /// Builds and stores a new invoice for `booking_id`.
    ///
    /// Guest name, room number, and the payment list are copied by value;
    /// payments recorded afterwards never appear on an already-issued
    /// invoice. Each call produces a fresh invoice id.
    pub fn generate(register: &mut HotelRegister, booking_id: Uuid) -> ServiceResult<Invoice> {
        let booking = register
            .booking(booking_id)
            .ok_or_else(|| HotelError::not_found("Booking", booking_id))?
            .clone();
        let guest = register
            .guest(booking.guest_id)
            .ok_or_else(|| HotelError::not_found("Guest", booking.guest_id))?;
        let room = register
            .room(booking.room_id)
            .ok_or_else(|| HotelError::not_found("Room", booking.room_id))?;

        let payments: Vec<Payment> = register
            .booking_payments(booking_id)
            .into_iter()
            .cloned()
            .collect();
        let advance_paid: f64 = payments
            .iter()
            .filter(|payment| payment.is_advance)
            .map(|payment| payment.amount)
            .sum();
        let total_paid: f64 = payments.iter().map(|payment| payment.amount).sum();

        let invoice = Invoice {
            id: Uuid::new_v4(),
            booking_id,
            guest_name: guest.name.clone(),
            room_number: room.room_number.clone(),
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            total_amount: booking.total_amount,
            advance_paid,
            balance_due: booking.total_amount - total_paid,
            payments,
            created_at: Utc::now(),
        };
        tracing::info!(invoice_id = %invoice.id, booking_id = %booking_id, "invoice generated");
        register.add_invoice(invoice.clone());
        Ok(invoice)
    }
}
