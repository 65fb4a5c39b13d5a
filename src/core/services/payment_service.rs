//! Payment ledger, balance arithmetic, and the checkout coordinator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::services::{BookingService, InvoiceService, ServiceResult};
use crate::domain::{
    BookingStatus, FinalPayment, HotelRegister, Payment, PaymentDraft,
};
use crate::errors::HotelError;

/// Paid/owed figures for one booking, with the payments behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub booking_id: Uuid,
    pub total_amount: f64,
    pub total_paid: f64,
    /// May be negative when a booking was deliberately overpaid.
    pub balance_due: f64,
    pub payments: Vec<Payment>,
}

/// Outcome of a completed checkout, with post-payment figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub booking_id: Uuid,
    pub total_amount: f64,
    pub total_paid: f64,
    pub balance_due: f64,
    pub invoice_id: Uuid,
}

/// Append-only ledger of payments against bookings.
pub struct PaymentService;

impl PaymentService {
    /// Appends a completed payment. Overshooting the outstanding balance is
    /// allowed here; only the checkout settlement is capped.
    pub fn record(register: &mut HotelRegister, draft: PaymentDraft) -> ServiceResult<Payment> {
        if register.booking(draft.booking_id).is_none() {
            return Err(HotelError::not_found("Booking", draft.booking_id));
        }
        if draft.amount < 0.0 {
            return Err(HotelError::Validation(
                "payment amount must be non-negative".into(),
            ));
        }
        let payment = Payment::new(draft);
        tracing::info!(
            payment_id = %payment.id,
            booking_id = %payment.booking_id,
            amount = payment.amount,
            is_advance = payment.is_advance,
            "payment recorded"
        );
        register.add_payment(payment.clone());
        Ok(payment)
    }

    /// `balance_due = total_amount - sum(payments)`, unclamped.
    pub fn balance(register: &HotelRegister, booking_id: Uuid) -> ServiceResult<BalanceSummary> {
        let booking = register
            .booking(booking_id)
            .ok_or_else(|| HotelError::not_found("Booking", booking_id))?;
        let payments: Vec<Payment> = register
            .booking_payments(booking_id)
            .into_iter()
            .cloned()
            .collect();
        let total_paid: f64 = payments.iter().map(|payment| payment.amount).sum();
        Ok(BalanceSummary {
            booking_id,
            total_amount: booking.total_amount,
            total_paid,
            balance_due: booking.total_amount - total_paid,
            payments,
        })
    }

    /// Checkout coordinator. Ordered steps: validate state, settle the final
    /// payment against the balance, move the booking to `checked_out` (room
    /// to `cleaning`), snapshot the invoice. All steps land on the in-memory
    /// register, so callers persisting afterwards get the sequence atomically.
    pub fn checkout(
        register: &mut HotelRegister,
        booking_id: Uuid,
        final_payment: Option<FinalPayment>,
    ) -> ServiceResult<CheckoutSummary> {
        let status = register
            .booking(booking_id)
            .ok_or_else(|| HotelError::not_found("Booking", booking_id))?
            .status;
        if status != BookingStatus::CheckedIn {
            return Err(HotelError::InvalidState(format!(
                "checkout requires a checked-in booking, found {:?}",
                status
            )));
        }

        let balance = Self::balance(register, booking_id)?;
        if let Some(payment) = final_payment {
            if balance.balance_due > 0.0 {
                if payment.amount > balance.balance_due {
                    return Err(HotelError::InvalidAmount(format!(
                        "final payment {:.2} exceeds balance due {:.2}",
                        payment.amount, balance.balance_due
                    )));
                }
                let mut draft =
                    PaymentDraft::settlement(booking_id, payment.payment_type, payment.amount);
                draft.description = payment.description;
                Self::record(register, draft)?;
            }
        }

        BookingService::transition(register, booking_id, BookingStatus::CheckedOut)?;
        let invoice = InvoiceService::generate(register, booking_id)?;
        let settled = Self::balance(register, booking_id)?;
        tracing::info!(
            booking_id = %booking_id,
            invoice_id = %invoice.id,
            balance_due = settled.balance_due,
            "checkout completed"
        );
        Ok(CheckoutSummary {
            booking_id,
            total_amount: settled.total_amount,
            total_paid: settled.total_paid,
            balance_due: settled.balance_due,
            invoice_id: invoice.id,
        })
    }
}
