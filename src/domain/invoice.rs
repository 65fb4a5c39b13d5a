use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payment::Payment;

/// Immutable billing snapshot taken for a booking.
///
/// Guest name, room number, and the payment list are embedded by value, so
/// later edits or payments never retroactively change an issued invoice.
/// Regenerating for the same booking produces a new invoice under a new id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub guest_name: String,
    pub room_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_amount: f64,
    pub advance_paid: f64,
    pub balance_due: f64,
    pub payments: Vec<Payment>,
    pub created_at: DateTime<Utc>,
}
