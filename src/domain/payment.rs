use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Cash,
    Card,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
}

/// A recorded payment against a booking. Payments are append-only: workflow
/// logic never mutates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub payment_type: PaymentType,
    pub amount: f64,
    pub payment_date: DateTime<Utc>,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `true` for a pre-checkout deposit, `false` for a final settlement.
    pub is_advance: bool,
}

impl Payment {
    pub fn new(draft: PaymentDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            booking_id: draft.booking_id,
            payment_type: draft.payment_type,
            amount: draft.amount,
            payment_date: Utc::now(),
            status: PaymentStatus::Completed,
            description: draft.description,
            is_advance: draft.is_advance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub booking_id: Uuid,
    pub payment_type: PaymentType,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_advance: bool,
}

impl PaymentDraft {
    pub fn advance(booking_id: Uuid, payment_type: PaymentType, amount: f64) -> Self {
        Self {
            booking_id,
            payment_type,
            amount,
            description: None,
            is_advance: true,
        }
    }

    pub fn settlement(booking_id: Uuid, payment_type: PaymentType, amount: f64) -> Self {
        Self {
            booking_id,
            payment_type,
            amount,
            description: None,
            is_advance: false,
        }
    }
}

/// Final payment tendered at checkout, before the booking id is known to the
/// coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalPayment {
    pub payment_type: PaymentType,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
