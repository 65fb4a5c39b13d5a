use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Utilities,
    Maintenance,
    Supplies,
    Staff,
    Marketing,
    Other,
}

/// An operating expense, independent of any booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub description: String,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(draft: ExpenseDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: draft.category,
            amount: draft.amount,
            description: draft.description,
            expense_date: draft.expense_date,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub category: ExpenseCategory,
    pub amount: f64,
    pub description: String,
    pub expense_date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(
        category: ExpenseCategory,
        amount: f64,
        description: impl Into<String>,
        expense_date: NaiveDate,
    ) -> Self {
        Self {
            category,
            amount,
            description: description.into(),
            expense_date,
        }
    }
}

/// Partial update applied to an existing expense.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<NaiveDate>,
}
