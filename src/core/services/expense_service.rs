//! Operating-expense CRUD, independent of the booking workflow.

use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::domain::{Expense, ExpenseDraft, ExpenseUpdate, HotelRegister};
use crate::errors::HotelError;

pub struct ExpenseService;

impl ExpenseService {
    pub fn create(register: &mut HotelRegister, draft: ExpenseDraft) -> ServiceResult<Expense> {
        if draft.amount < 0.0 {
            return Err(HotelError::Validation(
                "expense amount must be non-negative".into(),
            ));
        }
        let expense = Expense::new(draft);
        register.add_expense(expense.clone());
        Ok(expense)
    }

    pub fn update(
        register: &mut HotelRegister,
        expense_id: Uuid,
        update: ExpenseUpdate,
    ) -> ServiceResult<Expense> {
        if let Some(amount) = update.amount {
            if amount < 0.0 {
                return Err(HotelError::Validation(
                    "expense amount must be non-negative".into(),
                ));
            }
        }
        let expense = register
            .expense_mut(expense_id)
            .ok_or_else(|| HotelError::not_found("Expense", expense_id))?;
        if let Some(category) = update.category {
            expense.category = category;
        }
        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(description) = update.description {
            expense.description = description;
        }
        if let Some(expense_date) = update.expense_date {
            expense.expense_date = expense_date;
        }
        let snapshot = expense.clone();
        register.touch();
        Ok(snapshot)
    }

    pub fn delete(register: &mut HotelRegister, expense_id: Uuid) -> ServiceResult<Expense> {
        register
            .remove_expense(expense_id)
            .ok_or_else(|| HotelError::not_found("Expense", expense_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseCategory;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn crud_roundtrip() {
        let mut register = HotelRegister::new("Test");
        let expense = ExpenseService::create(
            &mut register,
            ExpenseDraft::new(
                ExpenseCategory::Supplies,
                80.0,
                "linen restock",
                date(2024, 6, 1),
            ),
        )
        .unwrap();

        let update = ExpenseUpdate {
            amount: Some(95.0),
            ..ExpenseUpdate::default()
        };
        let updated = ExpenseService::update(&mut register, expense.id, update).unwrap();
        assert_eq!(updated.amount, 95.0);
        assert_eq!(updated.category, ExpenseCategory::Supplies);

        ExpenseService::delete(&mut register, expense.id).unwrap();
        assert!(register.expense(expense.id).is_none());
    }

    #[test]
    fn unknown_expense_is_not_found() {
        let mut register = HotelRegister::new("Test");
        let err = ExpenseService::delete(&mut register, Uuid::new_v4())
            .expect_err("unknown expense");
        assert!(matches!(err, HotelError::NotFound { entity: "Expense", .. }));
    }
}
