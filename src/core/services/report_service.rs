//! Read-only aggregation: the daily financial report and dashboard counts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{BookingStatus, ExpenseCategory, HotelRegister, RoomStatus};

/// One calendar day of money movement and completed stays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReport {
    pub report_date: NaiveDate,
    /// Sum over payments whose timestamp falls on the report date.
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    /// Sum of `total_amount` over bookings checked out on the report date.
    /// Keyed by checkout date, not payment date, so a stay settled on another
    /// day does not contribute here even if its money arrived today.
    pub room_revenue: f64,
    /// Number of bookings checked out on the report date.
    pub total_bookings: usize,
    pub advance_payments: f64,
    pub final_payments: f64,
    /// Only categories with at least one expense on the report date appear.
    pub expenses_by_category: BTreeMap<ExpenseCategory, f64>,
}

/// Property-wide occupancy and revenue counters for the front desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub maintenance_rooms: usize,
    pub cleaning_rooms: usize,
    pub today_checkins: usize,
    pub today_checkouts: usize,
    pub total_revenue: f64,
}

pub struct ReportService;

impl ReportService {
    pub fn financial_report(register: &HotelRegister, date: NaiveDate) -> FinancialReport {
        let payments: Vec<_> = register
            .payments
            .iter()
            .filter(|payment| payment.payment_date.date_naive() == date)
            .collect();
        let total_income: f64 = payments.iter().map(|payment| payment.amount).sum();
        let advance_payments: f64 = payments
            .iter()
            .filter(|payment| payment.is_advance)
            .map(|payment| payment.amount)
            .sum();
        let final_payments: f64 = payments
            .iter()
            .filter(|payment| !payment.is_advance)
            .map(|payment| payment.amount)
            .sum();

        let completed: Vec<_> = register
            .bookings
            .iter()
            .filter(|booking| {
                booking.status == BookingStatus::CheckedOut && booking.check_out_date == date
            })
            .collect();
        let room_revenue: f64 = completed.iter().map(|booking| booking.total_amount).sum();

        let mut total_expenses = 0.0;
        let mut expenses_by_category: BTreeMap<ExpenseCategory, f64> = BTreeMap::new();
        for expense in register
            .expenses
            .iter()
            .filter(|expense| expense.expense_date == date)
        {
            total_expenses += expense.amount;
            *expenses_by_category.entry(expense.category).or_insert(0.0) += expense.amount;
        }

        FinancialReport {
            report_date: date,
            total_income,
            total_expenses,
            net_profit: total_income - total_expenses,
            room_revenue,
            total_bookings: completed.len(),
            advance_payments,
            final_payments,
            expenses_by_category,
        }
    }

    pub fn dashboard(register: &HotelRegister, today: NaiveDate) -> DashboardStats {
        let count_status = |status: RoomStatus| {
            register
                .rooms
                .iter()
                .filter(|room| room.status == status)
                .count()
        };
        let today_checkins = register
            .bookings
            .iter()
            .filter(|booking| booking.check_in_date == today && booking.status.blocks_room())
            .count();
        let today_checkouts = register
            .bookings
            .iter()
            .filter(|booking| {
                booking.check_out_date == today && booking.status == BookingStatus::CheckedOut
            })
            .count();
        let total_revenue = register
            .bookings
            .iter()
            .filter(|booking| booking.status == BookingStatus::CheckedOut)
            .map(|booking| booking.total_amount)
            .sum();

        DashboardStats {
            total_rooms: register.room_count(),
            available_rooms: count_status(RoomStatus::Available),
            occupied_rooms: count_status(RoomStatus::Occupied),
            maintenance_rooms: count_status(RoomStatus::Maintenance),
            cleaning_rooms: count_status(RoomStatus::Cleaning),
            today_checkins,
            today_checkouts,
            total_revenue,
        }
    }
}
