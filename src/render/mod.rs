//! Seam for document rendering. The PDF layer lives outside this crate and
//! consumes already-computed data through [`DocumentRenderer`]; the plain-text
//! implementation here backs tests and terminal output.

use std::fmt::Write;

use crate::core::services::FinancialReport;
use crate::domain::Invoice;
use crate::errors::HotelError;

pub trait DocumentRenderer: Send + Sync {
    fn render_invoice(&self, invoice: &Invoice) -> Result<Vec<u8>, HotelError>;
    fn render_report(&self, report: &FinancialReport) -> Result<Vec<u8>, HotelError>;
}

/// Minimal renderer producing aligned plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl DocumentRenderer for TextRenderer {
    fn render_invoice(&self, invoice: &Invoice) -> Result<Vec<u8>, HotelError> {
        let mut out = String::new();
        let _ = writeln!(out, "INVOICE {}", invoice.id);
        let _ = writeln!(out, "Guest:     {}", invoice.guest_name);
        let _ = writeln!(out, "Room:      {}", invoice.room_number);
        let _ = writeln!(
            out,
            "Stay:      {} to {}",
            invoice.check_in_date, invoice.check_out_date
        );
        let _ = writeln!(out, "Total:     {:>10.2}", invoice.total_amount);
        let _ = writeln!(out, "Advance:   {:>10.2}", invoice.advance_paid);
        let _ = writeln!(out, "Balance:   {:>10.2}", invoice.balance_due);
        if !invoice.payments.is_empty() {
            let _ = writeln!(out, "Payments:");
            for payment in &invoice.payments {
                let _ = writeln!(
                    out,
                    "  {}  {:>10.2}  {}",
                    payment.payment_date.format("%Y-%m-%d"),
                    payment.amount,
                    if payment.is_advance { "advance" } else { "final" },
                );
            }
        }
        Ok(out.into_bytes())
    }

    fn render_report(&self, report: &FinancialReport) -> Result<Vec<u8>, HotelError> {
        let mut out = String::new();
        let _ = writeln!(out, "FINANCIAL REPORT {}", report.report_date);
        let _ = writeln!(out, "Income:        {:>10.2}", report.total_income);
        let _ = writeln!(out, "  advances:    {:>10.2}", report.advance_payments);
        let _ = writeln!(out, "  settlements: {:>10.2}", report.final_payments);
        let _ = writeln!(out, "Expenses:      {:>10.2}", report.total_expenses);
        for (category, amount) in &report.expenses_by_category {
            let _ = writeln!(out, "  {:?}: {:.2}", category, amount);
        }
        let _ = writeln!(out, "Net profit:    {:>10.2}", report.net_profit);
        let _ = writeln!(
            out,
            "Room revenue:  {:>10.2} over {} completed stays",
            report.room_revenue, report.total_bookings
        );
        Ok(out.into_bytes())
    }
}
