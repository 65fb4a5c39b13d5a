mod common;

use chrono::Utc;
use common::{date, guest, manager, single_room};
use hotel_core::{
    domain::{
        BookingDraft, BookingStatus, BookingUpdate, ExpenseCategory, ExpenseDraft, PaymentDraft,
        PaymentType,
    },
    render::{DocumentRenderer, TextRenderer},
};

#[test]
fn quiet_day_report_is_all_zeroes() {
    let (manager, _guard) = manager();
    let report = manager.financial_report(date(2024, 7, 1));
    assert_eq!(report.total_income, 0.0);
    assert_eq!(report.total_expenses, 0.0);
    assert_eq!(report.net_profit, 0.0);
    assert_eq!(report.room_revenue, 0.0);
    assert_eq!(report.total_bookings, 0);
    assert_eq!(report.advance_payments, 0.0);
    assert_eq!(report.final_payments, 0.0);
    assert!(report.expenses_by_category.is_empty());
}

#[test]
fn busy_day_aggregates_payments_expenses_and_stays() {
    let (mut manager, _guard) = manager();
    let today = Utc::now().date_naive();
    let room = manager.create_room(single_room("101", 100.0)).unwrap();
    let ada = manager.create_guest(guest("Ada", "ada@example.com")).unwrap();

    // A three-night stay ending today, fully settled today.
    let booking = manager
        .create_booking(BookingDraft::new(ada.id, room.id, today - chrono::Duration::days(3), today))
        .unwrap();
    for status in [
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
    ] {
        manager
            .update_booking(booking.id, BookingUpdate::status(status))
            .unwrap();
    }
    manager
        .record_payment(PaymentDraft::advance(booking.id, PaymentType::Card, 120.0))
        .unwrap();
    manager
        .record_payment(PaymentDraft::settlement(
            booking.id,
            PaymentType::Cash,
            180.0,
        ))
        .unwrap();
    manager
        .create_expense(ExpenseDraft::new(
            ExpenseCategory::Supplies,
            40.0,
            "cleaning supplies",
            today,
        ))
        .unwrap();
    manager
        .create_expense(ExpenseDraft::new(
            ExpenseCategory::Supplies,
            10.0,
            "soap",
            today,
        ))
        .unwrap();

    let report = manager.financial_report(today);
    assert_eq!(report.total_income, 300.0);
    assert_eq!(report.advance_payments, 120.0);
    assert_eq!(report.final_payments, 180.0);
    assert_eq!(report.total_expenses, 50.0);
    assert_eq!(report.net_profit, 250.0);
    assert_eq!(report.room_revenue, 300.0);
    assert_eq!(report.total_bookings, 1);
    assert_eq!(
        report.expenses_by_category.get(&ExpenseCategory::Supplies),
        Some(&50.0)
    );
    assert_eq!(report.expenses_by_category.len(), 1);
}

#[test]
fn dashboard_reflects_seeded_house() {
    let (mut manager, _guard) = manager();
    assert_eq!(manager.initialize_rooms().unwrap(), 10);
    // Second call is a no-op.
    assert_eq!(manager.initialize_rooms().unwrap(), 0);

    let stats = manager.dashboard_stats();
    assert_eq!(stats.total_rooms, 10);
    assert_eq!(stats.available_rooms, 10);
    assert_eq!(stats.occupied_rooms, 0);
    assert_eq!(stats.total_revenue, 0.0);
}

#[test]
fn renderers_consume_computed_reports() {
    let (mut manager, _guard) = manager();
    let room = manager.create_room(single_room("205", 300.0)).unwrap();
    let ada = manager.create_guest(guest("Ada", "ada@example.com")).unwrap();
    let booking = manager
        .create_booking(BookingDraft::new(
            ada.id,
            room.id,
            date(2024, 5, 1),
            date(2024, 5, 3),
        ))
        .unwrap();
    let invoice = manager.generate_invoice(booking.id).unwrap();

    let text = String::from_utf8(TextRenderer.render_invoice(&invoice).unwrap()).unwrap();
    assert!(text.contains("Ada"));
    assert!(text.contains("205"));
    assert!(text.contains("600.00"));

    let report = manager.financial_report(date(2024, 5, 1));
    let text = String::from_utf8(TextRenderer.render_report(&report).unwrap()).unwrap();
    assert!(text.contains("FINANCIAL REPORT 2024-05-01"));
}
