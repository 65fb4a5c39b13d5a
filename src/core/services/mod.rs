pub mod booking_service;
pub mod expense_service;
pub mod guest_service;
pub mod invoice_service;
pub mod payment_service;
pub mod report_service;
pub mod room_service;

pub use booking_service::{BookingService, RoomEffect};
pub use expense_service::ExpenseService;
pub use guest_service::GuestService;
pub use invoice_service::InvoiceService;
pub use payment_service::{BalanceSummary, CheckoutSummary, PaymentService};
pub use report_service::{DashboardStats, FinancialReport, ReportService};
pub use room_service::RoomService;

use crate::errors::HotelError;

pub type ServiceResult<T> = Result<T, HotelError>;
