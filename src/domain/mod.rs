//! Entities kept in the hotel register, plus the register aggregate itself.

pub mod booking;
pub mod expense;
pub mod guest;
pub mod invoice;
pub mod payment;
pub mod register;
pub mod room;

pub use booking::{Booking, BookingDraft, BookingStatus, BookingUpdate};
pub use expense::{Expense, ExpenseCategory, ExpenseDraft, ExpenseUpdate};
pub use guest::{Guest, GuestDraft};
pub use invoice::Invoice;
pub use payment::{FinalPayment, Payment, PaymentDraft, PaymentStatus, PaymentType};
pub use register::HotelRegister;
pub use room::{Room, RoomDraft, RoomStatus, RoomType, RoomUpdate};
