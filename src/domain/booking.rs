use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking in this status occupies its room for availability
    /// purposes.
    pub fn blocks_room(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::CheckedOut | BookingStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(draft: BookingDraft, total_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            guest_id: draft.guest_id,
            room_id: draft.room_id,
            check_in_date: draft.check_in_date,
            check_out_date: draft.check_out_date,
            status: BookingStatus::Pending,
            total_amount,
            special_requests: draft.special_requests,
            created_at: Utc::now(),
        }
    }

    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    /// Half-open interval overlap: `[check_in, check_out)` shares at least one
    /// night with `[start, end)`. Back-to-back stays do not overlap.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start < self.check_out_date && end > self.check_in_date
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub guest_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl BookingDraft {
    pub fn new(
        guest_id: Uuid,
        room_id: Uuid,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Self {
        Self {
            guest_id,
            room_id,
            check_in_date,
            check_out_date,
            special_requests: None,
        }
    }

    pub fn with_requests(mut self, requests: impl Into<String>) -> Self {
        self.special_requests = Some(requests.into());
        self
    }
}

/// Status change and/or special-request edit applied to a booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl BookingUpdate {
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            special_requests: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(check_in: NaiveDate, check_out: NaiveDate) -> Booking {
        Booking::new(
            BookingDraft::new(Uuid::new_v4(), Uuid::new_v4(), check_in, check_out),
            0.0,
        )
    }

    #[test]
    fn overlap_is_half_open() {
        let stay = booking(date(2024, 1, 1), date(2024, 1, 3));
        // Shares the night of Jan 2.
        assert!(stay.overlaps(date(2024, 1, 2), date(2024, 1, 4)));
        // Back-to-back: starts the day the stay ends.
        assert!(!stay.overlaps(date(2024, 1, 3), date(2024, 1, 5)));
        // Ends the day the stay starts.
        assert!(!stay.overlaps(date(2023, 12, 30), date(2024, 1, 1)));
        // Fully contains the stay.
        assert!(stay.overlaps(date(2023, 12, 31), date(2024, 1, 10)));
    }

    #[test]
    fn only_confirmed_and_checked_in_block() {
        assert!(BookingStatus::Confirmed.blocks_room());
        assert!(BookingStatus::CheckedIn.blocks_room());
        assert!(!BookingStatus::Pending.blocks_room());
        assert!(!BookingStatus::Cancelled.blocks_room());
        assert!(!BookingStatus::CheckedOut.blocks_room());
    }

    #[test]
    fn nights_counts_whole_days() {
        let stay = booking(date(2024, 3, 1), date(2024, 3, 4));
        assert_eq!(stay.nights(), 3);
    }
}
