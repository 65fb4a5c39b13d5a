#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use hotel_core::{
    domain::{GuestDraft, RoomDraft, RoomType},
    storage::JsonStorage,
    HotelManager,
};

/// Manager over a throwaway JSON store. Keep the guard alive for the test's
/// duration.
pub fn manager() -> (HotelManager, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let storage =
        JsonStorage::new(Some(temp.path().to_path_buf()), Some(3)).expect("json storage");
    let manager = HotelManager::open_or_create(Box::new(storage), "Test Hotel").expect("manager");
    (manager, temp)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn single_room(number: &str, price: f64) -> RoomDraft {
    RoomDraft::new(number, RoomType::Single, price)
}

pub fn guest(name: &str, email: &str) -> GuestDraft {
    GuestDraft::new(name, email, "+1 555 0100")
}
