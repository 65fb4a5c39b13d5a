//! Room CRUD with uniqueness and deletion guards, plus the standard seed set.

use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::domain::{HotelRegister, Room, RoomDraft, RoomType, RoomUpdate};
use crate::errors::HotelError;

pub struct RoomService;

impl RoomService {
    /// Creates a room. Room numbers are human-assigned and unique across the
    /// register.
    pub fn create(register: &mut HotelRegister, draft: RoomDraft) -> ServiceResult<Room> {
        if draft.price_per_night < 0.0 {
            return Err(HotelError::Validation(
                "nightly price must be non-negative".into(),
            ));
        }
        if register.room_by_number(&draft.room_number).is_some() {
            return Err(HotelError::Conflict(format!(
                "room number {} already exists",
                draft.room_number
            )));
        }
        let room = Room::new(draft);
        register.add_room(room.clone());
        Ok(room)
    }

    /// Applies a partial update; unset fields are left untouched.
    pub fn update(
        register: &mut HotelRegister,
        room_id: Uuid,
        update: RoomUpdate,
    ) -> ServiceResult<Room> {
        if let Some(price) = update.price_per_night {
            if price < 0.0 {
                return Err(HotelError::Validation(
                    "nightly price must be non-negative".into(),
                ));
            }
        }
        let room = register
            .room_mut(room_id)
            .ok_or_else(|| HotelError::not_found("Room", room_id))?;
        if let Some(room_type) = update.room_type {
            room.room_type = room_type;
        }
        if let Some(price) = update.price_per_night {
            room.price_per_night = price;
        }
        if let Some(status) = update.status {
            room.status = status;
        }
        if let Some(description) = update.description {
            room.description = Some(description);
        }
        if let Some(max_occupancy) = update.max_occupancy {
            room.max_occupancy = max_occupancy;
        }
        if let Some(amenities) = update.amenities {
            room.amenities = amenities;
        }
        let snapshot = room.clone();
        register.touch();
        Ok(snapshot)
    }

    /// Deletes a room unless a `confirmed` or `checked_in` booking still
    /// holds it.
    pub fn delete(register: &mut HotelRegister, room_id: Uuid) -> ServiceResult<Room> {
        if register.room(room_id).is_none() {
            return Err(HotelError::not_found("Room", room_id));
        }
        if register.blocking_bookings(room_id).next().is_some() {
            return Err(HotelError::Conflict(
                "cannot delete a room with active bookings".into(),
            ));
        }
        register
            .remove_room(room_id)
            .ok_or_else(|| HotelError::not_found("Room", room_id))
    }

    /// Seeds the ten standard rooms. A no-op when any room already exists,
    /// so repeated calls are safe; returns how many rooms were created.
    pub fn seed_default_rooms(register: &mut HotelRegister) -> usize {
        if register.room_count() > 0 {
            return 0;
        }
        let defaults = default_rooms();
        let count = defaults.len();
        for draft in defaults {
            register.add_room(Room::new(draft));
        }
        tracing::info!(count, "seeded default rooms");
        count
    }
}

fn default_rooms() -> Vec<RoomDraft> {
    vec![
        RoomDraft::new("101", RoomType::Single, 100.0).with_description("Cozy single room"),
        RoomDraft::new("102", RoomType::Single, 100.0).with_description("Cozy single room"),
        RoomDraft::new("103", RoomType::Double, 150.0)
            .with_description("Comfortable double room"),
        RoomDraft::new("104", RoomType::Double, 150.0)
            .with_description("Comfortable double room"),
        RoomDraft::new("105", RoomType::Suite, 250.0)
            .with_description("Luxurious suite")
            .with_occupancy(4),
        RoomDraft::new("201", RoomType::Single, 110.0).with_description("Premium single room"),
        RoomDraft::new("202", RoomType::Double, 160.0).with_description("Premium double room"),
        RoomDraft::new("203", RoomType::Deluxe, 200.0)
            .with_description("Deluxe room with city view"),
        RoomDraft::new("204", RoomType::Deluxe, 200.0)
            .with_description("Deluxe room with city view"),
        RoomDraft::new("205", RoomType::Suite, 300.0)
            .with_description("Presidential suite")
            .with_occupancy(6),
    ]
}
