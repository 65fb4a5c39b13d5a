//! Booking lifecycle: availability, pricing, and the status state machine.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::domain::{
    Booking, BookingDraft, BookingStatus, BookingUpdate, HotelRegister, RoomStatus,
};
use crate::errors::HotelError;

/// Room side effect attached to a booking status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomEffect {
    None,
    /// Guest has arrived; the room is occupied.
    Occupy,
    /// Stay is over; housekeeping takes the room.
    Clean,
    /// Cancellation: housekeeping only if the guest had already moved in.
    CleanIfOccupied,
}

/// Provides the booking workflow over the register.
pub struct BookingService;

impl BookingService {
    /// Whether `room_id` can take a stay over `[check_in, check_out)`.
    ///
    /// Only `confirmed` and `checked_in` bookings block; intervals touching at
    /// an endpoint (back-to-back stays) do not conflict. Purely a read.
    ///
    /// Note the register is read without any reservation lock, so two callers
    /// racing between this check and the insert can both observe availability.
    /// Single-process use serializes through `&mut` access; anything beyond
    /// that needs a serialization point in front of booking creation.
    pub fn is_available(
        register: &HotelRegister,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_booking_id: Option<Uuid>,
    ) -> bool {
        !register
            .blocking_bookings(room_id)
            .filter(|booking| Some(booking.id) != exclude_booking_id)
            .any(|booking| booking.overlaps(check_in, check_out))
    }

    /// Charge for a stay: whole nights between the dates times the room's
    /// current nightly price. The result is frozen onto the booking at
    /// creation; later price edits never reprice existing bookings.
    pub fn booking_amount(
        register: &HotelRegister,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> ServiceResult<f64> {
        let room = register
            .room(room_id)
            .ok_or_else(|| HotelError::not_found("Room", room_id))?;
        let nights = (check_out - check_in).num_days();
        Ok(nights as f64 * room.price_per_night)
    }

    /// Validates and creates a booking in `pending` status.
    pub fn create(register: &mut HotelRegister, draft: BookingDraft) -> ServiceResult<Booking> {
        if draft.check_out_date <= draft.check_in_date {
            return Err(HotelError::Validation(
                "check-out date must be after check-in date".into(),
            ));
        }
        if register.guest(draft.guest_id).is_none() {
            return Err(HotelError::not_found("Guest", draft.guest_id));
        }
        if register.room(draft.room_id).is_none() {
            return Err(HotelError::not_found("Room", draft.room_id));
        }
        if !Self::is_available(
            register,
            draft.room_id,
            draft.check_in_date,
            draft.check_out_date,
            None,
        ) {
            return Err(HotelError::Conflict(
                "room not available for the selected dates".into(),
            ));
        }
        let total_amount = Self::booking_amount(
            register,
            draft.room_id,
            draft.check_in_date,
            draft.check_out_date,
        )?;
        let booking = Booking::new(draft, total_amount);
        tracing::info!(
            booking_id = %booking.id,
            room_id = %booking.room_id,
            total_amount,
            "booking created"
        );
        register.add_booking(booking.clone());
        Ok(booking)
    }

    /// Applies a status change and/or special-request edit.
    pub fn update(
        register: &mut HotelRegister,
        booking_id: Uuid,
        update: BookingUpdate,
    ) -> ServiceResult<Booking> {
        if register.booking(booking_id).is_none() {
            return Err(HotelError::not_found("Booking", booking_id));
        }
        if let Some(requested) = update.status {
            Self::transition(register, booking_id, requested)?;
        }
        let booking = register
            .booking_mut(booking_id)
            .ok_or_else(|| HotelError::not_found("Booking", booking_id))?;
        if let Some(requests) = update.special_requests {
            booking.special_requests = Some(requests);
        }
        let snapshot = booking.clone();
        register.touch();
        Ok(snapshot)
    }

    /// Moves a booking to `requested`, applying the coupled room side effect.
    pub fn transition(
        register: &mut HotelRegister,
        booking_id: Uuid,
        requested: BookingStatus,
    ) -> ServiceResult<()> {
        let (room_id, current) = {
            let booking = register
                .booking(booking_id)
                .ok_or_else(|| HotelError::not_found("Booking", booking_id))?;
            (booking.room_id, booking.status)
        };
        let Some((next, effect)) = plan_transition(current, requested)? else {
            return Ok(());
        };
        if let Some(booking) = register.booking_mut(booking_id) {
            booking.status = next;
        }
        Self::apply_room_effect(register, room_id, effect);
        tracing::info!(
            booking_id = %booking_id,
            from = ?current,
            to = ?next,
            "booking status changed"
        );
        register.touch();
        Ok(())
    }

    fn apply_room_effect(register: &mut HotelRegister, room_id: Uuid, effect: RoomEffect) {
        let Some(room) = register.room_mut(room_id) else {
            // Weak reference: the room may have been deleted after its
            // bookings left the blocking states.
            tracing::warn!(room_id = %room_id, "transition on booking for missing room");
            return;
        };
        match effect {
            RoomEffect::None => {}
            RoomEffect::Occupy => room.status = RoomStatus::Occupied,
            RoomEffect::Clean => room.status = RoomStatus::Cleaning,
            RoomEffect::CleanIfOccupied => {
                if room.status == RoomStatus::Occupied {
                    room.status = RoomStatus::Cleaning;
                }
            }
        }
    }

    /// Deletes a booking unconditionally; there is no active-state guard,
    /// unlike room and guest deletion.
    pub fn delete(register: &mut HotelRegister, booking_id: Uuid) -> ServiceResult<Booking> {
        register
            .remove_booking(booking_id)
            .ok_or_else(|| HotelError::not_found("Booking", booking_id))
    }

    /// Bookings that touch the closed window `[start, end]`: check-in inside
    /// it, check-out inside it, or the stay spanning the whole window.
    pub fn in_range<'a>(
        register: &'a HotelRegister,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&'a Booking> {
        register
            .bookings
            .iter()
            .filter(|booking| {
                let in_start = booking.check_in_date >= start && booking.check_in_date <= end;
                let in_end = booking.check_out_date >= start && booking.check_out_date <= end;
                let spans = booking.check_in_date <= start && booking.check_out_date >= end;
                in_start || in_end || spans
            })
            .collect()
    }
}

/// The transition table. `Ok(None)` is the accepted no-op of re-asserting the
/// current status; anything not listed is rejected rather than applied with
/// its side effect silently skipped.
fn plan_transition(
    current: BookingStatus,
    requested: BookingStatus,
) -> Result<Option<(BookingStatus, RoomEffect)>, HotelError> {
    use BookingStatus::*;

    if current == requested {
        return Ok(None);
    }
    if current.is_terminal() {
        return Err(HotelError::InvalidState(format!(
            "booking in terminal status {:?} cannot change",
            current
        )));
    }
    let planned = match (current, requested) {
        (Pending, Confirmed) => (Confirmed, RoomEffect::None),
        (Confirmed, CheckedIn) => (CheckedIn, RoomEffect::Occupy),
        (CheckedIn, CheckedOut) => (CheckedOut, RoomEffect::Clean),
        (Pending | Confirmed | CheckedIn, Cancelled) => (Cancelled, RoomEffect::CleanIfOccupied),
        (from, to) => {
            return Err(HotelError::InvalidState(format!(
                "booking cannot move from {:?} to {:?}",
                from, to
            )))
        }
    };
    Ok(Some(planned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Guest, GuestDraft, Room, RoomDraft, RoomType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn register_with_room_and_guest() -> (HotelRegister, Uuid, Uuid) {
        let mut register = HotelRegister::new("Test");
        let room_id = register.add_room(Room::new(RoomDraft::new("101", RoomType::Single, 100.0)));
        let guest_id = register.add_guest(Guest::new(GuestDraft::new(
            "Ada Lovelace",
            "ada@example.com",
            "+44 1234",
        )));
        (register, room_id, guest_id)
    }

    fn confirmed_booking(
        register: &mut HotelRegister,
        room_id: Uuid,
        guest_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Uuid {
        let booking = BookingService::create(
            register,
            BookingDraft::new(guest_id, room_id, check_in, check_out),
        )
        .unwrap();
        BookingService::transition(register, booking.id, BookingStatus::Confirmed).unwrap();
        booking.id
    }

    #[test]
    fn overlapping_confirmed_booking_blocks() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        confirmed_booking(
            &mut register,
            room_id,
            guest_id,
            date(2024, 1, 1),
            date(2024, 1, 5),
        );
        assert!(!BookingService::is_available(
            &register,
            room_id,
            date(2024, 1, 4),
            date(2024, 1, 6),
            None,
        ));
    }

    #[test]
    fn back_to_back_does_not_block() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        confirmed_booking(
            &mut register,
            room_id,
            guest_id,
            date(2024, 1, 1),
            date(2024, 1, 3),
        );
        assert!(BookingService::is_available(
            &register,
            room_id,
            date(2024, 1, 3),
            date(2024, 1, 5),
            None,
        ));
    }

    #[test]
    fn pending_booking_never_blocks() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        BookingService::create(
            &mut register,
            BookingDraft::new(guest_id, room_id, date(2024, 1, 1), date(2024, 1, 5)),
        )
        .unwrap();
        assert!(BookingService::is_available(
            &register,
            room_id,
            date(2024, 1, 2),
            date(2024, 1, 4),
            None,
        ));
    }

    #[test]
    fn exclude_removes_own_booking_from_consideration() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        let id = confirmed_booking(
            &mut register,
            room_id,
            guest_id,
            date(2024, 1, 1),
            date(2024, 1, 5),
        );
        assert!(BookingService::is_available(
            &register,
            room_id,
            date(2024, 1, 2),
            date(2024, 1, 6),
            Some(id),
        ));
    }

    #[test]
    fn amount_is_nights_times_price() {
        let (register, room_id, _guest_id) = register_with_room_and_guest();
        let amount =
            BookingService::booking_amount(&register, room_id, date(2024, 3, 1), date(2024, 3, 4))
                .unwrap();
        assert_eq!(amount, 300.0);
    }

    #[test]
    fn create_rejects_inverted_dates() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        let err = BookingService::create(
            &mut register,
            BookingDraft::new(guest_id, room_id, date(2024, 1, 5), date(2024, 1, 5)),
        )
        .expect_err("equal dates must fail");
        assert!(matches!(err, HotelError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn create_rejects_unknown_guest_and_room() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        let err = BookingService::create(
            &mut register,
            BookingDraft::new(Uuid::new_v4(), room_id, date(2024, 1, 1), date(2024, 1, 2)),
        )
        .expect_err("unknown guest");
        assert!(matches!(err, HotelError::NotFound { entity: "Guest", .. }));

        let err = BookingService::create(
            &mut register,
            BookingDraft::new(guest_id, Uuid::new_v4(), date(2024, 1, 1), date(2024, 1, 2)),
        )
        .expect_err("unknown room");
        assert!(matches!(err, HotelError::NotFound { entity: "Room", .. }));
    }

    #[test]
    fn pending_cannot_jump_to_checked_in() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        let booking = BookingService::create(
            &mut register,
            BookingDraft::new(guest_id, room_id, date(2024, 1, 1), date(2024, 1, 2)),
        )
        .unwrap();
        let err = BookingService::transition(&mut register, booking.id, BookingStatus::CheckedIn)
            .expect_err("shortcut must be rejected");
        assert!(matches!(err, HotelError::InvalidState(_)), "got {err:?}");
    }

    #[test]
    fn terminal_states_reject_further_transitions() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        let id = confirmed_booking(
            &mut register,
            room_id,
            guest_id,
            date(2024, 1, 1),
            date(2024, 1, 2),
        );
        BookingService::transition(&mut register, id, BookingStatus::Cancelled).unwrap();
        let err = BookingService::transition(&mut register, id, BookingStatus::Confirmed)
            .expect_err("cancelled is terminal");
        assert!(matches!(err, HotelError::InvalidState(_)));
    }

    #[test]
    fn reasserting_current_status_is_a_noop() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        let id = confirmed_booking(
            &mut register,
            room_id,
            guest_id,
            date(2024, 1, 1),
            date(2024, 1, 2),
        );
        BookingService::transition(&mut register, id, BookingStatus::Confirmed).unwrap();
        assert_eq!(register.booking(id).unwrap().status, BookingStatus::Confirmed);
    }

    #[test]
    fn cancelling_checked_in_stay_sends_room_to_cleaning() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        let id = confirmed_booking(
            &mut register,
            room_id,
            guest_id,
            date(2024, 1, 1),
            date(2024, 1, 2),
        );
        BookingService::transition(&mut register, id, BookingStatus::CheckedIn).unwrap();
        assert_eq!(register.room(room_id).unwrap().status, RoomStatus::Occupied);

        BookingService::transition(&mut register, id, BookingStatus::Cancelled).unwrap();
        assert_eq!(register.room(room_id).unwrap().status, RoomStatus::Cleaning);
    }

    #[test]
    fn cancelling_confirmed_stay_leaves_room_alone() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        let id = confirmed_booking(
            &mut register,
            room_id,
            guest_id,
            date(2024, 1, 1),
            date(2024, 1, 2),
        );
        BookingService::transition(&mut register, id, BookingStatus::Cancelled).unwrap();
        assert_eq!(register.room(room_id).unwrap().status, RoomStatus::Available);
    }

    #[test]
    fn range_query_includes_spanning_stays() {
        let (mut register, room_id, guest_id) = register_with_room_and_guest();
        confirmed_booking(
            &mut register,
            room_id,
            guest_id,
            date(2024, 1, 1),
            date(2024, 1, 31),
        );
        let hits = BookingService::in_range(&register, date(2024, 1, 10), date(2024, 1, 12));
        assert_eq!(hits.len(), 1);
        let misses = BookingService::in_range(&register, date(2024, 3, 1), date(2024, 3, 5));
        assert!(misses.is_empty());
    }
}
