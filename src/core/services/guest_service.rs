//! Guest CRUD with email uniqueness and search.

use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::domain::{Guest, GuestDraft, HotelRegister};
use crate::errors::HotelError;

pub struct GuestService;

impl GuestService {
    pub fn create(register: &mut HotelRegister, draft: GuestDraft) -> ServiceResult<Guest> {
        if register.guest_by_email(&draft.email).is_some() {
            return Err(HotelError::Conflict(format!(
                "guest with email {} already exists",
                draft.email
            )));
        }
        let guest = Guest::new(draft);
        register.add_guest(guest.clone());
        Ok(guest)
    }

    /// Whole-record update; the id and creation timestamp are preserved.
    pub fn update(
        register: &mut HotelRegister,
        guest_id: Uuid,
        draft: GuestDraft,
    ) -> ServiceResult<Guest> {
        let current_email = register
            .guest(guest_id)
            .ok_or_else(|| HotelError::not_found("Guest", guest_id))?
            .email
            .clone();
        if draft.email != current_email && register.guest_by_email(&draft.email).is_some() {
            return Err(HotelError::Conflict(format!(
                "guest with email {} already exists",
                draft.email
            )));
        }
        let guest = register
            .guest_mut(guest_id)
            .ok_or_else(|| HotelError::not_found("Guest", guest_id))?;
        guest.name = draft.name;
        guest.email = draft.email;
        guest.phone = draft.phone;
        guest.address = draft.address;
        guest.country = draft.country;
        guest.id_number = draft.id_number;
        let snapshot = guest.clone();
        register.touch();
        Ok(snapshot)
    }

    /// Deletes a guest unless they still hold an active booking.
    pub fn delete(register: &mut HotelRegister, guest_id: Uuid) -> ServiceResult<Guest> {
        if register.guest(guest_id).is_none() {
            return Err(HotelError::not_found("Guest", guest_id));
        }
        if register.guest_has_blocking_booking(guest_id) {
            return Err(HotelError::Conflict(
                "cannot delete a guest with active bookings".into(),
            ));
        }
        register
            .remove_guest(guest_id)
            .ok_or_else(|| HotelError::not_found("Guest", guest_id))
    }

    /// Case-insensitive substring search over name, email, and phone.
    pub fn search<'a>(register: &'a HotelRegister, query: &str) -> Vec<&'a Guest> {
        register
            .guests
            .iter()
            .filter(|guest| guest.matches(query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_conflicts() {
        let mut register = HotelRegister::new("Test");
        GuestService::create(
            &mut register,
            GuestDraft::new("Ada", "ada@example.com", "+44"),
        )
        .unwrap();
        let err = GuestService::create(
            &mut register,
            GuestDraft::new("Other Ada", "ada@example.com", "+1"),
        )
        .expect_err("duplicate email");
        assert!(matches!(err, HotelError::Conflict(_)));
    }

    #[test]
    fn update_keeps_identity_and_checks_email() {
        let mut register = HotelRegister::new("Test");
        let ada = GuestService::create(
            &mut register,
            GuestDraft::new("Ada", "ada@example.com", "+44"),
        )
        .unwrap();
        GuestService::create(
            &mut register,
            GuestDraft::new("Grace", "grace@example.com", "+1"),
        )
        .unwrap();

        let err = GuestService::update(
            &mut register,
            ada.id,
            GuestDraft::new("Ada", "grace@example.com", "+44"),
        )
        .expect_err("email taken");
        assert!(matches!(err, HotelError::Conflict(_)));

        let updated = GuestService::update(
            &mut register,
            ada.id,
            GuestDraft::new("Ada Lovelace", "ada@example.com", "+44 1234"),
        )
        .unwrap();
        assert_eq!(updated.id, ada.id);
        assert_eq!(updated.name, "Ada Lovelace");
    }

    #[test]
    fn search_matches_any_field() {
        let mut register = HotelRegister::new("Test");
        GuestService::create(
            &mut register,
            GuestDraft::new("Ada Lovelace", "ada@example.com", "+44 1234"),
        )
        .unwrap();
        GuestService::create(
            &mut register,
            GuestDraft::new("Grace Hopper", "grace@example.com", "+1 555"),
        )
        .unwrap();

        assert_eq!(GuestService::search(&register, "lovelace").len(), 1);
        assert_eq!(GuestService::search(&register, "example.com").len(), 2);
        assert_eq!(GuestService::search(&register, "555").len(), 1);
        assert!(GuestService::search(&register, "turing").is_empty());
    }
}
