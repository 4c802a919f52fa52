//! Validated reservation flow: form checks, then overlap check, then write.
//!
//! # Invariants
//! - Nothing is persisted unless the form is valid and the room is free.
//! - Overlaps are reported under `start_time`, like other time problems.

use crate::model::reservation::{ReservationDetails, ReservationDraft};
use crate::model::RecordId;
use crate::repo::kv_store::KeyValueStore;
use crate::service::reservation_service::ReservationService;
use crate::validate::forms::validate_reservation;
use crate::validate::FieldErrors;
use chrono::NaiveDate;
use log::info;

pub const ROOM_UNAVAILABLE_MESSAGE: &str = "Room is already booked for this time range";
pub const RESERVATION_NOT_FOUND_MESSAGE: &str = "Reservation not found";
pub const ID_SPACE_EXHAUSTED_MESSAGE: &str = "No reservation id is available";

pub struct BookingService<S: KeyValueStore> {
    reservations: ReservationService<S>,
}

impl<S: KeyValueStore> BookingService<S> {
    pub fn new(store: S) -> Self {
        Self {
            reservations: ReservationService::new(store),
        }
    }

    /// Books a room when the draft is valid for `today` and the slot is free.
    pub fn book(
        &self,
        draft: ReservationDraft,
        today: NaiveDate,
    ) -> Result<ReservationDetails, FieldErrors> {
        self.check(&draft, today, None)?;
        self.reservations
            .create(draft)
            .ok_or_else(|| id_error(ID_SPACE_EXHAUSTED_MESSAGE))
    }

    /// Moves or edits reservation `id`, ignoring its own current slot when
    /// checking for overlaps.
    pub fn reschedule(
        &self,
        id: RecordId,
        draft: ReservationDraft,
        today: NaiveDate,
    ) -> Result<ReservationDetails, FieldErrors> {
        self.check(&draft, today, Some(id))?;
        self.reservations
            .update(id, draft)
            .ok_or_else(|| id_error(RESERVATION_NOT_FOUND_MESSAGE))
    }

    fn check(
        &self,
        draft: &ReservationDraft,
        today: NaiveDate,
        exclude_id: Option<RecordId>,
    ) -> Result<(), FieldErrors> {
        validate_reservation(draft, today).into_result()?;

        if self.reservations.has_conflict(
            draft.room_id,
            &draft.date,
            &draft.start_time,
            &draft.end_time,
            exclude_id,
        ) {
            info!(
                "event=booking module=service status=rejected reason=room_unavailable room_id={} date={}",
                draft.room_id, draft.date
            );
            let mut errors = FieldErrors::new();
            errors.add("start_time", ROOM_UNAVAILABLE_MESSAGE);
            return Err(errors);
        }

        Ok(())
    }
}

fn id_error(message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.add("id", message);
    errors
}
