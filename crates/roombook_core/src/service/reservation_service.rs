//! Reservation CRUD, resolution and conflict detection.

use crate::model::employee::EmployeeDetails;
use crate::model::reservation::{Reservation, ReservationDetails, ReservationDraft, TimeRange};
use crate::model::room::Room;
use crate::model::RecordId;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::slots::{next_id, position_of, read_records, write_records, RESERVATIONS_KEY};
use crate::service::employee_service::EmployeeService;
use crate::service::room_service::RoomService;
use log::{debug, error, info, warn};

pub struct ReservationService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ReservationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All reservations with employee (and company) and room attached.
    pub fn get_all(&self) -> Vec<ReservationDetails> {
        let employees = EmployeeService::new(&self.store).get_all();
        let rooms = RoomService::new(&self.store).get_all();
        self.stored()
            .into_iter()
            .map(|reservation| attach_related(reservation, &employees, &rooms))
            .collect()
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<ReservationDetails> {
        self.get_all()
            .into_iter()
            .find(|details| details.reservation.id == id)
    }

    pub fn get_by_room(&self, room_id: RecordId) -> Vec<ReservationDetails> {
        self.filtered(|reservation| reservation.room_id == room_id)
    }

    pub fn get_by_employee(&self, employee_id: RecordId) -> Vec<ReservationDetails> {
        self.filtered(|reservation| reservation.employee_id == employee_id)
    }

    pub fn get_by_date(&self, date: &str) -> Vec<ReservationDetails> {
        self.filtered(|reservation| reservation.date == date)
    }

    /// Persists the draft as-is; callers wanting validation and conflict
    /// checks go through `BookingService`. `None` once ids are exhausted.
    pub fn create(&self, draft: ReservationDraft) -> Option<ReservationDetails> {
        let mut reservations = self.stored();
        let Some(id) = next_id(&reservations) else {
            error!(
                "event=record_create module=service entity=reservation status=error error_code=id_space_exhausted records={}",
                reservations.len()
            );
            return None;
        };
        let reservation = Reservation::from_draft(id, draft);
        reservations.push(reservation.clone());
        write_records(&self.store, RESERVATIONS_KEY, &reservations);
        info!(
            "event=record_create module=service entity=reservation status=ok id={} room_id={} date={}",
            reservation.id, reservation.room_id, reservation.date
        );
        Some(self.resolve(reservation))
    }

    pub fn update(&self, id: RecordId, draft: ReservationDraft) -> Option<ReservationDetails> {
        let mut reservations = self.stored();
        let index = position_of(&reservations, id)?;
        reservations[index] = Reservation::from_draft(id, draft);
        write_records(&self.store, RESERVATIONS_KEY, &reservations);
        Some(self.resolve(reservations.swap_remove(index)))
    }

    pub fn delete(&self, id: RecordId) -> bool {
        let mut reservations = self.stored();
        let Some(index) = position_of(&reservations, id) else {
            return false;
        };
        reservations.remove(index);
        write_records(&self.store, RESERVATIONS_KEY, &reservations);
        info!("event=record_delete module=service entity=reservation status=ok id={id}");
        true
    }

    /// Returns whether `[start_time, end_time)` overlaps any other reservation
    /// of `room_id` on `date`.
    ///
    /// `exclude_id` skips the reservation being edited. Stored reservations
    /// with unparsable times are skipped.
    ///
    /// `false` does not mean the room is free when the requested times are
    /// malformed: an unparsable `start_time` or `end_time` always yields
    /// `false`. Validate the times first with
    /// [`validate_reservation_hours`](crate::validate::fields::validate_reservation_hours),
    /// or book through `BookingService`, which does both.
    pub fn has_conflict(
        &self,
        room_id: RecordId,
        date: &str,
        start_time: &str,
        end_time: &str,
        exclude_id: Option<RecordId>,
    ) -> bool {
        let Some(requested) = TimeRange::parse(start_time, end_time) else {
            debug!(
                "event=conflict_check module=service status=skipped room_id={room_id} reason=unparsable_request"
            );
            return false;
        };

        self.stored()
            .iter()
            .filter(|existing| {
                existing.room_id == room_id
                    && existing.date == date
                    && Some(existing.id) != exclude_id
            })
            .filter_map(|existing| match existing.time_range() {
                Some(range) => Some(range),
                None => {
                    warn!(
                        "event=conflict_check module=service status=skipped reservation_id={} reason=unparsable_stored_times",
                        existing.id
                    );
                    None
                }
            })
            .any(|existing| existing.overlaps(&requested))
    }

    fn stored(&self) -> Vec<Reservation> {
        read_records(&self.store, RESERVATIONS_KEY)
    }

    fn filtered(&self, predicate: impl Fn(&Reservation) -> bool) -> Vec<ReservationDetails> {
        self.get_all()
            .into_iter()
            .filter(|details| predicate(&details.reservation))
            .collect()
    }

    fn resolve(&self, reservation: Reservation) -> ReservationDetails {
        let employees = EmployeeService::new(&self.store).get_all();
        let rooms = RoomService::new(&self.store).get_all();
        attach_related(reservation, &employees, &rooms)
    }
}

fn attach_related(
    reservation: Reservation,
    employees: &[EmployeeDetails],
    rooms: &[Room],
) -> ReservationDetails {
    let employee = employees
        .iter()
        .find(|details| details.employee.id == reservation.employee_id)
        .cloned();
    let room = rooms
        .iter()
        .find(|room| room.id == reservation.room_id)
        .cloned();
    ReservationDetails {
        reservation,
        employee,
        room,
    }
}
