//! Per-record form validation.
//!
//! Field keys match the serialized record field names.

use super::cnpj::is_valid_cnpj;
use super::fields::{
    is_valid_reservation_date, required, validate_capacity, validate_reservation_hours,
};
use super::FieldErrors;
use crate::model::company::CompanyDraft;
use crate::model::employee::EmployeeDraft;
use crate::model::reservation::ReservationDraft;
use crate::model::room::RoomDraft;
use chrono::NaiveDate;

pub fn validate_company(draft: &CompanyDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(message) = required(&draft.name, "Name") {
        errors.add("name", message);
    }

    if let Some(message) = required(&draft.tax_id, "CNPJ") {
        errors.add("tax_id", message);
    } else if !is_valid_cnpj(&draft.tax_id) {
        errors.add("tax_id", "Invalid CNPJ");
    }

    errors
}

pub fn validate_employee(draft: &EmployeeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(message) = required(&draft.name, "Name") {
        errors.add("name", message);
    }
    if draft.company_id == 0 {
        errors.add("company_id", "Company is required");
    }

    errors
}

pub fn validate_room(draft: &RoomDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(message) = required(&draft.name, "Name") {
        errors.add("name", message);
    }
    if let Some(message) = validate_capacity(draft.capacity) {
        errors.add("capacity", message);
    }

    errors
}

/// Validates a reservation form against `today`.
///
/// Time-window problems are reported under `start_time`.
pub fn validate_reservation(draft: &ReservationDraft, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.employee_id == 0 {
        errors.add("employee_id", "Employee is required");
    }
    if draft.room_id == 0 {
        errors.add("room_id", "Room is required");
    }

    if draft.date.trim().is_empty() {
        errors.add("date", "Date is required");
    } else if !is_valid_reservation_date(&draft.date, today) {
        errors.add("date", "Date is invalid or in the past");
    }

    if let Some(message) = validate_reservation_hours(&draft.start_time, &draft.end_time) {
        errors.add("start_time", message);
    }

    errors
}
