//! Core of the condominium room-booking tool.
//!
//! Companies, employees, rooms and reservations are kept as JSON arrays in
//! string-keyed slots of a `KeyValueStore` (SQLite-backed or in-memory).
//! Services provide CRUD plus read-time joins, the reservation overlap check
//! and a validated booking flow.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::company::{Company, CompanyDraft};
pub use model::employee::{Employee, EmployeeDetails, EmployeeDraft};
pub use model::reservation::{Reservation, ReservationDetails, ReservationDraft, TimeRange};
pub use model::room::{Room, RoomDraft};
pub use model::{Record, RecordId};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use seed::{clear_all_data, seed_sample_data, SeedSummary};
pub use service::booking_service::BookingService;
pub use service::company_service::CompanyService;
pub use service::employee_service::EmployeeService;
pub use service::reservation_service::ReservationService;
pub use service::room_service::RoomService;
pub use validate::FieldErrors;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
