//! Entity use-case services.
//!
//! # Responsibility
//! - CRUD over each record collection (`get_all`, `get_by_id`, `create`,
//!   `update`, `delete`).
//! - Attach related records at read time by linear-scan join.
//! - Reservation conflict detection and the validated booking flow.
//!
//! # Invariants
//! - New ids are `max(id) + 1` within the collection, starting at 1.
//! - Deletes never cascade; dangling references resolve to `None`.
//! - Services never fail outward; storage faults surface as empty reads or
//!   dropped writes.

pub mod booking_service;
pub mod company_service;
pub mod employee_service;
pub mod reservation_service;
pub mod room_service;
