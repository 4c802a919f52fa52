//! Records persisted in the key-value slots and their read models.
//!
//! # Invariants
//! - Every record carries a `RecordId` unique within its own collection.
//! - Foreign keys are plain ids; nothing here enforces that they resolve.

pub mod company;
pub mod employee;
pub mod reservation;
pub mod room;

/// Sequential per-collection identifier, starting at 1.
pub type RecordId = u64;

/// A stored record addressable by its collection-local id.
pub trait Record {
    fn id(&self) -> RecordId;
}
