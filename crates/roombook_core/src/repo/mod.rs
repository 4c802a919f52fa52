//! Key-value slot persistence.
//!
//! # Responsibility
//! - Define the `KeyValueStore` contract and its SQLite/memory backends.
//! - Read and write whole record collections as JSON arrays.
//!
//! # Invariants
//! - Slot reads never fail outward: faults degrade to an empty collection.
//! - Slot writes never fail outward: faults are logged and dropped.

pub mod kv_store;
pub mod slots;
