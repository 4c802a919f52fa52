//! Whole-collection reads and writes over a `KeyValueStore`.
//!
//! Each record type lives in one slot as a JSON array. Faults are logged as
//! `slot_read`/`slot_write` events and replaced with a safe default.

use crate::model::{Record, RecordId};
use crate::repo::kv_store::KeyValueStore;
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const COMPANIES_KEY: &str = "condo_companies";
pub const EMPLOYEES_KEY: &str = "condo_employees";
pub const ROOMS_KEY: &str = "condo_rooms";
pub const RESERVATIONS_KEY: &str = "condo_reservations";

/// Every slot owned by this crate.
pub const ALL_SLOT_KEYS: &[&str] = &[COMPANIES_KEY, EMPLOYEES_KEY, ROOMS_KEY, RESERVATIONS_KEY];

/// Loads the collection stored under `key`.
///
/// Missing slots, store faults and unparsable payloads all yield an empty
/// collection.
pub fn read_records<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!(
                "event=slot_read module=repo status=error key={} error_code=store_read_failed error={}",
                key, err
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(
                "event=slot_read module=repo status=error key={} error_code=invalid_json payload_len={} error={}",
                key,
                raw.len(),
                err
            );
            Vec::new()
        }
    }
}

/// Replaces the collection stored under `key`; faults are logged and dropped.
pub fn write_records<T, S>(store: &S, key: &str, records: &[T])
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let payload = match serde_json::to_string(records) {
        Ok(payload) => payload,
        Err(err) => {
            error!(
                "event=slot_write module=repo status=error key={} error_code=serialize_failed error={}",
                key, err
            );
            return;
        }
    };

    if let Err(err) = store.set_item(key, &payload) {
        error!(
            "event=slot_write module=repo status=error key={} error_code=store_write_failed records={} error={}",
            key,
            records.len(),
            err
        );
    }
}

/// Removes the slot under `key`; faults are logged and dropped.
pub fn clear_slot<S>(store: &S, key: &str)
where
    S: KeyValueStore + ?Sized,
{
    if let Err(err) = store.remove_item(key) {
        error!(
            "event=slot_clear module=repo status=error key={} error={}",
            key, err
        );
    }
}

/// `max(id) + 1`, or `1` for an empty collection.
///
/// `None` once the collection already holds `RecordId::MAX`; handing out
/// that id again would duplicate it.
pub fn next_id<T: Record>(records: &[T]) -> Option<RecordId> {
    match records.iter().map(|record| record.id()).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Position of the record with `id`.
pub fn position_of<T: Record>(records: &[T], id: RecordId) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}
