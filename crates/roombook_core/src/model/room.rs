//! Bookable room record.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RecordId,
    pub name: String,
    /// Seats; forms accept 1..=1000.
    pub capacity: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub name: String,
    pub capacity: i32,
}

impl Room {
    pub fn from_draft(id: RecordId, draft: RoomDraft) -> Self {
        Self {
            id,
            name: draft.name,
            capacity: draft.capacity,
        }
    }
}

impl Record for Room {
    fn id(&self) -> RecordId {
        self.id
    }
}
