//! Room CRUD.

use crate::model::room::{Room, RoomDraft};
use crate::model::RecordId;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::slots::{next_id, position_of, read_records, write_records, ROOMS_KEY};
use log::{error, info};

pub struct RoomService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RoomService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_all(&self) -> Vec<Room> {
        read_records(&self.store, ROOMS_KEY)
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<Room> {
        self.get_all().into_iter().find(|room| room.id == id)
    }

    pub fn create(&self, draft: RoomDraft) -> Option<Room> {
        let mut rooms = self.get_all();
        let Some(id) = next_id(&rooms) else {
            error!(
                "event=record_create module=service entity=room status=error error_code=id_space_exhausted records={}",
                rooms.len()
            );
            return None;
        };
        let room = Room::from_draft(id, draft);
        rooms.push(room.clone());
        write_records(&self.store, ROOMS_KEY, &rooms);
        info!("event=record_create module=service entity=room status=ok id={id}");
        Some(room)
    }

    pub fn update(&self, id: RecordId, draft: RoomDraft) -> Option<Room> {
        let mut rooms = self.get_all();
        let index = position_of(&rooms, id)?;
        rooms[index] = Room::from_draft(id, draft);
        write_records(&self.store, ROOMS_KEY, &rooms);
        Some(rooms.swap_remove(index))
    }

    /// Removes the room; its reservations stay and resolve `room: None`.
    pub fn delete(&self, id: RecordId) -> bool {
        let mut rooms = self.get_all();
        let Some(index) = position_of(&rooms, id) else {
            return false;
        };
        rooms.remove(index);
        write_records(&self.store, ROOMS_KEY, &rooms);
        info!("event=record_delete module=service entity=room status=ok id={id}");
        true
    }
}
