use roombook_core::db::migrations::latest_version;
use roombook_core::db::{open_db, open_db_in_memory};
use roombook_core::repo::slots::{COMPANIES_KEY, ROOMS_KEY};
use roombook_core::{
    CompanyDraft, CompanyService, KeyValueStore, RoomDraft, RoomService, SqliteKeyValueStore,
    StoreError, StoreResult,
};
use rusqlite::Connection;

/// Reads succeed with a fixed payload; every write is refused.
struct ReadOnlyStore {
    payload: Option<String>,
}

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("quota exceeded".to_string()))
    }

    fn remove_item(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("quota exceeded".to_string()))
    }
}

/// Every operation fails.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Unavailable("disk gone".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("disk gone".to_string()))
    }

    fn remove_item(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("disk gone".to_string()))
    }
}

#[test]
fn sqlite_store_set_get_remove() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();

    assert_eq!(store.get_item("missing").unwrap(), None);
    store.set_item("k", "[1]").unwrap();
    store.set_item("k", "[2]").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("[2]"));

    store.remove_item("k").unwrap();
    store.remove_item("k").unwrap();
    assert_eq!(store.get_item("k").unwrap(), None);
}

#[test]
fn records_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.db");

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteKeyValueStore::try_new(&conn).unwrap();
        RoomService::new(&store)
            .create(RoomDraft {
                name: "Meeting Room A".to_string(),
                capacity: 8,
            })
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    let rooms = RoomService::new(&store).get_all();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, 1);
    assert_eq!(rooms[0].capacity, 8);

    let raw = store.get_item(ROOMS_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['), "slot should hold a JSON array: {raw}");
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteKeyValueStore::try_new(&conn) {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_slots_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteKeyValueStore::try_new(&conn),
        Err(StoreError::MissingRequiredTable("kv_slots"))
    ));
}

#[test]
fn store_rejects_slots_table_missing_a_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE kv_slots (key TEXT PRIMARY KEY NOT NULL, value TEXT);")
        .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteKeyValueStore::try_new(&conn),
        Err(StoreError::MissingRequiredColumn {
            table: "kv_slots",
            column: "updated_at"
        })
    ));
}

#[test]
fn corrupt_slot_reads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    store.set_item(COMPANIES_KEY, "not json at all").unwrap();

    let service = CompanyService::new(&store);
    assert!(service.get_all().is_empty());

    let created = service
        .create(CompanyDraft {
            name: "Tech Solutions Ltda".to_string(),
            tax_id: "11.222.333/0001-81".to_string(),
        })
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(service.get_all(), vec![created]);
}

#[test]
fn failed_writes_are_swallowed() {
    let store = ReadOnlyStore {
        payload: Some(r#"[{"id": 3, "name": "Acme", "tax_id": "11222333000181"}]"#.to_string()),
    };
    let service = CompanyService::new(&store);

    let created = service
        .create(CompanyDraft {
            name: "Beta".to_string(),
            tax_id: "11222333000181".to_string(),
        })
        .unwrap();
    assert_eq!(created.id, 4);

    // Nothing was persisted, so the stored view is unchanged.
    assert_eq!(service.get_all().len(), 1);
    assert!(service.delete(3));
    assert_eq!(service.get_all().len(), 1);
}

#[test]
fn failed_reads_default_to_empty() {
    let service = RoomService::new(BrokenStore);

    assert!(service.get_all().is_empty());
    assert_eq!(service.get_by_id(1), None);
    assert_eq!(service.update(1, RoomDraft::default()), None);
    assert!(!service.delete(1));

    let room = service
        .create(RoomDraft {
            name: "Ghost".to_string(),
            capacity: 2,
        })
        .unwrap();
    assert_eq!(room.id, 1);
}
