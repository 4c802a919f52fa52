use chrono::NaiveDate;
use roombook_core::validate::forms::{validate_company, validate_room};
use roombook_core::{
    clear_all_data, seed_sample_data, CompanyDraft, CompanyService, KeyValueStore,
    MemoryKeyValueStore, ReservationService, RoomDraft, RoomService, SeedSummary,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[test]
fn seeding_populates_every_collection_once() {
    let store = MemoryKeyValueStore::new();

    let summary = seed_sample_data(&store, today()).unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            companies: 3,
            employees: 5,
            rooms: 5,
            reservations: 5,
        }
    );

    assert_eq!(seed_sample_data(&store, today()), None);
    assert_eq!(CompanyService::new(&store).get_all().len(), 3);
}

#[test]
fn seeded_records_pass_form_validation_and_resolve() {
    let store = MemoryKeyValueStore::new();
    seed_sample_data(&store, today()).unwrap();

    for company in CompanyService::new(&store).get_all() {
        let draft = CompanyDraft {
            name: company.name.clone(),
            tax_id: company.tax_id.clone(),
        };
        assert!(validate_company(&draft).is_empty(), "{}", company.name);
    }
    for room in RoomService::new(&store).get_all() {
        let draft = RoomDraft {
            name: room.name.clone(),
            capacity: room.capacity,
        };
        assert!(validate_room(&draft).is_empty(), "{}", room.name);
    }

    let reservations = ReservationService::new(&store).get_all();
    assert!(reservations
        .iter()
        .all(|item| item.employee.is_some() && item.room.is_some()));
    assert_eq!(
        ReservationService::new(&store)
            .get_by_date("2026-10-19")
            .len(),
        3
    );
    assert_eq!(
        ReservationService::new(&store)
            .get_by_date("2026-10-20")
            .len(),
        2
    );
}

#[test]
fn clearing_removes_every_slot() {
    let store = MemoryKeyValueStore::new();
    seed_sample_data(&store, today()).unwrap();
    store.set_item("unrelated", "keep").unwrap();

    clear_all_data(&store);

    assert_eq!(store.len(), 1);
    assert!(CompanyService::new(&store).get_all().is_empty());
    assert!(seed_sample_data(&store, today()).is_some());
}

#[test]
fn seeding_stops_when_a_collection_has_no_free_id() {
    use roombook_core::repo::slots::ROOMS_KEY;
    use roombook_core::RecordId;

    let store = MemoryKeyValueStore::new();
    let rooms = format!(r#"[{{"id":{},"name":"Vault","capacity":4}}]"#, RecordId::MAX);
    store.set_item(ROOMS_KEY, &rooms).unwrap();

    assert_eq!(seed_sample_data(&store, today()), None);
    assert_eq!(store.get_item(ROOMS_KEY).unwrap(), Some(rooms));
    assert!(ReservationService::new(&store).get_all().is_empty());
}
