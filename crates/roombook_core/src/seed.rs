//! Sample data for demos and manual testing.

use crate::model::company::CompanyDraft;
use crate::model::employee::EmployeeDraft;
use crate::model::reservation::ReservationDraft;
use crate::model::room::RoomDraft;
use crate::model::RecordId;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::slots::{clear_slot, ALL_SLOT_KEYS};
use crate::service::company_service::CompanyService;
use crate::service::employee_service::EmployeeService;
use crate::service::reservation_service::ReservationService;
use crate::service::room_service::RoomService;
use chrono::{Days, NaiveDate};
use log::{error, info};

const SAMPLE_COMPANIES: &[(&str, &str)] = &[
    ("Tech Solutions Ltda", "11.222.333/0001-81"),
    ("Inovação Digital S.A.", "22.333.444/0001-81"),
    ("Consultoria Empresarial", "33.444.555/0001-81"),
];

/// `(name, index into SAMPLE_COMPANIES)`.
const SAMPLE_EMPLOYEES: &[(&str, usize)] = &[
    ("João Silva", 0),
    ("Maria Santos", 0),
    ("Pedro Oliveira", 1),
    ("Ana Costa", 1),
    ("Carlos Ferreira", 2),
];

const SAMPLE_ROOMS: &[(&str, i32)] = &[
    ("Meeting Room A", 8),
    ("Meeting Room B", 12),
    ("Main Auditorium", 50),
    ("Training Room", 20),
    ("Conference Room", 6),
];

/// `(days after today, employee index, room index, start, end)`.
const SAMPLE_RESERVATIONS: &[(u64, usize, usize, &str, &str)] = &[
    (1, 0, 0, "09:00", "10:30"),
    (1, 1, 1, "14:00", "16:00"),
    (1, 2, 2, "10:00", "12:00"),
    (2, 3, 3, "08:00", "10:00"),
    (2, 4, 4, "15:00", "17:00"),
];

/// Record counts per collection after seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub companies: usize,
    pub employees: usize,
    pub rooms: usize,
    pub reservations: usize,
}

/// Populates every collection with sample records unless companies exist.
///
/// Reservations are placed one and two days after `today`. Returns `None`
/// when data was already present, or when a collection ran out of ids
/// partway through.
pub fn seed_sample_data<S: KeyValueStore>(store: &S, today: NaiveDate) -> Option<SeedSummary> {
    let companies = CompanyService::new(store);
    if !companies.get_all().is_empty() {
        info!("event=seed module=seed status=skipped reason=data_present");
        return None;
    }

    let summary = insert_samples(store, today);
    match summary {
        Some(summary) => info!(
            "event=seed module=seed status=ok companies={} employees={} rooms={} reservations={}",
            summary.companies, summary.employees, summary.rooms, summary.reservations
        ),
        None => error!("event=seed module=seed status=error error_code=id_space_exhausted"),
    }
    summary
}

fn insert_samples<S: KeyValueStore>(store: &S, today: NaiveDate) -> Option<SeedSummary> {
    let companies = CompanyService::new(store);
    let employees = EmployeeService::new(store);
    let rooms = RoomService::new(store);
    let reservations = ReservationService::new(store);

    let company_ids: Vec<RecordId> = SAMPLE_COMPANIES
        .iter()
        .map(|(name, tax_id)| {
            companies
                .create(CompanyDraft {
                    name: (*name).to_string(),
                    tax_id: (*tax_id).to_string(),
                })
                .map(|company| company.id)
        })
        .collect::<Option<_>>()?;

    let employee_ids: Vec<RecordId> = SAMPLE_EMPLOYEES
        .iter()
        .map(|(name, company)| {
            employees
                .create(EmployeeDraft {
                    name: (*name).to_string(),
                    company_id: company_ids[*company],
                })
                .map(|details| details.employee.id)
        })
        .collect::<Option<_>>()?;

    let room_ids: Vec<RecordId> = SAMPLE_ROOMS
        .iter()
        .map(|(name, capacity)| {
            rooms
                .create(RoomDraft {
                    name: (*name).to_string(),
                    capacity: *capacity,
                })
                .map(|room| room.id)
        })
        .collect::<Option<_>>()?;

    for (offset, employee, room, start, end) in SAMPLE_RESERVATIONS {
        let date = today.checked_add_days(Days::new(*offset)).unwrap_or(today);
        reservations.create(ReservationDraft {
            employee_id: employee_ids[*employee],
            room_id: room_ids[*room],
            date: date.format("%Y-%m-%d").to_string(),
            start_time: (*start).to_string(),
            end_time: (*end).to_string(),
        })?;
    }

    Some(SeedSummary {
        companies: companies.get_all().len(),
        employees: employees.get_all().len(),
        rooms: rooms.get_all().len(),
        reservations: reservations.get_all().len(),
    })
}

/// Removes every slot owned by this crate.
pub fn clear_all_data<S: KeyValueStore>(store: &S) {
    for key in ALL_SLOT_KEYS {
        clear_slot(store, key);
    }
    info!("event=clear_data module=seed status=ok slots={}", ALL_SLOT_KEYS.len());
}
