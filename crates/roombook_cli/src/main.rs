//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open the slot database, seed sample data when empty, print counts.
//! - Keep output deterministic `key=value` lines for quick sanity checks.
//!
//! # Configuration
//! - `ROOMBOOK_DB_PATH`: database file (default: `<tmp>/roombook.sqlite3`).
//! - `ROOMBOOK_LOG_DIR`: absolute log directory; logging is off when unset.
//! - `ROOMBOOK_LOG_LEVEL`: `trace|debug|info|warn|error` (default by build).

use roombook_core::db::open_db;
use roombook_core::{
    core_version, default_log_level, init_logging, seed_sample_data, CompanyService,
    EmployeeService, ReservationService, RoomService, SqliteKeyValueStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

const DB_FILE_NAME: &str = "roombook.sqlite3";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("roombook error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    if let Some(log_dir) = env_value("ROOMBOOK_LOG_DIR") {
        let level = env_value("ROOMBOOK_LOG_LEVEL").unwrap_or_else(|| default_log_level().into());
        init_logging(&level, &log_dir)?;
    }

    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("db open failed: {err}"))?;
    let store =
        SqliteKeyValueStore::try_new(&conn).map_err(|err| format!("store init failed: {err}"))?;

    let today = chrono::Local::now().date_naive();
    let seeded = seed_sample_data(&store, today).is_some();

    println!("roombook version={}", core_version());
    println!("roombook db_path={}", db_path.display());
    println!("roombook seeded={seeded}");
    println!(
        "roombook companies={}",
        CompanyService::new(&store).get_all().len()
    );
    println!(
        "roombook employees={}",
        EmployeeService::new(&store).get_all().len()
    );
    println!("roombook rooms={}", RoomService::new(&store).get_all().len());
    println!(
        "roombook reservations={}",
        ReservationService::new(&store).get_all().len()
    );
    log::info!("event=cli_run module=cli status=ok seeded={seeded}");
    Ok(())
}

fn resolve_db_path() -> PathBuf {
    env_value("ROOMBOOK_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME))
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
