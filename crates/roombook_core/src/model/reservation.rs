//! Reservation record, its resolved read model and time-of-day ranges.
//!
//! # Invariants
//! - `date` is `YYYY-MM-DD`; `start_time`/`end_time` are `H:MM` or `HH:MM`.
//! - Time ranges are half-open: `[start, end)`.
//! - Nothing here enforces `start < end`; forms do.

use super::employee::EmployeeDetails;
use super::room::Room;
use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: u16 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub room_id: RecordId,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub employee_id: RecordId,
    pub room_id: RecordId,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Reservation with employee (and their company) and room attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetails {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub employee: Option<EmployeeDetails>,
    pub room: Option<Room>,
}

impl Reservation {
    pub fn from_draft(id: RecordId, draft: ReservationDraft) -> Self {
        Self {
            id,
            employee_id: draft.employee_id,
            room_id: draft.room_id,
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
        }
    }

    /// Parsed `[start_time, end_time)`, or `None` if either side is malformed.
    pub fn time_range(&self) -> Option<TimeRange> {
        TimeRange::parse(&self.start_time, &self.end_time)
    }
}

impl Record for Reservation {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Half-open range of minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: u16,
    pub end: u16,
}

impl TimeRange {
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            start: parse_clock_time(start)?,
            end: parse_clock_time(end)?,
        })
    }

    pub fn duration_minutes(&self) -> i32 {
        i32::from(self.end) - i32::from(self.start)
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Parses `H:MM`/`HH:MM` (24h) into minutes since midnight.
pub fn parse_clock_time(value: &str) -> Option<u16> {
    let (hours, minutes) = value.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    if hours > 23 || minutes >= MINUTES_PER_HOUR {
        return None;
    }
    Some(hours * MINUTES_PER_HOUR + minutes)
}
