//! Single-field validators.
//!
//! Message-returning checks yield `None` when the value is acceptable.

use crate::model::reservation::TimeRange;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_CAPACITY: i32 = 1;
pub const MAX_CAPACITY: i32 = 1000;
pub const MAX_RESERVATION_MINUTES: i32 = 8 * 60;

const DATE_FORMAT: &str = "%Y-%m-%d";

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// `"{label} is required"` when `value` is empty or whitespace.
pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else {
        None
    }
}

/// 24h `H:MM` or `HH:MM`.
pub fn is_valid_time(value: &str) -> bool {
    TIME_RE.is_match(value)
}

/// `YYYY-MM-DD` naming a real calendar day.
pub fn is_valid_date_format(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Parses a `YYYY-MM-DD` string; `None` for other shapes or impossible days.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Today or later.
pub fn is_not_in_past(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Well-formed date that is today or later.
pub fn is_valid_reservation_date(value: &str, today: NaiveDate) -> bool {
    parse_date(value).is_some_and(|date| is_not_in_past(date, today))
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Capacity must fall within `MIN_CAPACITY..=MAX_CAPACITY`.
pub fn validate_capacity(capacity: i32) -> Option<String> {
    if capacity < MIN_CAPACITY {
        return Some("Capacity must be greater than zero".to_string());
    }
    if capacity > MAX_CAPACITY {
        return Some(format!("Capacity cannot exceed {MAX_CAPACITY}"));
    }
    None
}

/// Checks a reservation's `[start, end)` window.
///
/// Both times must be well-formed, start must precede end and the window may
/// last at most eight hours.
pub fn validate_reservation_hours(start: &str, end: &str) -> Option<String> {
    if !is_valid_time(start) {
        return Some("Invalid start time".to_string());
    }
    if !is_valid_time(end) {
        return Some("Invalid end time".to_string());
    }

    let Some(range) = TimeRange::parse(start, end) else {
        return Some("Invalid time range".to_string());
    };
    if range.start >= range.end {
        return Some("End time must be after start time".to_string());
    }
    if range.duration_minutes() > MAX_RESERVATION_MINUTES {
        return Some("Reservation cannot exceed 8 hours".to_string());
    }
    None
}

/// Renders `YYYY-MM-DD` as `DD/MM/YYYY`; other shapes are returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, DATE_FORMAT).unwrap()
    }

    #[test]
    fn required_rejects_blank_values() {
        assert_eq!(required("  ", "Name").as_deref(), Some("Name is required"));
        assert_eq!(required("Acme", "Name"), None);
    }

    #[test]
    fn time_format_is_24h() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("9:15"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("12:5"));
        assert!(!is_valid_time("noon"));
    }

    #[test]
    fn date_format_requires_real_calendar_day() {
        assert!(is_valid_date_format("2026-02-28"));
        assert!(!is_valid_date_format("2026-02-30"));
        assert!(!is_valid_date_format("2026-2-28"));
        assert!(!is_valid_date_format("28/02/2026"));
    }

    #[test]
    fn reservation_date_allows_today_and_future_only() {
        let today = day("2026-10-18");
        assert!(is_valid_reservation_date("2026-10-18", today));
        assert!(is_valid_reservation_date("2027-01-01", today));
        assert!(!is_valid_reservation_date("2026-10-17", today));
        assert!(!is_valid_reservation_date("tomorrow", today));
    }

    #[test]
    fn capacity_is_bounded() {
        assert!(validate_capacity(0).is_some());
        assert!(validate_capacity(-3).is_some());
        assert!(validate_capacity(1).is_none());
        assert!(validate_capacity(1000).is_none());
        assert!(validate_capacity(1001).is_some());
    }

    #[test]
    fn reservation_hours_cap_duration_at_eight_hours() {
        assert_eq!(validate_reservation_hours("09:00", "17:00"), None);
        assert_eq!(
            validate_reservation_hours("09:00", "18:00").as_deref(),
            Some("Reservation cannot exceed 8 hours")
        );
    }

    #[test]
    fn reservation_hours_require_start_before_end() {
        assert_eq!(
            validate_reservation_hours("10:00", "10:00").as_deref(),
            Some("End time must be after start time")
        );
        assert_eq!(
            validate_reservation_hours("11:00", "10:00").as_deref(),
            Some("End time must be after start time")
        );
        assert_eq!(validate_reservation_hours("9:00", "10:00"), None);
    }

    #[test]
    fn reservation_hours_report_which_side_is_malformed() {
        assert_eq!(
            validate_reservation_hours("9h", "10:00").as_deref(),
            Some("Invalid start time")
        );
        assert_eq!(
            validate_reservation_hours("09:00", "").as_deref(),
            Some("Invalid end time")
        );
    }

    #[test]
    fn email_needs_local_part_domain_and_tld() {
        assert!(is_valid_email("ana@tech.com.br"));
        assert!(!is_valid_email("ana@tech"));
        assert!(!is_valid_email("ana tech@x.io"));
    }

    #[test]
    fn format_date_uses_day_first() {
        assert_eq!(format_date("2026-10-18"), "18/10/2026");
        assert_eq!(format_date("bogus"), "bogus");
    }
}
