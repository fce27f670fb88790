//! Date rendering used by the dashboard views and the reports.
//!
//! Reports follow the Portuguese convention (`dd/mm/yyyy`), fixture cards use
//! the short English `Mon D` label.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

pub fn pt_date(dt: &DateTime<Local>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

pub fn pt_date_time(dt: &DateTime<Local>) -> String {
    dt.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2026-10-19T08:15:00.000Z`.
pub fn iso_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn iso_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Parses the date strings sent by the analytics service. Timestamps carrying
/// an offset are shifted into local time, naive ones are taken as local.
pub fn parse_match_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `dd/mm/yyyy` for a match date, or the raw value when it can't be parsed.
pub fn pt_match_date(raw: &str) -> String {
    parse_match_date(raw)
        .map(|e| e.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn short_month_day(raw: &str) -> Option<String> {
    parse_match_date(raw).map(|e| e.format("%b %-d").to_string())
}
