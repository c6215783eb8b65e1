mod gps;
mod wellness;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::types::session::SessionRecord;
use crate::types::table::RawTable;
use crate::types::wellness::WellnessRecord;

pub use gps::{gps_to_raw, GpsNormalizer};
pub use wellness::{wellness_to_raw, WellnessNormalizer};

pub trait Normalizer {
    type Record;

    fn normalize(&self, raw: &RawTable) -> Normalized<Self::Record>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<R> {
    pub records: Vec<R>,
    pub report: NormalizeReport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
    pub unparsed_dates: usize,
}

pub fn normalize_gps(raw: &RawTable) -> Normalized<SessionRecord> {
    GpsNormalizer.normalize(raw)
}

pub fn normalize_wellness(raw: &RawTable) -> Normalized<WellnessRecord> {
    WellnessNormalizer.normalize(raw)
}

// Slash dates are tried month-first and fall back to day-first, so
// "01/05/2024" is 5 January while "25/05/2024" is 25 May.
const DATETIME_FORMATS: [&str; 10] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y/%m/%d",
];

/// Parses a timestamp cell; date-only text reads as midnight.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    parse_timestamp(text).map(|ts| ts.date())
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
