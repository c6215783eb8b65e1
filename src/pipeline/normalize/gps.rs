use crate::pipeline::normalize::{parse_calendar_date, NormalizeReport, Normalized, Normalizer};
use crate::pipeline::numeric::coerce;
use crate::types::session::{DayType, GpsColumn, GpsMetrics, SessionDate, SessionRecord, GPS_TEXT_COLUMNS};
use crate::types::table::{cell, RawTable};
use crate::types::value::CoercionMode;

pub struct GpsNormalizer;

enum NumericTarget {
    Declared(GpsColumn),
    Extra(String),
}

impl Normalizer for GpsNormalizer {
    type Record = SessionRecord;

    fn normalize(&self, raw: &RawTable) -> Normalized<SessionRecord> {
        let date_idx = raw.column_index("date");
        let day_type_idx = raw.column_index("day_type");
        let session_idx = raw.column_index("session");
        let athlete_idx = raw.column_index("athlete_name");

        let numeric: Vec<(usize, NumericTarget)> = raw
            .headers()
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.is_empty() && !GPS_TEXT_COLUMNS.contains(&h.as_str()))
            .map(|(idx, h)| {
                let target = match GpsColumn::from_header(h) {
                    Some(column) => NumericTarget::Declared(column),
                    None => NumericTarget::Extra(h.clone()),
                };
                (idx, target)
            })
            .collect();

        let mut report = NormalizeReport {
            rows_read: raw.len(),
            ..Default::default()
        };
        let mut records = Vec::with_capacity(raw.len());

        for row in raw.rows() {
            let date_text = cell(row, date_idx);
            let date = match parse_calendar_date(date_text) {
                Some(d) => SessionDate::Date(d),
                None => {
                    report.unparsed_dates += 1;
                    SessionDate::Unparsed(date_text.trim().to_string())
                }
            };

            let mut metrics = GpsMetrics::default();
            for (idx, target) in &numeric {
                let value = coerce(&row[*idx], CoercionMode::ZeroFill);
                match target {
                    NumericTarget::Declared(column) => metrics.set(*column, value),
                    NumericTarget::Extra(name) => {
                        metrics.extra.insert(name.clone(), value);
                    }
                }
            }

            records.push(SessionRecord {
                date,
                session: cell(row, session_idx).trim().to_string(),
                day_type: DayType::from_cell(cell(row, day_type_idx)),
                athlete_name: cell(row, athlete_idx).trim().to_string(),
                metrics,
            });
        }

        report.rows_kept = records.len();
        if report.unparsed_dates > 0 {
            tracing::warn!(
                "GPS sheet: {} row(s) kept with an unparseable date",
                report.unparsed_dates
            );
        }

        Normalized { records, report }
    }
}

pub fn gps_to_raw(records: &[SessionRecord]) -> RawTable {
    let mut extra_headers: Vec<String> = records
        .iter()
        .flat_map(|r| r.metrics.extra.keys().cloned())
        .collect();
    extra_headers.sort();
    extra_headers.dedup();

    let mut headers: Vec<String> = GPS_TEXT_COLUMNS.iter().map(|h| h.to_string()).collect();
    headers.extend(GpsColumn::ALL.iter().map(|c| c.header().to_string()));
    headers.extend(extra_headers.iter().cloned());

    let rows = records
        .iter()
        .map(|r| {
            let mut row = vec![
                r.date.to_cell(),
                r.day_type.to_string(),
                r.session.clone(),
                r.athlete_name.clone(),
            ];
            row.extend(GpsColumn::ALL.iter().map(|c| r.metric(*c).to_cell()));
            row.extend(extra_headers.iter().map(|h| {
                r.metrics.extra.get(h).map(|v| v.to_cell()).unwrap_or_default()
            }));
            row
        })
        .collect();

    RawTable::new(headers, rows)
}
