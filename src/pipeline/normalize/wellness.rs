use crate::pipeline::normalize::{is_blank, non_empty, parse_timestamp, NormalizeReport, Normalized, Normalizer};
use crate::pipeline::numeric::{coerce, extract_ordinal};
use crate::types::table::{cell, RawTable};
use crate::types::value::{CoercionMode, NumericValue};
use crate::types::wellness::{
    WellnessMetric, WellnessRecord, MUSCLE_PAIN_COLUMN, NAME_COLUMN, SLEEP_HOURS_COLUMN,
    TIMESTAMP_COLUMN, URINE_COLOR_COLUMN,
};

pub struct WellnessNormalizer;

impl Normalizer for WellnessNormalizer {
    type Record = WellnessRecord;

    fn normalize(&self, raw: &RawTable) -> Normalized<WellnessRecord> {
        let timestamp_idx = raw.column_index(TIMESTAMP_COLUMN);
        let name_idx = raw.column_index(NAME_COLUMN);
        let urine_idx = raw.column_index(URINE_COLOR_COLUMN);
        let sleep_idx = raw.column_index(SLEEP_HOURS_COLUMN);
        let pain_idx = raw.column_index(MUSCLE_PAIN_COLUMN);
        let metric_idx: Vec<(WellnessMetric, Option<usize>)> = WellnessMetric::ALL
            .into_iter()
            .map(|m| (m, raw.column_index(m.header())))
            .collect();

        let mut report = NormalizeReport {
            rows_read: raw.len(),
            ..Default::default()
        };
        let mut records = Vec::with_capacity(raw.len());

        for row in raw.rows() {
            if is_blank(row) {
                report.rows_dropped += 1;
                continue;
            }
            let Some(timestamp) = parse_timestamp(cell(row, timestamp_idx)) else {
                report.rows_dropped += 1;
                continue;
            };

            let score = |metric: WellnessMetric| -> NumericValue {
                let idx = metric_idx
                    .iter()
                    .find(|(m, _)| *m == metric)
                    .and_then(|(_, idx)| *idx);
                let text = cell(row, idx);
                if metric.is_ordinal() {
                    extract_ordinal(text)
                } else {
                    coerce(text, CoercionMode::MissingPreserving)
                }
            };

            records.push(WellnessRecord {
                timestamp,
                date: timestamp.date(),
                name: cell(row, name_idx).trim().to_string(),
                fatigue: score(WellnessMetric::Fatigue),
                sleep_quality: score(WellnessMetric::SleepQuality),
                muscle_discomfort: score(WellnessMetric::MuscleDiscomfort),
                mood: score(WellnessMetric::Mood),
                recovery: score(WellnessMetric::Recovery),
                urine_color: non_empty(cell(row, urine_idx)),
                sleep_hours: non_empty(cell(row, sleep_idx)),
                muscle_pain_location: non_empty(cell(row, pain_idx)),
            });
        }

        report.rows_kept = records.len();
        if report.rows_dropped > 0 {
            tracing::warn!(
                "Wellness sheet: dropped {} row(s) without a parseable timestamp",
                report.rows_dropped
            );
        }

        Normalized { records, report }
    }
}

pub fn wellness_to_raw(records: &[WellnessRecord]) -> RawTable {
    let mut headers = vec![TIMESTAMP_COLUMN.to_string(), NAME_COLUMN.to_string()];
    headers.extend(WellnessMetric::ALL.iter().map(|m| m.header().to_string()));
    headers.extend(
        [URINE_COLOR_COLUMN, SLEEP_HOURS_COLUMN, MUSCLE_PAIN_COLUMN]
            .iter()
            .map(|h| h.to_string()),
    );

    let rows = records
        .iter()
        .map(|r| {
            let mut row = vec![
                r.timestamp.format("%Y-%m-%d %H:%M:%S%.f").to_string(),
                r.name.clone(),
            ];
            row.extend(WellnessMetric::ALL.iter().map(|m| r.metric(*m).to_cell()));
            row.push(r.urine_color.clone().unwrap_or_default());
            row.push(r.sleep_hours.clone().unwrap_or_default());
            row.push(r.muscle_pain_location.clone().unwrap_or_default());
            row
        })
        .collect();

    RawTable::new(headers, rows)
}
