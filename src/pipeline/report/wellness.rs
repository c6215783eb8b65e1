use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::pipeline::report::{mean, DEFAULT_TREND_DAYS};
use crate::pipeline::risk::{band_muscle_pain, band_sleep, band_urine, band_wellness, BandingConfig};
use crate::types::report::{
    DailyVariable, TrendPoint, TrendVariable, WellnessAlert, WellnessDaily, WellnessEntry,
    WellnessTrend,
};
use crate::types::wellness::{WellnessMetric, WellnessRecord};

pub const ALL_PLAYERS: &str = "All";

pub fn wellness_dates(records: &[WellnessRecord]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    dates.sort_by(|a, b| b.cmp(a));
    dates.dedup();
    dates
}

pub fn wellness_players(records: &[WellnessRecord]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .filter(|r| !r.name.is_empty())
        .map(|r| r.name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

pub fn wellness_daily(
    records: &[WellnessRecord],
    date: Option<NaiveDate>,
    banding: &BandingConfig,
) -> WellnessDaily {
    let date = date.or_else(|| records.iter().map(|r| r.date).max());
    let rows: Vec<&WellnessRecord> = match date {
        Some(d) => records.iter().filter(|r| r.date == d).collect(),
        None => Vec::new(),
    };

    if rows.is_empty() {
        return WellnessDaily {
            date,
            warning: Some("No data available for the selected date.".to_string()),
            variables: Vec::new(),
            urine_alerts: Vec::new(),
            muscle_pain: Vec::new(),
            short_sleep: Vec::new(),
        };
    }

    let variables = WellnessMetric::ALL
        .iter()
        .map(|metric| DailyVariable {
            metric: *metric,
            label: metric.header(),
            scale_max: metric.scale_max(),
            entries: rows
                .iter()
                .map(|r| {
                    let value = r.metric(*metric).value();
                    WellnessEntry {
                        name: r.name.clone(),
                        value,
                        band: band_wellness(*metric, value, banding),
                    }
                })
                .collect(),
        })
        .collect();

    WellnessDaily {
        date,
        warning: None,
        variables,
        urine_alerts: urine_alerts(&rows),
        muscle_pain: muscle_pain(&rows),
        short_sleep: short_sleep(&rows),
    }
}

pub fn wellness_trend(
    records: &[WellnessRecord],
    player: Option<&str>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> WellnessTrend {
    let player = player
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != ALL_PLAYERS);
    let label = player.unwrap_or(ALL_PLAYERS).to_string();

    let range = match (start, end) {
        (Some(s), Some(e)) => Some((s, e)),
        (None, None) => records
            .iter()
            .map(|r| r.date)
            .max()
            .map(|last| (last - Duration::days(DEFAULT_TREND_DAYS), last)),
        _ => None,
    };

    let empty = |start: Option<NaiveDate>, end: Option<NaiveDate>, warning: &str| WellnessTrend {
        player: label.clone(),
        start,
        end,
        warning: Some(warning.to_string()),
        variables: Vec::new(),
        muscle_pain: Vec::new(),
        urine_alerts: Vec::new(),
        short_sleep: Vec::new(),
    };

    let Some((start, end)) = range else {
        let warning = if records.is_empty() {
            "No data available for this filter."
        } else {
            "Please select a valid date range."
        };
        return empty(start, end, warning);
    };

    let mut rows: Vec<&WellnessRecord> = records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .filter(|r| player.map_or(true, |p| r.name == p))
        .collect();
    if rows.is_empty() {
        return empty(Some(start), Some(end), "No data available for this filter.");
    }
    rows.sort_by_key(|r| r.timestamp);

    let variables = WellnessMetric::ALL
        .iter()
        .map(|metric| TrendVariable {
            metric: *metric,
            label: metric.header(),
            scale_max: metric.scale_max(),
            points: match player {
                Some(_) => rows
                    .iter()
                    .map(|r| TrendPoint {
                        date: r.date,
                        value: r.metric(*metric).value(),
                    })
                    .collect(),
                None => daily_means(&rows, *metric),
            },
        })
        .collect();

    WellnessTrend {
        player: label.clone(),
        start: Some(start),
        end: Some(end),
        warning: None,
        variables,
        muscle_pain: muscle_pain(&rows),
        urine_alerts: urine_alerts(&rows),
        short_sleep: short_sleep(&rows),
    }
}

fn daily_means(rows: &[&WellnessRecord], metric: WellnessMetric) -> Vec<TrendPoint> {
    let mut by_day: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for row in rows {
        let values = by_day.entry(row.date).or_default();
        if let Some(v) = row.metric(metric).value() {
            values.push(v);
        }
    }

    by_day
        .into_iter()
        .map(|(date, values)| TrendPoint {
            date,
            value: mean(values),
        })
        .collect()
}

fn urine_alerts(rows: &[&WellnessRecord]) -> Vec<WellnessAlert> {
    rows.iter()
        .filter(|r| band_urine(r.urine_color.as_deref()).is_alert())
        .map(|r| alert(r, r.urine_color.as_deref()))
        .collect()
}

fn muscle_pain(rows: &[&WellnessRecord]) -> Vec<WellnessAlert> {
    rows.iter()
        .filter(|r| band_muscle_pain(r.muscle_pain_location.as_deref()).is_alert())
        .map(|r| alert(r, r.muscle_pain_location.as_deref()))
        .collect()
}

fn short_sleep(rows: &[&WellnessRecord]) -> Vec<WellnessAlert> {
    rows.iter()
        .filter(|r| band_sleep(r.sleep_hours.as_deref()).is_alert())
        .map(|r| alert(r, r.sleep_hours.as_deref()))
        .collect()
}

fn alert(record: &WellnessRecord, value: Option<&str>) -> WellnessAlert {
    WellnessAlert {
        date: record.date,
        name: record.name.clone(),
        value: value.unwrap_or_default().to_string(),
    }
}
