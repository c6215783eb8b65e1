use chrono::NaiveDate;
use squadload_rs::pipeline::ingest::read_csv;
use squadload_rs::pipeline::normalize::{normalize_gps, normalize_wellness};
use squadload_rs::pipeline::report::{
    acwr_summary, athletes, player_report, session_days, session_report, wellness_daily,
    wellness_dates, wellness_players, wellness_trend, ALL_PLAYERS,
};
use squadload_rs::pipeline::risk::BandingConfig;
use squadload_rs::pipeline::workload::WorkloadEngine;
use squadload_rs::types::risk::{AcwrBand, Flag, WellnessBand};
use squadload_rs::types::session::{MetricFamily, SessionRecord};
use squadload_rs::types::wellness::{WellnessMetric, WellnessRecord};
use squadload_rs::types::workload::AcwrSource;

fn fixture(name: &str) -> Vec<u8> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read(path).expect("fixture")
}

fn gps() -> Vec<SessionRecord> {
    normalize_gps(&read_csv(fixture("gps.csv").as_slice()).expect("csv")).records
}

fn wellness() -> Vec<WellnessRecord> {
    normalize_wellness(&read_csv(fixture("wellness.csv").as_slice()).expect("csv")).records
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn session_days_are_newest_first() {
    let days = session_days(&gps());

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, date(2024, 1, 6));
    assert_eq!(days[0].sessions, vec!["Match".to_string()]);
    assert_eq!(days[1].date, date(2024, 1, 5));
    assert_eq!(athletes(&gps()), vec!["Ana".to_string(), "Bea".to_string()]);
}

#[test]
fn session_report_totals_and_alerts() {
    let report = session_report(&gps(), date(2024, 1, 5), "Training A");

    assert!(report.warning.is_none());
    let totals = report.totals.expect("totals");
    assert!((totals.total_distance - 9532.1).abs() < 1e-6);
    assert!((totals.avg_total_duration - 75.0).abs() < 1e-9);

    assert_eq!(report.footstrike_alerts.len(), 1);
    assert_eq!(report.footstrike_alerts[0].athlete_name, "Ana");

    let names: Vec<&str> = report.athletes.iter().map(|a| a.athlete_name.as_str()).collect();
    assert_eq!(names, ["Ana", "Bea"]);
    assert_eq!(report.athletes[1].footstrike, Flag::Clear);
    assert!((report.athletes[0].max_speed_pct - 95.0).abs() < 1e-9);
    assert_eq!(report.charts.len(), 4);
}

#[test]
fn unknown_session_yields_warning_and_no_charts() {
    let report = session_report(&gps(), date(2024, 1, 5), "Gym");

    assert!(report.warning.is_some());
    assert!(report.totals.is_none());
    assert!(report.charts.is_empty());
}

#[test]
fn player_report_covers_dated_sessions_in_range() {
    let report = player_report(
        &gps(),
        "Ana",
        Some(date(2024, 1, 1)),
        Some(date(2024, 1, 31)),
        &WorkloadEngine::default(),
        AcwrSource::Precomputed,
    );

    assert!(report.warning.is_none());
    assert_eq!(report.sessions, 2);
    let peaks = report.peaks.expect("peaks");
    assert_eq!(peaks.max_speed, Some(32.8));
    assert_eq!(peaks.max_accel, Some(4.2));
    assert_eq!(peaks.max_decel, Some(-4.6));

    let dist = report
        .acwr
        .iter()
        .find(|t| t.family == MetricFamily::Dist)
        .expect("dist");
    let latest = dist.latest.as_ref().expect("latest");
    assert_eq!(latest.date, date(2024, 1, 6));
    assert_eq!(latest.band, AcwrBand::DangerHigh);
    assert_eq!(report.charts.len(), 6);
}

#[test]
fn player_report_with_empty_range_has_no_charts() {
    let report = player_report(
        &gps(),
        "Ana",
        Some(date(2023, 1, 1)),
        Some(date(2023, 1, 31)),
        &WorkloadEngine::default(),
        AcwrSource::Precomputed,
    );

    assert!(report.warning.is_some());
    assert_eq!(report.sessions, 0);
    assert!(report.charts.is_empty());
}

#[test]
fn player_report_needs_both_bounds() {
    let report = player_report(
        &gps(),
        "Ana",
        Some(date(2024, 1, 1)),
        None,
        &WorkloadEngine::default(),
        AcwrSource::Computed,
    );

    assert_eq!(report.warning.as_deref(), Some("Please select a start and end date."));
    assert!(report.charts.is_empty());
}

#[test]
fn acwr_summary_lists_out_of_band_athletes() {
    let summary = acwr_summary(
        &gps(),
        date(2024, 1, 6),
        &WorkloadEngine::default(),
        AcwrSource::Precomputed,
    );

    let dist = summary
        .families
        .iter()
        .find(|f| f.family == MetricFamily::Dist)
        .expect("dist");
    assert_eq!(dist.athletes.len(), 2);
    let bands: Vec<AcwrBand> = dist.alerts.iter().map(|a| a.band).collect();
    assert_eq!(bands, [AcwrBand::DangerHigh, AcwrBand::DangerLow]);

    let hir = summary
        .families
        .iter()
        .find(|f| f.family == MetricFamily::Hir)
        .expect("hir");
    assert!(hir.athletes.iter().all(|a| a.band == AcwrBand::Unavailable));
    assert!(hir.alerts.is_empty());
    assert_eq!(summary.charts.len(), 3);
}

#[test]
fn wellness_daily_bands_each_answer() {
    let daily = wellness_daily(&wellness(), Some(date(2024, 3, 1)), &BandingConfig::default());

    assert!(daily.warning.is_none());
    let fatigue = daily
        .variables
        .iter()
        .find(|v| v.metric == WellnessMetric::Fatigue)
        .expect("fatigue");
    assert_eq!(fatigue.entries[0].band, WellnessBand::Danger);
    assert_eq!(fatigue.entries[1].band, WellnessBand::Normal);

    let recovery = daily
        .variables
        .iter()
        .find(|v| v.metric == WellnessMetric::Recovery)
        .expect("recovery");
    assert_eq!(recovery.scale_max, 10.0);
    assert_eq!(recovery.entries[1].band, WellnessBand::Missing);

    assert_eq!(daily.urine_alerts.len(), 1);
    assert_eq!(daily.urine_alerts[0].name, "Bea");
    assert_eq!(daily.muscle_pain[0].value, "L");
    assert_eq!(daily.short_sleep[0].value, "5-7");
}

#[test]
fn wellness_daily_defaults_to_latest_day() {
    let records = wellness();
    let daily = wellness_daily(&records, None, &BandingConfig::default());
    assert_eq!(daily.date, Some(date(2024, 3, 2)));

    let empty = wellness_daily(&records, Some(date(2024, 2, 1)), &BandingConfig::default());
    assert!(empty.warning.is_some());
    assert!(empty.variables.is_empty());
}

#[test]
fn wellness_trend_for_the_squad_averages_each_day() {
    let trend = wellness_trend(&wellness(), Some(ALL_PLAYERS), None, None);

    assert_eq!(trend.player, ALL_PLAYERS);
    assert_eq!(trend.end, Some(date(2024, 3, 2)));
    let fatigue = trend
        .variables
        .iter()
        .find(|v| v.metric == WellnessMetric::Fatigue)
        .expect("fatigue");
    let values: Vec<Option<f64>> = fatigue.points.iter().map(|p| p.value).collect();
    assert_eq!(values, [Some(3.0), Some(3.0)]);

    let recovery = trend
        .variables
        .iter()
        .find(|v| v.metric == WellnessMetric::Recovery)
        .expect("recovery");
    assert_eq!(recovery.points[0].value, Some(8.0));
    assert_eq!(trend.muscle_pain.len(), 2);
}

#[test]
fn wellness_trend_for_one_player() {
    let trend = wellness_trend(&wellness(), Some("Ana"), None, None);

    let fatigue = trend
        .variables
        .iter()
        .find(|v| v.metric == WellnessMetric::Fatigue)
        .expect("fatigue");
    let values: Vec<Option<f64>> = fatigue.points.iter().map(|p| p.value).collect();
    assert_eq!(values, [Some(2.0), Some(3.0)]);
    assert_eq!(trend.short_sleep.len(), 1);
}

#[test]
fn wellness_trend_warnings() {
    let records = wellness();

    let half_open = wellness_trend(&records, None, Some(date(2024, 3, 1)), None);
    assert_eq!(half_open.warning.as_deref(), Some("Please select a valid date range."));
    assert!(half_open.variables.is_empty());

    let empty = wellness_trend(&records, Some("Ana"), Some(date(2023, 1, 1)), Some(date(2023, 1, 2)));
    assert_eq!(empty.warning.as_deref(), Some("No data available for this filter."));
}

#[test]
fn wellness_selectors() {
    let records = wellness();
    assert_eq!(wellness_dates(&records), [date(2024, 3, 2), date(2024, 3, 1)]);
    assert_eq!(wellness_players(&records), ["Ana", "Bea"]);
}
