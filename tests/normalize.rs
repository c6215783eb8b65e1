use chrono::NaiveDate;
use squadload_rs::pipeline::ingest::read_csv;
use squadload_rs::pipeline::normalize::{
    gps_to_raw, normalize_gps, normalize_wellness, parse_calendar_date, wellness_to_raw,
};
use squadload_rs::types::session::{DayType, GpsColumn, SessionDate};
use squadload_rs::types::table::RawTable;
use squadload_rs::types::value::NumericValue;
use squadload_rs::types::wellness::WellnessMetric;

fn fixture(name: &str) -> RawTable {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let bytes = std::fs::read(&path).expect("fixture");
    read_csv(bytes.as_slice()).expect("csv")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn gps_sheet_rows_are_typed_and_counted() {
    let table = normalize_gps(&fixture("gps.csv"));

    assert_eq!(table.report.rows_read, 6);
    assert_eq!(table.report.rows_kept, 6);
    assert_eq!(table.report.rows_dropped, 0);
    assert_eq!(table.report.unparsed_dates, 2);

    let first = &table.records[0];
    assert_eq!(first.date, SessionDate::Date(date(2024, 1, 5)));
    assert_eq!(first.day_type, DayType::Before(1));
    assert_eq!(first.session, "Training A");
    assert_eq!(first.athlete_name, "Ana");
    assert_eq!(first.metric(GpsColumn::TotalDistance), NumericValue::Parsed(5432.1));
    assert_eq!(first.metric(GpsColumn::FootstrikeImbalance), NumericValue::Parsed(12.0));
    assert_eq!(first.metric(GpsColumn::MaxDecc), NumericValue::Parsed(-4.1));
}

#[test]
fn absent_and_unparseable_gps_cells_are_zero_filled() {
    let table = normalize_gps(&fixture("gps.csv"));
    let recovery = &table.records[5];

    assert_eq!(recovery.date, SessionDate::Unparsed("not a date".to_string()));
    assert_eq!(recovery.metric(GpsColumn::AcwrDist), NumericValue::ZeroFilled);
    assert_eq!(recovery.metric(GpsColumn::AcuteDist), NumericValue::ZeroFilled);
    // No such column in the sheet.
    assert_eq!(recovery.metric(GpsColumn::AcwrHir), NumericValue::ZeroFilled);
}

#[test]
fn gps_normalization_is_idempotent() {
    let once = normalize_gps(&fixture("gps.csv"));
    let twice = normalize_gps(&gps_to_raw(&once.records));

    assert_eq!(twice.records, once.records);
    assert_eq!(twice.report.unparsed_dates, 2);
}

#[test]
fn blank_gps_row_is_kept_with_an_empty_date() {
    let raw = read_csv(
        "date,session,athlete_name,total_distance\n2024-01-05,Training A,Ana,4000\n,,,\n".as_bytes(),
    )
    .expect("csv");
    let table = normalize_gps(&raw);

    assert_eq!(table.records.len(), 2);
    assert_eq!(table.report.rows_dropped, 0);
    assert_eq!(table.report.unparsed_dates, 1);
    assert_eq!(table.records[1].date, SessionDate::Unparsed(String::new()));
    assert_eq!(
        table.records[1].metric(GpsColumn::TotalDistance),
        NumericValue::ZeroFilled
    );
}

#[test]
fn invalid_utf8_cell_does_not_fail_the_sheet() {
    let bytes: &[u8] = b"date,session,athlete_name,total_distance\n\
2024-01-05,Training A,Mart\xEDnez,4000\n\
2024-01-05,Training A,Ana,5000\n";
    let raw = read_csv(bytes).expect("csv");

    assert_eq!(raw.len(), 2);
    assert_eq!(raw.rows()[0][2], "Mart\u{FFFD}nez");

    let table = normalize_gps(&raw);
    assert_eq!(table.records[1].athlete_name, "Ana");
    assert_eq!(
        table.records[0].metric(GpsColumn::TotalDistance),
        NumericValue::Parsed(4000.0)
    );
}

#[test]
fn unknown_gps_columns_are_kept_as_extra_metrics() {
    let raw = RawTable::new(
        vec![
            "date".into(),
            "athlete_name".into(),
            "total_distance".into(),
            "hsr_efforts".into(),
        ],
        vec![vec!["2024-02-01".into(), "Ana".into(), "4000".into(), "7,5".into()]],
    );
    let table = normalize_gps(&raw);

    assert_eq!(
        table.records[0].metrics.extra.get("hsr_efforts"),
        Some(&NumericValue::Parsed(7.5))
    );
    assert_eq!(normalize_gps(&gps_to_raw(&table.records)).records, table.records);
}

#[test]
fn wellness_rows_without_timestamp_are_dropped() {
    let table = normalize_wellness(&fixture("wellness.csv"));

    assert_eq!(table.report.rows_read, 5);
    assert_eq!(table.report.rows_kept, 3);
    assert_eq!(table.report.rows_dropped, 2);
}

#[test]
fn wellness_answers_are_scored() {
    let table = normalize_wellness(&fixture("wellness.csv"));
    let ana = &table.records[0];
    let bea = &table.records[1];

    assert_eq!(ana.date, date(2024, 3, 1));
    assert_eq!(ana.metric(WellnessMetric::Fatigue), NumericValue::Parsed(2.0));
    assert_eq!(ana.metric(WellnessMetric::Mood), NumericValue::Parsed(5.0));
    assert_eq!(ana.metric(WellnessMetric::Recovery), NumericValue::Parsed(8.0));
    assert_eq!(ana.muscle_pain_location, None);

    assert_eq!(bea.metric(WellnessMetric::Recovery), NumericValue::Missing);
    assert_eq!(bea.urine_color.as_deref(), Some("5"));
    assert_eq!(bea.sleep_hours.as_deref(), Some("5-7"));
    assert_eq!(bea.muscle_pain_location.as_deref(), Some("L"));
}

#[test]
fn wellness_normalization_is_idempotent() {
    let once = normalize_wellness(&fixture("wellness.csv"));
    let twice = normalize_wellness(&wellness_to_raw(&once.records));

    assert_eq!(twice.records, once.records);
}

#[test]
fn slash_dates_are_month_first_with_day_first_fallback() {
    assert_eq!(parse_calendar_date("01/05/2024"), Some(date(2024, 1, 5)));
    assert_eq!(parse_calendar_date("25/05/2024"), Some(date(2024, 5, 25)));
    assert_eq!(parse_calendar_date("2024-05-25"), Some(date(2024, 5, 25)));
    assert_eq!(
        parse_calendar_date("2024-05-25T10:30:00+02:00"),
        Some(date(2024, 5, 25))
    );
    assert_eq!(parse_calendar_date("yesterday"), None);
    assert_eq!(parse_calendar_date(""), None);
}

#[test]
fn short_rows_are_padded_to_the_header() {
    let raw = RawTable::new(
        vec!["\u{feff}date".into(), " athlete_name ".into(), "m_min".into()],
        vec![vec!["2024-02-01".into()]],
    );

    assert_eq!(raw.headers(), ["date", "athlete_name", "m_min"]);
    assert_eq!(raw.rows()[0].len(), 3);
}
